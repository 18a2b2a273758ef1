pub mod admin_viewmodel;

pub use admin_viewmodel::{AdminOutcome, AdminResult, AdminViewModel, StatusMessage};
