pub mod catalog_store;
pub mod session_store;

pub use catalog_store::{CatalogState, CatalogStore};
pub use session_store::SessionStore;
