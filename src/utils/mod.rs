// Utils compartidos

pub mod constants;
pub mod i18n;
pub mod storage;

pub use constants::*;
pub use i18n::{status_text, t, Language};
pub use storage::{MemoryStorage, TokenStorage};

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
