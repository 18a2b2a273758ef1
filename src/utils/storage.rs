// ============================================================================
// STORAGE - Persistencia clave/valor del cliente
// ============================================================================
// En navegador: localStorage (valores en crudo, sin JSON).
// Fuera del navegador / tests: memoria compartida.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::errors::StorageError;

/// Storage persistente de strings. Es la única puerta a localStorage:
/// nadie más lo toca directamente.
pub trait TokenStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage en memoria. Los clones comparten el mismo mapa, así que un
/// `SessionStore` nuevo sobre un clon simula una recarga de página.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo_storage::{LocalStorage, Storage};

    use super::TokenStorage;
    use crate::errors::StorageError;

    /// localStorage del navegador.
    ///
    /// Se usa `LocalStorage::raw()` porque el token se guarda como string
    /// plano, no como JSON.
    #[derive(Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            // raw() hace panic si no hay window; lo comprobamos antes
            web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
                .ok_or(StorageError::Unavailable)?;
            Ok(LocalStorage::raw())
        }
    }

    impl TokenStorage for BrowserStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Self::storage()?
                .get_item(key)
                .map_err(|_| StorageError::Read(key.to_string()))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Write(key.to_string()))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            Self::storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Write(key.to_string()))
        }
    }
}
