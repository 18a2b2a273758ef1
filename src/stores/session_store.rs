// ============================================================================
// SESSION STORE - Dueño único del token de admin
// ============================================================================
// Carga al arrancar, set en login, clear en logout. No hace peticiones: quien
// necesite autorizar lee `current_token()` y pone la cabecera Bearer.
// ============================================================================

use std::rc::Rc;

use crate::models::{Session, SessionToken};
use crate::state::ReactiveState;
use crate::utils::storage::TokenStorage;

pub struct SessionStore {
    storage: Rc<dyn TokenStorage>,
    key: String,
    session: ReactiveState<Session>,
}

impl SessionStore {
    /// Store vacío (no autenticado). Llamar a `load` para leer el storage.
    pub fn new(storage: Rc<dyn TokenStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            session: ReactiveState::new(Session::default()),
        }
    }

    /// Lee el token persistido. Si no hay (o no se puede leer) la sesión queda
    /// sin autenticar; nunca es un error.
    pub fn load(&self) -> Session {
        let token = match self.storage.read(&self.key) {
            Ok(Some(raw)) => SessionToken::new(raw),
            Ok(None) => None,
            Err(e) => {
                log::warn!("⚠️ No se pudo leer el token guardado: {}", e);
                None
            }
        };

        if token.is_some() {
            log::info!("🔑 Sesión de admin restaurada desde storage");
        }

        let session = Session { token };
        self.session.set(session.clone());
        session
    }

    /// Reemplaza el token en memoria y en storage.
    ///
    /// Se persiste primero y luego se publica el estado nuevo de una vez. Un
    /// fallo de storage se registra pero no deshace el login en esta pestaña.
    pub fn set_token(&self, token: SessionToken) {
        if let Err(e) = self.storage.write(&self.key, token.as_str()) {
            log::error!("❌ Error guardando token: {}", e);
        }
        self.session.set(Session { token: Some(token) });
    }

    /// Borra el token en memoria y en storage
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::error!("❌ Error eliminando token: {}", e);
        }
        self.session.set(Session::default());
    }

    pub fn current_token(&self) -> Option<SessionToken> {
        self.session.with(|s| s.token.clone())
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.session.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use crate::utils::TOKEN_STORAGE_KEY;

    fn store(storage: &MemoryStorage) -> SessionStore {
        SessionStore::new(Rc::new(storage.clone()), TOKEN_STORAGE_KEY)
    }

    #[test]
    fn load_without_stored_token_is_unauthenticated() {
        let storage = MemoryStorage::new();
        let session = store(&storage).load();

        assert!(!session.is_authenticated());
    }

    #[test]
    fn blank_stored_token_is_ignored() {
        let storage = MemoryStorage::new();
        storage.write(TOKEN_STORAGE_KEY, "   ").unwrap();

        assert_eq!(store(&storage).load(), Session::default());
    }

    #[test]
    fn token_survives_reload() {
        let storage = MemoryStorage::new();
        let first = store(&storage);
        first.load();
        first.set_token(SessionToken::new("abc").unwrap());

        assert_eq!(storage.read(TOKEN_STORAGE_KEY).unwrap().as_deref(), Some("abc"));

        let reloaded = store(&storage);
        let session = reloaded.load();
        assert_eq!(session.token.map(|t| t.as_str().to_string()), Some("abc".into()));
        assert!(reloaded.is_authenticated());
    }

    #[test]
    fn clear_removes_memory_and_storage() {
        let storage = MemoryStorage::new();
        let session = store(&storage);
        session.set_token(SessionToken::new("abc").unwrap());

        session.clear();

        assert_eq!(session.current_token(), None);
        assert!(storage.is_empty());
        assert!(!store(&storage).load().is_authenticated());
    }

    #[test]
    fn subscribers_see_complete_session() {
        let storage = MemoryStorage::new();
        let session = Rc::new(store(&storage));
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));

        let observer = Rc::downgrade(&session);
        let sink = Rc::clone(&seen);
        session.subscribe(move || {
            if let Some(s) = observer.upgrade() {
                sink.borrow_mut().push(s.is_authenticated());
            }
        });

        session.set_token(SessionToken::new("t").unwrap());
        session.clear();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
