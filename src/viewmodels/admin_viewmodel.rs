// ============================================================================
// ADMIN VIEWMODEL - Pipeline de acciones de admin
// ============================================================================
// login / alta de producto / logout. Cada acción devuelve un resultado
// etiquetado (AdminResult) y deja un único mensaje de estado, el más reciente.
// El texto del mensaje lo decide utils::i18n, no este módulo.
// ============================================================================

use std::rc::Rc;

use crate::errors::{AdminError, ApiError};
use crate::models::{Credentials, Product, ProductDraft, SessionToken};
use crate::services::ApiClient;
use crate::state::ReactiveState;
use crate::stores::{CatalogStore, SessionStore};
use crate::utils::i18n::{status_text, Language};

#[derive(Clone, Debug, PartialEq)]
pub enum AdminOutcome {
    LoggedIn,
    /// Producto creado; `None` si el servidor respondió con un eco
    ProductAdded(Option<Product>),
    LoggedOut,
}

pub type AdminResult = Result<AdminOutcome, AdminError>;

/// Último mensaje de estado para la UI
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct AdminViewModel {
    api: ApiClient,
    session: Rc<SessionStore>,
    catalog: Rc<CatalogStore>,
    draft: ReactiveState<ProductDraft>,
    status: ReactiveState<Option<StatusMessage>>,
    language: Language,
}

impl AdminViewModel {
    pub fn new(
        api: ApiClient,
        session: Rc<SessionStore>,
        catalog: Rc<CatalogStore>,
        language: Language,
    ) -> Self {
        Self {
            api,
            session,
            catalog,
            draft: ReactiveState::default(),
            status: ReactiveState::new(None),
            language,
        }
    }

    /// Login de admin.
    ///
    /// Un 2xx con token abre sesión; un rechazo del servidor la deja cerrada.
    /// Sin respuesta (red) la sesión queda como estaba.
    pub async fn login(&self, credentials: &Credentials) -> AdminResult {
        let result = self.try_login(credentials).await;
        self.report(result)
    }

    async fn try_login(&self, credentials: &Credentials) -> AdminResult {
        let response = self.api.login(credentials).await.map_err(|e| match e {
            ApiError::RequestFailed { status, detail } => {
                self.session.clear();
                AdminError::LoginRejected { status, detail }
            }
            other => from_api_error(other),
        })?;

        let token = response
            .access_token
            .and_then(SessionToken::new)
            .ok_or(AdminError::MissingToken)?;

        self.session.set_token(token);
        log::info!("✅ Login de admin correcto: {}", credentials.email);
        Ok(AdminOutcome::LoggedIn)
    }

    /// Envía el borrador actual.
    ///
    /// Sin token no hay petición. En éxito se refresca el catálogo y se vacía
    /// el borrador, salvo que se haya editado mientras la petición estaba en
    /// vuelo; en cualquier fallo el borrador se conserva.
    pub async fn create_product(&self) -> AdminResult {
        let result = self.try_create_product().await;
        let result = self.report(result);

        if result.is_ok() {
            self.catalog.refresh().await;
        }
        result
    }

    async fn try_create_product(&self) -> AdminResult {
        let token = self.session.current_token().ok_or(AdminError::NotLoggedIn)?;
        let submitted = self.draft.get();
        let payload = submitted.validate()?;

        let created = self
            .api
            .create_product(&payload, &token)
            .await
            .map_err(|e| match e {
                ApiError::RequestFailed { status, detail } if status == 401 || status == 403 => {
                    // El servidor decide si el token vale; no se borra la sesión
                    AdminError::Unauthorized { status, detail }
                }
                ApiError::RequestFailed { status, detail } => {
                    AdminError::ProductRejected { status, detail }
                }
                other => from_api_error(other),
            })?;

        if self.draft.with(|current| *current == submitted) {
            self.draft.set(ProductDraft::default());
        } else {
            log::debug!("✏️ Borrador editado durante el envío, se conserva");
        }
        log::info!("🆕 Producto creado: {}", payload.name);
        Ok(AdminOutcome::ProductAdded(created))
    }

    /// Logout local, sin red
    pub fn logout(&self) -> AdminResult {
        self.session.clear();
        log::info!("👋 Logout");
        self.report(Ok(AdminOutcome::LoggedOut))
    }

    pub fn draft(&self) -> ProductDraft {
        self.draft.get()
    }

    pub fn set_draft(&self, draft: ProductDraft) {
        self.draft.set(draft);
    }

    pub fn update_draft(&self, updater: impl FnOnce(&mut ProductDraft)) {
        self.draft.update(updater);
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.status.get()
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        let callback = Rc::new(callback);
        let on_draft = Rc::clone(&callback);
        self.draft.subscribe(move || on_draft());
        self.status.subscribe(move || callback());
    }

    /// Sobrescribe el mensaje de estado con el del resultado
    fn report(&self, result: AdminResult) -> AdminResult {
        if let Err(e) = &result {
            log::warn!("⚠️ Acción de admin fallida: {}", e);
        }
        self.status.set(Some(StatusMessage {
            text: status_text(&result, self.language),
            is_error: result.is_err(),
        }));
        result
    }
}

fn from_api_error(error: ApiError) -> AdminError {
    match error {
        ApiError::Transport(msg) => AdminError::Connectivity(msg),
        ApiError::Decode(msg) => AdminError::UnexpectedResponse(msg),
        ApiError::Encode(msg) => AdminError::RequestNotSent(msg),
        ApiError::RequestFailed { status, detail } => AdminError::ProductRejected { status, detail },
    }
}
