// ============================================================================
// APP - Raíz de composición del cliente de la tienda
// ============================================================================
// Crea ApiClient, stores y viewmodel una sola vez y los comparte. La capa de
// render lee de aquí y reenvía las intenciones del usuario.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::{Catalog, Credentials, HealthStatus, ProductDraft};
use crate::services::{ApiClient, HttpTransport};
use crate::state::ReactiveState;
use crate::stores::{CatalogStore, SessionStore};
use crate::utils::storage::TokenStorage;
use crate::viewmodels::{AdminResult, AdminViewModel, StatusMessage};

pub struct StorefrontApp {
    config: AppConfig,
    api: ApiClient,
    session: Rc<SessionStore>,
    catalog: Rc<CatalogStore>,
    admin: AdminViewModel,
    health: ReactiveState<HealthStatus>,
}

impl StorefrontApp {
    pub fn new(
        config: AppConfig,
        transport: Rc<dyn HttpTransport>,
        storage: Rc<dyn TokenStorage>,
    ) -> Self {
        let api = ApiClient::new(config.api_base_url.clone(), transport);
        let session = Rc::new(SessionStore::new(storage, config.token_storage_key.clone()));
        let catalog = Rc::new(CatalogStore::new(api.clone()));
        let admin = AdminViewModel::new(
            api.clone(),
            Rc::clone(&session),
            Rc::clone(&catalog),
            config.language,
        );

        Self {
            config,
            api,
            session,
            catalog,
            admin,
            health: ReactiveState::default(),
        }
    }

    /// Arranque: sesión desde storage, health check y primer catálogo
    pub async fn start(&self) {
        log::info!("🚀 Storefront client -> {}", self.api.base_url());
        self.session.load();
        self.check_health().await;
        self.catalog.refresh().await;
    }

    pub async fn check_health(&self) -> HealthStatus {
        let status = match self.api.health().await {
            Ok(payload) => HealthStatus::Online(payload),
            Err(e) => {
                log::warn!("❌ API no disponible: {}", e);
                HealthStatus::Unreachable
            }
        };
        self.health.set(status.clone());
        status
    }

    pub async fn refresh_catalog(&self) -> Catalog {
        self.catalog.refresh().await
    }

    pub async fn login(&self, credentials: &Credentials) -> AdminResult {
        self.admin.login(credentials).await
    }

    pub async fn create_product(&self) -> AdminResult {
        self.admin.create_product().await
    }

    pub fn logout(&self) -> AdminResult {
        self.admin.logout()
    }

    pub fn set_draft(&self, draft: ProductDraft) {
        self.admin.set_draft(draft);
    }

    pub fn draft(&self) -> ProductDraft {
        self.admin.draft()
    }

    pub fn catalog(&self) -> Rc<CatalogStore> {
        Rc::clone(&self.catalog)
    }

    pub fn session(&self) -> Rc<SessionStore> {
        Rc::clone(&self.session)
    }

    pub fn admin(&self) -> &AdminViewModel {
        &self.admin
    }

    pub fn health(&self) -> HealthStatus {
        self.health.get()
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.admin.status()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Un único callback para cualquier cambio de estado (re-render)
    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        let callback: Rc<dyn Fn()> = Rc::new(callback);

        let cb = Rc::clone(&callback);
        self.session.subscribe(move || cb());
        let cb = Rc::clone(&callback);
        self.catalog.subscribe(move || cb());
        let cb = Rc::clone(&callback);
        self.health.subscribe(move || cb());
        self.admin.subscribe(move || callback());
    }
}
