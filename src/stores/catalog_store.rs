// ============================================================================
// CATALOG STORE - Lista de productos en memoria
// ============================================================================
// Cada refresh reemplaza el catálogo entero con la respuesta del servidor.
// Los refresh concurrentes llevan número de secuencia: solo se aplica una
// respuesta si su secuencia es la más alta vista hasta ahora.
// ============================================================================

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};

use crate::errors::ApiError;
use crate::models::Catalog;
use crate::services::ApiClient;
use crate::state::ReactiveState;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    /// Todavía no terminó ningún refresh
    #[default]
    NotLoaded,
    Loaded(Catalog),
}

impl CatalogState {
    pub fn catalog(&self) -> Catalog {
        match self {
            CatalogState::NotLoaded => Catalog::empty(),
            CatalogState::Loaded(catalog) => catalog.clone(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CatalogState::NotLoaded => true,
            CatalogState::Loaded(catalog) => catalog.is_empty(),
        }
    }
}

pub struct CatalogStore {
    api: ApiClient,
    state: ReactiveState<CatalogState>,
    /// Última secuencia emitida
    issued: Cell<u64>,
    /// Secuencia de la última respuesta aplicada
    applied: Cell<u64>,
    last_error: RefCell<Option<ApiError>>,
    last_refreshed_at: Cell<Option<DateTime<Utc>>>,
}

impl CatalogStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: ReactiveState::new(CatalogState::NotLoaded),
            issued: Cell::new(0),
            applied: Cell::new(0),
            last_error: RefCell::new(None),
            last_refreshed_at: Cell::new(None),
        }
    }

    /// Pide el catálogo y lo reemplaza con la respuesta.
    ///
    /// Un fallo (red o HTTP) deja el catálogo vacío y guarda el error en
    /// `last_error`; nunca se propaga. Si mientras tanto se lanzó un refresh
    /// más nuevo y ya se aplicó, esta respuesta se descarta. Devuelve el
    /// catálogo vigente al terminar.
    pub async fn refresh(&self) -> Catalog {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        log::debug!("📦 Refresh de catálogo #{}", seq);

        let result = self.api.get_products().await;

        if seq <= self.applied.get() {
            log::info!("⏭️ Respuesta de catálogo #{} obsoleta, descartada", seq);
            return self.catalog();
        }
        self.applied.set(seq);
        self.last_refreshed_at.set(Some(Utc::now()));

        let catalog = match result {
            Ok(catalog) => {
                log::info!("✅ Catálogo cargado: {} productos", catalog.len());
                *self.last_error.borrow_mut() = None;
                catalog
            }
            Err(e) => {
                log::warn!("⚠️ No se pudo cargar el catálogo, se muestra vacío: {}", e);
                *self.last_error.borrow_mut() = Some(e);
                Catalog::empty()
            }
        };

        self.state.set(CatalogState::Loaded(catalog.clone()));
        catalog
    }

    pub fn state(&self) -> CatalogState {
        self.state.get()
    }

    pub fn catalog(&self) -> Catalog {
        self.state.with(CatalogState::catalog)
    }

    pub fn is_loaded(&self) -> bool {
        self.state.with(CatalogState::is_loaded)
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(CatalogState::is_empty)
    }

    /// Error del último refresh aplicado. Permite distinguir "vacío" de
    /// "no se pudo consultar" sin cambiar lo que se muestra.
    pub fn last_error(&self) -> Option<ApiError> {
        self.last_error.borrow().clone()
    }

    pub fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed_at.get()
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.state.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;
    use crate::services::HttpResponse;
    use crate::testing::{block_on, products_json, yield_now, ScriptedTransport};
    use std::rc::Rc;

    fn store(transport: &Rc<ScriptedTransport>) -> CatalogStore {
        CatalogStore::new(ApiClient::new("http://api.test", transport.clone()))
    }

    fn ids(catalog: &Catalog) -> Vec<ProductId> {
        catalog.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn starts_not_loaded_and_empty() {
        let transport = Rc::new(ScriptedTransport::new());
        let catalog = store(&transport);

        assert_eq!(catalog.state(), CatalogState::NotLoaded);
        assert!(catalog.is_empty());
        assert!(!catalog.is_loaded());
    }

    #[test]
    fn refresh_replaces_contents_verbatim() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.reply(HttpResponse::new(200, products_json(&[1, 2, 3])));
        transport.reply(HttpResponse::new(200, products_json(&[9])));
        let catalog = store(&transport);

        let first = block_on(catalog.refresh());
        assert_eq!(ids(&first), vec![ProductId::Number(1), ProductId::Number(2), ProductId::Number(3)]);

        block_on(catalog.refresh());
        assert_eq!(ids(&catalog.catalog()), vec![ProductId::Number(9)]);
        assert!(catalog.is_loaded());
        assert!(catalog.last_refreshed_at().is_some());
        assert_eq!(transport.requests()[0].url, "http://api.test/products");
    }

    #[test]
    fn transport_failure_yields_empty_catalog() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.reply(HttpResponse::new(200, products_json(&[1])));
        transport.fail("dns failure");
        let catalog = store(&transport);

        block_on(catalog.refresh());
        let after_failure = block_on(catalog.refresh());

        assert!(after_failure.is_empty());
        assert_eq!(catalog.state(), CatalogState::Loaded(Catalog::empty()));
        assert!(matches!(catalog.last_error(), Some(ApiError::Transport(_))));
    }

    #[test]
    fn http_failure_yields_empty_catalog() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.reply(HttpResponse::new(500, "boom"));
        let catalog = store(&transport);

        assert!(block_on(catalog.refresh()).is_empty());
        assert_eq!(catalog.last_error().and_then(|e| e.status()), Some(500));
    }

    #[test]
    fn success_clears_previous_error() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.fail("offline");
        transport.reply(HttpResponse::new(200, products_json(&[4])));
        let catalog = store(&transport);

        block_on(catalog.refresh());
        block_on(catalog.refresh());

        assert_eq!(catalog.last_error(), None);
        assert_eq!(catalog.catalog().len(), 1);
    }

    #[test]
    fn late_response_of_older_refresh_is_discarded() {
        let transport = Rc::new(ScriptedTransport::new());
        let older = transport.defer();
        let newer = transport.defer();
        let catalog = store(&transport);

        block_on(async {
            futures::join!(catalog.refresh(), catalog.refresh(), async move {
                // La respuesta nueva llega primero, la vieja después
                let _ = newer.send(Ok(HttpResponse::new(200, products_json(&[20, 21]))));
                yield_now().await;
                let _ = older.send(Ok(HttpResponse::new(200, products_json(&[10]))));
            });
        });

        assert_eq!(ids(&catalog.catalog()), vec![ProductId::Number(20), ProductId::Number(21)]);
    }

    #[test]
    fn in_order_responses_keep_the_newest() {
        let transport = Rc::new(ScriptedTransport::new());
        let older = transport.defer();
        let newer = transport.defer();
        let catalog = store(&transport);

        block_on(async {
            futures::join!(catalog.refresh(), catalog.refresh(), async move {
                let _ = older.send(Ok(HttpResponse::new(200, products_json(&[10]))));
                yield_now().await;
                let _ = newer.send(Ok(HttpResponse::new(200, products_json(&[20]))));
            });
        });

        assert_eq!(ids(&catalog.catalog()), vec![ProductId::Number(20)]);
    }

    #[test]
    fn subscribers_are_notified_once_per_applied_refresh() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.reply(HttpResponse::new(200, products_json(&[1])));
        let catalog = store(&transport);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        catalog.subscribe(move || counter.set(counter.get() + 1));
        block_on(catalog.refresh());

        assert_eq!(calls.get(), 1);
    }
}
