// ============================================================================
// WEB - Punto de entrada WASM y fachada para JavaScript
// ============================================================================
// La capa de render (JS) crea un StorefrontHandle, se suscribe a cambios y
// reenvía intenciones: login, alta de producto, logout, refresco.
// ============================================================================

use std::rc::Rc;

use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::app::StorefrontApp;
use crate::config::CONFIG;
use crate::models::{Credentials, ProductDraft};
use crate::services::FetchTransport;
use crate::utils::BrowserStorage;
use crate::viewmodels::AdminResult;

#[wasm_bindgen(start)]
pub fn main() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🛍️ Storefront client cargado");
}

/// Respuesta de una acción para JS
#[derive(Serialize)]
struct ActionReply {
    ok: bool,
    message: String,
}

fn reply(app: &StorefrontApp, result: &AdminResult) -> JsValue {
    let reply = ActionReply {
        ok: result.is_ok(),
        message: app.status().map(|s| s.text).unwrap_or_default(),
    };
    to_json(&reply).unwrap_or(JsValue::NULL)
}

fn to_json<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_json::to_string(value)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub struct StorefrontHandle {
    app: Rc<StorefrontApp>,
}

#[wasm_bindgen]
impl StorefrontHandle {
    /// `base_url` opcional; si no viene se usa la configuración de compilación
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>) -> StorefrontHandle {
        let config = match base_url {
            Some(url) => CONFIG.clone().with_base_url(&url),
            None => CONFIG.clone(),
        };
        let app = StorefrontApp::new(config, Rc::new(FetchTransport), Rc::new(BrowserStorage));
        Self { app: Rc::new(app) }
    }

    pub fn start(&self) -> Promise {
        let app = Rc::clone(&self.app);
        future_to_promise(async move {
            app.start().await;
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn login(&self, email: String, password: String) -> Promise {
        let app = Rc::clone(&self.app);
        future_to_promise(async move {
            let result = app.login(&Credentials::new(email, password)).await;
            Ok(reply(&app, &result))
        })
    }

    pub fn create_product(&self) -> Promise {
        let app = Rc::clone(&self.app);
        future_to_promise(async move {
            let result = app.create_product().await;
            Ok(reply(&app, &result))
        })
    }

    pub fn logout(&self) -> JsValue {
        let result = self.app.logout();
        reply(&self.app, &result)
    }

    pub fn refresh_catalog(&self) -> Promise {
        let app = Rc::clone(&self.app);
        future_to_promise(async move {
            let catalog = app.refresh_catalog().await;
            to_json(&catalog)
        })
    }

    /// Reemplaza el borrador con un JSON `{name, description, price, image_url}`
    pub fn set_draft(&self, json: &str) -> Result<(), JsValue> {
        let draft: ProductDraft = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid draft: {}", e)))?;
        self.app.set_draft(draft);
        Ok(())
    }

    pub fn draft(&self) -> Result<JsValue, JsValue> {
        to_json(&self.app.draft())
    }

    pub fn catalog(&self) -> Result<JsValue, JsValue> {
        to_json(&self.app.catalog().catalog())
    }

    pub fn is_catalog_loaded(&self) -> bool {
        self.app.catalog().is_loaded()
    }

    pub fn status(&self) -> Option<String> {
        self.app.status().map(|s| s.text)
    }

    pub fn is_logged_in(&self) -> bool {
        self.app.session().is_authenticated()
    }

    pub fn default_email(&self) -> String {
        Credentials::default().email
    }

    pub fn health(&self) -> Result<JsValue, JsValue> {
        to_json(&self.app.health())
    }

    pub fn api_base_url(&self) -> String {
        self.app.config().api_base_url.clone()
    }

    /// `callback()` se llama tras cada cambio de estado
    pub fn subscribe(&self, callback: Function) {
        self.app.subscribe(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::error!("❌ Error en callback de render: {:?}", e);
            }
        });
    }
}
