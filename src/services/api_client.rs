// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// NO tiene lógica de negocio: construye URLs, serializa, deserializa y
// normaliza errores. Sin reintentos ni timeouts.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::ApiError;
use crate::models::{Catalog, Credentials, LoginResponse, NewProduct, Product, SessionToken};
use crate::services::transport::{Headers, HttpRequest, HttpResponse, HttpTransport, Method};
use crate::utils::constants::{ADMIN_PRODUCTS_PATH, HEALTH_PATH, LOGIN_PATH, PRODUCTS_PATH};

/// Cliente API. Barato de clonar: comparte el transporte.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET path` -> JSON
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::Get, path, None, Headers::new()).await
    }

    /// `POST path` con cuerpo JSON -> JSON
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        headers: Option<Headers>,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(Method::Post, path, Some(body), headers.unwrap_or_default())
            .await
    }

    /// Estado del backend
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get(HEALTH_PATH).await
    }

    /// Listar productos
    pub async fn get_products(&self) -> Result<Catalog, ApiError> {
        let value = self.get(PRODUCTS_PATH).await?;
        decode(value)
    }

    /// Login de admin
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Login para: {}", credentials.email);
        let value = self.post(LOGIN_PATH, credentials, None).await?;
        decode(value)
    }

    /// Crear producto. Si el servidor no devuelve un `Product` (eco u otro
    /// JSON) se devuelve `None`.
    pub async fn create_product(
        &self,
        product: &NewProduct,
        token: &SessionToken,
    ) -> Result<Option<Product>, ApiError> {
        let headers = vec![("Authorization".to_string(), token.bearer())];
        let value = self.post(ADMIN_PRODUCTS_PATH, product, Some(headers)).await?;
        Ok(serde_json::from_value::<Product>(value).ok())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        mut headers: Headers,
    ) -> Result<Value, ApiError> {
        headers.push(("Accept".to_string(), "application/json".to_string()));
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("🌐 {} {} sin respuesta: {}", method.as_str(), path, e);
            e
        })?;

        if !response.ok() {
            log::warn!("⚠️ {} {} -> HTTP {}", method.as_str(), path, response.status);
            return Err(request_failed(&response));
        }

        parse_body(&response.body)
    }
}

/// Une base y path con exactamente una barra entre ambos
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(format!("Parse error: {}", e)))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("Parse error: {}", e)))
}

fn request_failed(response: &HttpResponse) -> ApiError {
    ApiError::RequestFailed {
        status: response.status,
        detail: extract_detail(&response.body),
    }
}

/// Detalle legible de un cuerpo de error.
///
/// `{"detail": "..."}` -> el string; `{"detail": [{"msg": ..}, ..]}` -> los
/// `msg` unidos con "; "; otro JSON -> vacío; cuerpo no JSON -> el texto crudo.
pub fn extract_detail(body: &str) -> String {
    let raw = body.trim();
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return raw.to_string();
    };

    match value.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => String::new(),
    }
}
