// ============================================================================
// TRANSPORTE FETCH (gloo-net) - solo navegador
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use crate::errors::ApiError;
use crate::services::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Transporte real sobre `fetch` del navegador
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| ApiError::Transport(format!("Request build error: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Transport(format!("Network error: {}", e)))?;

        let status = response.status();
        // Un cuerpo ilegible no es fallo de red: se trata como vacío
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
