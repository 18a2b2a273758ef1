pub mod api_client;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod http_transport;

pub use api_client::ApiClient;
pub use transport::{Headers, HttpRequest, HttpResponse, HttpTransport, Method};

#[cfg(target_arch = "wasm32")]
pub use http_transport::FetchTransport;
