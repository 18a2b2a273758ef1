// ============================================================================
// STOREFRONT CLIENT - Núcleo del cliente web de la tienda (RUST + WASM)
// ============================================================================
// Capas:
// - Services: SOLO comunicación HTTP (ApiClient + transporte)
// - Stores: dueños únicos de sesión y catálogo
// - ViewModels: pipeline de acciones de admin
// - State: estado reactivo con Rc<RefCell> + subscribers
// - Models: estructuras compartidas con backend
// La capa de render es externa: consume el estado y reenvía intenciones.
// ============================================================================

pub mod app;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod testing;

pub use app::StorefrontApp;
pub use config::{AppConfig, CONFIG};
pub use errors::{AdminError, ApiError, StorageError, ValidationError};
pub use models::{Catalog, Credentials, HealthStatus, Product, ProductDraft, ProductId, Session};
pub use stores::{CatalogState, CatalogStore, SessionStore};
pub use viewmodels::{AdminOutcome, AdminResult, AdminViewModel, StatusMessage};
