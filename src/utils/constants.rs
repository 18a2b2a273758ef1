/// URL base del backend fijada en compilación (`STOREFRONT_API_URL`).
/// Si no está definida se deriva en runtime, ver `config::default_api_url`.
pub const BUILD_API_URL: Option<&str> = option_env!("STOREFRONT_API_URL");

/// Puerto por defecto del backend cuando la URL se deriva del hostname
pub const DEFAULT_API_PORT: u16 = 8000;

/// Host de último recurso (fuera del navegador o hostname vacío)
pub const FALLBACK_API_HOST: &str = "127.0.0.1";

/// Clave del token de admin en localStorage
pub const TOKEN_STORAGE_KEY: &str = "alixe_token";

/// Email precargado en el formulario de login
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@alixe.com";

// Endpoints
pub const HEALTH_PATH: &str = "/health";
pub const PRODUCTS_PATH: &str = "/products";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PRODUCTS_PATH: &str = "/admin/products";
