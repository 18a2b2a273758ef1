use serde::{Deserialize, Serialize};

use crate::utils::constants::{BUILD_API_URL, DEFAULT_API_PORT, FALLBACK_API_HOST, TOKEN_STORAGE_KEY};
use crate::utils::i18n::Language;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
    pub language: Language,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: api_url_for_host(FALLBACK_API_HOST),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            language: Language::En,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let api_base_url = BUILD_API_URL
            .map(str::to_string)
            .unwrap_or_else(default_api_url);

        Self {
            api_base_url: normalize_base_url(&api_base_url),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            language: option_env!("STOREFRONT_LANGUAGE")
                .map(Language::from_code)
                .unwrap_or_default(),
            enable_logging: option_env!("STOREFRONT_ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// Misma config con otra URL base (p. ej. la que pase la página)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = normalize_base_url(base_url);
        self
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// URL base sin barras finales
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn api_url_for_host(host: &str) -> String {
    format!("http://{}:{}", host, DEFAULT_API_PORT)
}

/// En navegador: mismo host que la página, puerto 8000
#[cfg(target_arch = "wasm32")]
pub fn default_api_url() -> String {
    let host = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| FALLBACK_API_HOST.to_string());
    api_url_for_host(&host)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_api_url() -> String {
    api_url_for_host(FALLBACK_API_HOST)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let config = AppConfig::default().with_base_url(" https://api.alixe.store/// ");
        assert_eq!(config.api_base_url, "https://api.alixe.store");
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.token_storage_key, "alixe_token");
        assert!(config.is_logging_enabled());
    }

    #[test]
    fn env_config_has_no_trailing_slash() {
        assert!(!CONFIG.api_base_url.ends_with('/'));
        assert!(!CONFIG.api_base_url.is_empty());
    }
}
