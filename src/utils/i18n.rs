// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN - Resultado de acción -> texto de estado
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::AdminError;
use crate::viewmodels::{AdminOutcome, AdminResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    /// Acepta "en", "TR", "tr-TR"...; cualquier otra cosa cae a inglés
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        if code == "tr" || code.starts_with("tr-") || code.starts_with("tr_") {
            Language::Tr
        } else {
            Language::En
        }
    }
}

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang {
        Language::En => {
            translations.insert("login_ok", "Admin login succeeded ✅");
            translations.insert("login_failed", "Login failed");
            translations.insert("login_no_token", "Login failed: the server did not return a token");
            translations.insert("logged_out", "Logged out.");
            translations.insert("product_added", "Product added ✅");
            translations.insert("product_failed", "Could not add product");
            translations.insert("must_login", "You must log in as admin first.");
            translations.insert("unauthorized", "Not authorized. Please log in again.");
            translations.insert("invalid_price", "Price must be a non-negative number.");
            translations.insert("connectivity", "Could not reach the API ❌");
            translations.insert("unexpected", "Unexpected response from the server");
            translations.insert("request_not_sent", "The request could not be prepared");
        }
        Language::Tr => {
            translations.insert("login_ok", "Admin girişi başarılı ✅");
            translations.insert("login_failed", "Giriş başarısız");
            translations.insert("login_no_token", "Giriş başarısız: sunucu token döndürmedi");
            translations.insert("logged_out", "Çıkış yapıldı.");
            translations.insert("product_added", "Ürün eklendi ✅");
            translations.insert("product_failed", "Ürün eklenemedi");
            translations.insert("must_login", "Önce admin girişi yapmalısın.");
            translations.insert("unauthorized", "Yetkisiz işlem. Lütfen tekrar giriş yap.");
            translations.insert("invalid_price", "Fiyat negatif olmayan bir sayı olmalı.");
            translations.insert("connectivity", "API'a ulaşılamadı ❌");
            translations.insert("unexpected", "Sunucudan beklenmeyen yanıt");
            translations.insert("request_not_sent", "İstek hazırlanamadı");
        }
    }

    translations
}

/// Traducir una clave; si falta se devuelve la propia clave
pub fn t(key: &str, lang: Language) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Texto de estado para el resultado de una acción de admin.
///
/// Los rechazos del servidor muestran su `detail` cuando existe.
pub fn status_text(result: &AdminResult, lang: Language) -> String {
    match result {
        Ok(AdminOutcome::LoggedIn) => t("login_ok", lang),
        Ok(AdminOutcome::LoggedOut) => t("logged_out", lang),
        Ok(AdminOutcome::ProductAdded(_)) => t("product_added", lang),
        Err(error) => error_text(error, lang),
    }
}

fn error_text(error: &AdminError, lang: Language) -> String {
    let with_detail = |fallback: &str| {
        error
            .server_detail()
            .map(str::to_string)
            .unwrap_or_else(|| t(fallback, lang))
    };

    match error {
        AdminError::NotLoggedIn => t("must_login", lang),
        AdminError::InvalidDraft(_) => t("invalid_price", lang),
        AdminError::LoginRejected { .. } => with_detail("login_failed"),
        AdminError::MissingToken => t("login_no_token", lang),
        AdminError::Unauthorized { .. } => format!(
            "{} ({})",
            t("unauthorized", lang),
            with_detail("product_failed")
        ),
        AdminError::ProductRejected { .. } => with_detail("product_failed"),
        AdminError::Connectivity(_) => t("connectivity", lang),
        AdminError::UnexpectedResponse(_) => t("unexpected", lang),
        AdminError::RequestNotSent(_) => t("request_not_sent", lang),
    }
}
