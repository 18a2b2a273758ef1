use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_ADMIN_EMAIL;

/// Cuerpo de `POST /login`
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_EMAIL, "")
    }
}

// La contraseña nunca sale en logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Respuesta de `POST /login`; el resto de campos se ignora
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Token de sesión no vacío. Solo se construye a partir de un valor real
/// (respuesta de login o storage), nunca se fabrica.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Valor de la cabecera `Authorization`
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Sesión de admin: sin token = no autenticado
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<SessionToken>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_are_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("   ").is_none());
        assert_eq!(SessionToken::new("abc").unwrap().bearer(), "Bearer abc");
    }

    #[test]
    fn secrets_stay_out_of_debug_output() {
        let creds = Credentials::new("admin@alixe.com", "hunter2");
        let token = SessionToken::new("secret-token").unwrap();

        assert!(!format!("{:?}", creds).contains("hunter2"));
        assert!(!format!("{:?}", token).contains("secret-token"));
    }

    #[test]
    fn login_response_tolerates_extra_fields() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"access_token":"t1","token_type":"bearer","expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(response.access_token.as_deref(), Some("t1"));

        let empty: LoginResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.access_token, None);
    }

    #[test]
    fn default_credentials_prefill_admin_email() {
        let creds = Credentials::default();
        assert_eq!(creds.email, DEFAULT_ADMIN_EMAIL);
        assert!(creds.password.is_empty());
    }
}
