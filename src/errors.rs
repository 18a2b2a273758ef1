// ============================================================================
// ERRORES - Taxonomía única para transporte, servidor, storage y formularios
// ============================================================================

/// Error de la capa HTTP. El `ApiClient` nunca lo traga: siempre llega al llamador.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No llegó ninguna respuesta (red, DNS, CORS)
    #[error("transport error: {0}")]
    Transport(String),

    /// El servidor respondió con un status fuera de 2xx
    #[error("request failed with HTTP {status}: {detail}")]
    RequestFailed { status: u16, detail: String },

    /// Respuesta 2xx cuyo cuerpo no es el JSON esperado
    #[error("decode error: {0}")]
    Decode(String),

    /// El cuerpo de la petición no se pudo serializar; no se envió nada
    #[error("encode error: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage unavailable")]
    Unavailable,

    #[error("could not write key {0}")]
    Write(String),

    #[error("could not read key {0}")]
    Read(String),
}

/// Validación local del borrador antes de enviarlo
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("price must be a finite non-negative number, got {0:?}")]
    InvalidPrice(String),
}

/// Resultado fallido de una acción de admin (login / alta de producto).
///
/// Es un valor puro: el texto que ve el usuario lo decide `utils::i18n`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminError {
    #[error("no session token, login required")]
    NotLoggedIn,

    #[error("invalid draft: {0}")]
    InvalidDraft(#[from] ValidationError),

    #[error("login rejected (HTTP {status}): {detail}")]
    LoginRejected { status: u16, detail: String },

    #[error("login response did not carry an access token")]
    MissingToken,

    #[error("not authorized (HTTP {status}): {detail}")]
    Unauthorized { status: u16, detail: String },

    #[error("product rejected (HTTP {status}): {detail}")]
    ProductRejected { status: u16, detail: String },

    #[error("server unreachable: {0}")]
    Connectivity(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("request could not be built: {0}")]
    RequestNotSent(String),
}

impl AdminError {
    /// Detalle enviado por el servidor, si lo hay
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            AdminError::LoginRejected { detail, .. }
            | AdminError::Unauthorized { detail, .. }
            | AdminError::ProductRejected { detail, .. } => {
                let detail = detail.trim();
                if detail.is_empty() {
                    None
                } else {
                    Some(detail)
                }
            }
            _ => None,
        }
    }
}
