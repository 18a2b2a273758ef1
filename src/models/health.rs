use serde::Serialize;

/// Estado del backend según `GET /health`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "payload", rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Unknown,
    Online(serde_json::Value),
    Unreachable,
}

impl HealthStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, HealthStatus::Online(_))
    }
}
