use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured error body returned by the relay. `status` is present only
/// when the failure mirrors an upstream HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorEnvelope {
            error: error.into(),
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

impl HealthStatus {
    pub fn ok(service: impl Into<String>) -> Self {
        HealthStatus {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            service: service.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_omits_absent_status() {
        let envelope = ErrorEnvelope::new("missing API key", "provide an Authorization header");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["error"], "missing API key");
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_envelope_keeps_mirrored_status() {
        let envelope = ErrorEnvelope::new("upstream API call failed", "rate limited").with_status(429);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], 429);
        assert_eq!(value["message"], "rate limited");
    }

    #[test]
    fn test_health_status_reports_ok() {
        let health = HealthStatus::ok("rimagen-relay");
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "rimagen-relay");
    }
}
