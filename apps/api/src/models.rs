use serde::{Deserialize, Serialize};

/// Health check response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serializes_to_ok() {
        let body = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_health_response_round_trips() {
        let parsed: HealthResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(parsed, HealthResponse::ok());
    }
}
