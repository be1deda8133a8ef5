//! Endpoint paths and envelope types of the learning path API.

use serde::{Deserialize, Serialize};

pub const GENERATE_PATH: &str = "/api/generate";
pub const HEALTH_PATH: &str = "/api/health";

/// Path of a stored learning path. The id is percent-encoded.
pub fn learning_path_path(id: &str) -> String {
    format!("/api/learning-path/{}", urlencoding::encode(id))
}

/// Тело ошибки сервера (`{"detail": "..."}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Ответ GET /api/health
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_path_path_encodes_id() {
        assert_eq!(learning_path_path("abc-123"), "/api/learning-path/abc-123");
        assert_eq!(learning_path_path("a/b c"), "/api/learning-path/a%2Fb%20c");
    }

    #[test]
    fn test_error_body_decodes() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail":"GOOGLE_API_KEY environment variable not set"}"#)
                .unwrap();
        assert_eq!(body.detail, "GOOGLE_API_KEY environment variable not set");
    }

    #[test]
    fn test_health_status() {
        assert!(HealthStatus { status: "healthy".into() }.is_healthy());
        assert!(!HealthStatus { status: "degraded".into() }.is_healthy());
    }
}
