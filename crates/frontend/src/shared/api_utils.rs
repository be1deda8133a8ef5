//! API utilities for frontend-backend communication
//!
//! One call = one HTTP request. No retries, no caching: errors go straight
//! to the page that issued the request.

use contracts::shared::api::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Максимальная длина текста ошибки, показываемого пользователю
const MAX_ERROR_DETAIL_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Сервер недоступен: {0}")]
    Network(String),

    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// `LEARNING_PATH_API_BASE` set at build time wins (e.g. `http://127.0.0.1:3000`
/// when the bundle is served by `trunk serve`); otherwise requests go to the
/// origin the page was loaded from.
pub fn api_base() -> String {
    if let Some(base) = option_env!("LEARNING_PATH_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// ```rust,ignore
/// let url = api_url(contracts::shared::api::GENERATE_PATH);
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `path`, decode JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_response(response).await
}

/// POST JSON `body` to `path`, decode JSON body
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_response(response).await
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let err = http_error(status, &text);
        log::warn!("{}", err);
        return Err(err);
    }

    decode_body(&text)
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Разобрать тело ошибочного ответа.
///
/// Сервер отдаёт `{"detail": "..."}`; ошибки валидации приходят с `detail`
/// в виде списка, тогда он показывается как JSON. Любое другое тело
/// показывается как текст, обрезанный до `MAX_ERROR_DETAIL_CHARS`.
pub fn http_error(status: u16, body: &str) -> ApiError {
    let detail = if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        parsed.detail
    } else if let Some(detail) = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned())
    {
        detail.to_string()
    } else {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            "нет описания".to_string()
        } else {
            trimmed.chars().take(MAX_ERROR_DETAIL_CHARS).collect()
        }
    };

    ApiError::Http { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_learning_path::LearningPath;

    #[test]
    fn test_http_error_uses_detail_string() {
        let err = http_error(500, r#"{"detail":"Gemini timeout"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                detail: "Gemini timeout".into()
            }
        );
        assert_eq!(err.to_string(), "HTTP 500: Gemini timeout");
    }

    #[test]
    fn test_http_error_with_structured_detail() {
        let err = http_error(422, r#"{"detail":[{"loc":["body","topic"],"msg":"field required"}]}"#);
        match err {
            ApiError::Http { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("field required"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_plain_body() {
        assert_eq!(
            http_error(502, "  Bad Gateway \n"),
            ApiError::Http {
                status: 502,
                detail: "Bad Gateway".into()
            }
        );
        assert_eq!(
            http_error(404, ""),
            ApiError::Http {
                status: 404,
                detail: "нет описания".into()
            }
        );
    }

    #[test]
    fn test_http_error_truncates_long_body() {
        let body = "x".repeat(1000);
        match http_error(500, &body) {
            ApiError::Http { detail, .. } => assert_eq!(detail.len(), MAX_ERROR_DETAIL_CHARS),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_decode_body() {
        let path: LearningPath = decode_body(r#"{"topic":"Rust"}"#).unwrap();
        assert_eq!(path.topic, "Rust");

        let err = decode_body::<LearningPath>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
