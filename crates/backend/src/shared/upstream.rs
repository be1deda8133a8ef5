//! Клиент внешнего сервиса генерации учебных планов.
//!
//! Сервер ничего не генерирует сам: запросы `/api/*` уходят как есть,
//! статус и тело ответа возвращаются браузеру без изменений.

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api::ApiErrorBody;
use std::time::Duration;
use thiserror::Error;

use super::config::UpstreamConfig;

/// Заголовки запроса, которые передаются сервису
const FORWARDED_REQUEST_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::ACCEPT];

/// Ошибки обращения к сервису. Ответ сервиса с любым статусом ошибкой не считается.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Превышено время ожидания ответа от сервиса генерации (>{0} сек)")]
    Timeout(u64),

    #[error("Сервис генерации недоступен: {0}")]
    Unavailable(String),

    #[error("Не удалось прочитать ответ сервиса генерации: {0}")]
    Body(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Unavailable(_) | ProxyError::Body(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn from_reqwest(e: reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            ProxyError::Timeout(timeout_secs)
        } else if e.is_body() || e.is_decode() {
            ProxyError::Body(e.to_string())
        } else {
            ProxyError::Unavailable(e.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Адрес запроса к сервису: `base_url` + путь (без `/api`, если так настроено) + query
pub fn upstream_url(base_url: &str, path: &str, query: Option<&str>, strip_api_prefix: bool) -> String {
    let mut path = path;
    if strip_api_prefix {
        if let Some(rest) = path.strip_prefix("/api") {
            if rest.is_empty() || rest.starts_with('/') {
                path = rest;
            }
        }
    }
    let path = if path.is_empty() { "/" } else { path };

    let mut url = format!("{}{}", base_url.trim().trim_end_matches('/'), path);
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
    strip_api_prefix: bool,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            strip_api_prefix: config.strip_api_prefix,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str, query: Option<&str>) -> String {
        upstream_url(&self.base_url, path, query, self.strip_api_prefix)
    }

    /// Один запрос к сервису, без повторов
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, ProxyError> {
        let url = self.url_for(path, query);
        tracing::debug!("proxy {} {} -> {}", method, path, url);

        let mut request = self.client.request(method.clone(), &url);
        for name in FORWARDED_REQUEST_HEADERS {
            if let Some(value) = headers.get(&name) {
                request = request.header(name, value.clone());
            }
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("upstream {} {} failed: {}", method, url, e);
            ProxyError::from_reqwest(e, self.timeout_secs)
        })?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProxyError::from_reqwest(e, self.timeout_secs))?;

        if !status.is_success() {
            tracing::warn!("upstream {} {} answered {}", method, url, status);
        }

        let mut out = Response::builder().status(status);
        if let Some(ct) = content_type {
            out = out.header(header::CONTENT_TYPE, ct);
        } else if !bytes.is_empty() {
            out = out.header(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            );
        }
        out.body(Body::from(bytes))
            .map_err(|e| ProxyError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_url_strips_api_prefix() {
        let base = "http://127.0.0.1:8000";
        assert_eq!(
            upstream_url(base, "/api/generate", None, true),
            "http://127.0.0.1:8000/generate"
        );
        assert_eq!(
            upstream_url(base, "/api/learning-path/abc", None, true),
            "http://127.0.0.1:8000/learning-path/abc"
        );
        assert_eq!(upstream_url(base, "/api", None, true), "http://127.0.0.1:8000/");
        // префикс только целым сегментом
        assert_eq!(
            upstream_url(base, "/apiary", None, true),
            "http://127.0.0.1:8000/apiary"
        );
    }

    #[test]
    fn test_upstream_url_keeps_prefix_and_query() {
        assert_eq!(
            upstream_url("https://paths.example.com/v1/", "/api/health", Some("verbose=1"), false),
            "https://paths.example.com/v1/api/health?verbose=1"
        );
        assert_eq!(
            upstream_url("http://h:8000", "/api/health", Some(""), true),
            "http://h:8000/health"
        );
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(ProxyError::Timeout(90).status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            ProxyError::Unavailable("connection refused".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(ProxyError::Body("eof".into()).status(), StatusCode::BAD_GATEWAY);
        assert!(ProxyError::Timeout(90).to_string().contains("90"));
    }
}
