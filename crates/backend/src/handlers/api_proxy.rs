use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;

use crate::shared::upstream::{ProxyError, UpstreamClient};

/// ANY /api/*path
///
/// POST /api/generate, GET /api/learning-path/:id, GET /api/health и всё
/// остальное под /api уходит во внешний сервис генерации
pub async fn forward(
    State(upstream): State<UpstreamClient>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    upstream
        .forward(method, uri.path(), uri.query(), &headers, body)
        .await
}
