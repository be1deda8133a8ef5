use axum::body::{Body, HttpBody};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Число с разделителями триад: 1234567 -> "1.234.567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// ANSI-цвет времени в строке лога: голубой для 2xx/3xx, жёлтый для 4xx, красный для 5xx
fn status_color(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "31"
    } else if status.is_client_error() {
        "33"
    } else {
        "36"
    }
}

/// Размер тела, если он известен заранее (файлы, ответы сервиса генерации)
fn body_size(body: &Body) -> String {
    match body.size_hint().exact() {
        Some(n) => group_thousands(n),
        None => "stream".into(),
    }
}

/// Строка лога запроса: время | длительность | размер | статус метод путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(status),
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        body_size(response.body()),
        status.as_u16(),
        method,
        path
    );
    if status.is_server_error() {
        tracing::warn!("{} {} -> {}", method, path, status);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(StatusCode::OK), "36");
        assert_eq!(status_color(StatusCode::NOT_FOUND), "33");
        assert_eq!(status_color(StatusCode::GATEWAY_TIMEOUT), "31");
    }

    #[test]
    fn test_body_size() {
        assert_eq!(body_size(&Body::from("hello")), "5");
        assert_eq!(body_size(&Body::empty()), "0");
    }
}
