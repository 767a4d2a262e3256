use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_size;

/// Logs every request to the console:
/// - local timestamp
/// - duration (ms)
/// - response size (from `Content-Length`)
/// - status code
/// - method and path
///
/// The same line goes to the tracing log without colors.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    let elapsed = start.elapsed().as_millis();

    // Cyan for 200, yellow for everything else
    let color_code = if status == StatusCode::OK { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed,
        format_size(size),
        status.as_u16(),
        method,
        path
    );

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms = elapsed as u64, "request failed");
    } else {
        tracing::debug!(%method, %path, status = status.as_u16(), elapsed_ms = elapsed as u64, "request served");
    }

    response
}
