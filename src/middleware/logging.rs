//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{Level, debug, info, warn};

/// Log one line per completed request.
///
/// Health probes are logged at debug level so they do not drown out traffic.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    let level = level_for(&method, &path, status);
    if level == Level::WARN {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    } else if level == Level::DEBUG {
        debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    response
}

fn level_for(method: &Method, path: &str, status: StatusCode) -> Level {
    if status.is_server_error() || (status.is_client_error() && status != StatusCode::NOT_FOUND) {
        Level::WARN
    } else if method == Method::GET && path.ends_with("/health") {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
