use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::info;

/// Log every request as `METHOD URI elapsed`
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} {} {:?}",
        method,
        uri,
        response.status().as_u16(),
        start.elapsed()
    );
    response
}
