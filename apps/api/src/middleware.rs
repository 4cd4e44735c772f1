//! Per-request logging with a correlation id.
//!
//! Every request gets a UUID v4 and a tracing span carrying it, so all
//! log lines emitted while serving the request can be correlated.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Logs request start and completion inside a `request_id` span.
///
/// Apply as the outermost layer so the span covers the whole middleware
/// stack, not just the handler.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!("request", %request_id);
    let start = Instant::now();

    async move {
        tracing::info!(%method, %path, "Request received");

        let response = next.run(request).await;

        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
