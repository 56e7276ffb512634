//! Server-Sent Events stream of attendance records

use crate::{ApiResult, AppState, StreamStatsResponse};

use att_core::ATTENDANCE_EVENT;

use std::convert::Infallible;
use std::time::Duration;

use async_stream::stream;
use axum::{
    Json,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use log::{debug, info, warn};

/// GET /api/attendance/stream
///
/// Each new record arrives as `event: attendance` with the record as JSON
/// data. The subscription is released when the client disconnects (the
/// stream is dropped) or when the registry is closed at shutdown.
pub async fn attendance_stream(
    State(state): State<AppState>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let mut subscription = state.registry.subscribe().await?;
    let client_id = subscription.id().clone();
    info!("SSE client {} connected", client_id);

    let events = stream! {
        while let Some(event) = subscription.recv().await {
            match Event::default().event(ATTENDANCE_EVENT).json_data(&event.data) {
                Ok(sse_event) => yield Ok(sse_event),
                Err(e) => warn!("Failed to encode event for client {}: {}", client_id, e),
            }
        }
        debug!("SSE stream for client {} closed", client_id);
    };

    let keep_alive = KeepAlive::new().interval(Duration::from_secs(state.stream.keep_alive_secs));

    Ok(Sse::new(events).keep_alive(keep_alive))
}

/// GET /api/attendance/stream/stats
pub async fn stream_stats(State(state): State<AppState>) -> Json<StreamStatsResponse> {
    Json(StreamStatsResponse {
        success: true,
        stats: state.registry.stats().await,
    })
}
