//! Live view of the attendance stream

use crate::{CliClientResult, ClientError};

use att_core::{ATTENDANCE_EVENT, AttendanceRecord};

use eventsource_client::{self as es, Client as _};
use futures::StreamExt;

/// Render one stream event for the terminal, or `None` for events that are
/// not attendance records.
pub fn format_event(event_type: &str, data: &str, pretty: bool) -> Option<String> {
    if event_type != ATTENDANCE_EVENT {
        return None;
    }

    let record: AttendanceRecord = serde_json::from_str(data).ok()?;
    let output = if pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    };
    output.ok()
}

/// Print attendance records as they are recorded until the stream ends or
/// Ctrl+C is pressed.
pub async fn watch(url: &str, pretty: bool) -> CliClientResult<()> {
    let client = es::ClientBuilder::for_url(url)
        .map_err(|e| ClientError::stream(format!("invalid stream URL {}: {}", url, e)))?
        .build();
    let mut stream = client.stream();

    eprintln!("Watching {} (Ctrl+C to stop)", url);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => return Ok(()),
            next = stream.next() => match next {
                Some(Ok(es::SSE::Event(event))) => {
                    match format_event(&event.event_type, &event.data, pretty) {
                        Some(line) => println!("{}", line),
                        None => eprintln!("Ignoring '{}' event", event.event_type),
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(ClientError::stream(e.to_string())),
                None => return Ok(()),
            },
        }
    }
}
