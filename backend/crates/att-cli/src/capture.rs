//! Door device simulator
//!
//! Posts frames to the gateway the way a camera at the door does and prints
//! the access decision for each one.

use crate::{CliClientResult, Client, ImageFile};

use att_core::{AttendanceResponse, DoorAction};

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Frames to send, cycled in order
    pub images: Vec<PathBuf>,
    /// Pause between captures
    pub interval: Duration,
    /// Number of captures; 0 keeps going until Ctrl+C
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureSummary {
    pub granted: u64,
    pub denied: u64,
    /// Requests that never produced a decision
    pub failed: u64,
}

impl CaptureSummary {
    pub fn total(&self) -> u64 {
        self.granted + self.denied + self.failed
    }
}

/// One line describing the decision a door would act on
pub fn describe(response: &AttendanceResponse) -> String {
    match (response.action, response.name.as_deref()) {
        (DoorAction::OpenDoor, Some(name)) => format!(
            "ACCESS GRANTED: {} (confidence {:.2}) - {}",
            name,
            response.confidence.unwrap_or_default(),
            response.message
        ),
        (_, Some(name)) => format!("ACCESS DENIED: {} - {}", name, response.message),
        (_, None) => format!("ACCESS DENIED: {}", response.message),
    }
}

/// Run the simulator. All images are read before the first request so a
/// bad path fails fast.
pub async fn run_capture(
    client: &Client,
    options: &CaptureOptions,
) -> CliClientResult<CaptureSummary> {
    let images = ImageFile::load_all(&options.images)?;
    let mut summary = CaptureSummary::default();

    if images.is_empty() {
        return Ok(summary);
    }

    let mut sent: u64 = 0;
    loop {
        let image = &images[(sent % images.len() as u64) as usize];

        match client.record_attendance(image).await {
            Ok(response) => {
                println!("[{}] {}", image.filename, describe(&response));
                if response.action == DoorAction::OpenDoor {
                    summary.granted += 1;
                } else {
                    summary.denied += 1;
                }
            }
            Err(e) => {
                eprintln!("[{}] Request failed: {}", image.filename, e);
                summary.failed += 1;
            }
        }

        sent += 1;
        if options.count > 0 && sent >= options.count {
            break;
        }

        if !options.interval.is_zero() {
            tokio::select! {
                _ = tokio::time::sleep(options.interval) => {}
                _ = tokio::signal::ctrl_c() => {
                    eprintln!("Interrupted after {} capture(s)", sent);
                    break;
                }
            }
        }
    }

    Ok(summary)
}
