//! Attendance recording: recognize, decide, persist, broadcast.

use att_core::{AttendanceEvent, AttendanceResponse, Decision, decide};
use att_db::AttendanceRepository;
use att_face::{FaceImage, FaceRecognizer};
use att_hub::SubscriberRegistry;

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use metrics::counter;
use sqlx::SqlitePool;
use tokio::time::timeout;

#[derive(Clone)]
pub struct AttendanceService {
    pool: SqlitePool,
    recognizer: Arc<dyn FaceRecognizer>,
    registry: SubscriberRegistry,
    recognize_timeout: Duration,
}

impl AttendanceService {
    pub fn new(
        pool: SqlitePool,
        recognizer: Arc<dyn FaceRecognizer>,
        registry: SubscriberRegistry,
        recognize_timeout: Duration,
    ) -> Self {
        Self {
            pool,
            recognizer,
            registry,
            recognize_timeout,
        }
    }

    /// Record one capture.
    ///
    /// Never fails: recognition problems become a `recognition_failed`
    /// response, and a failed insert is logged while the event is still
    /// broadcast.
    pub async fn record(&self, image: FaceImage) -> AttendanceResponse {
        let filename = image.filename.clone();

        let result = match timeout(self.recognize_timeout, self.recognizer.recognize(image)).await
        {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                error!("Face recognition failed for {}: {}", filename, e);
                counter!("att_server.recognition.failed", "reason" => "upstream").increment(1);
                return AttendanceResponse::recognition_failed();
            }
            Err(_) => {
                error!(
                    "Face recognition for {} timed out after {}",
                    filename,
                    humantime::format_duration(self.recognize_timeout)
                );
                counter!("att_server.recognition.failed", "reason" => "timeout").increment(1);
                return AttendanceResponse::recognition_failed();
            }
        };

        match decide(&result) {
            Decision::NoFace => {
                info!("No face detected in {}", filename);
                counter!("att_server.recognition.no_face").increment(1);
                AttendanceResponse::no_face()
            }
            Decision::Recognized { record, response } => {
                counter!("att_server.attendance.recorded", "status" => record.status.as_str())
                    .increment(1);

                match AttendanceRepository::create(&self.pool, &record).await {
                    Ok(()) => info!(
                        "Saved attendance record: id={}, name={}, status={}",
                        record.id, record.name, record.status
                    ),
                    Err(e) => error!("Failed to save attendance record {}: {}", record.id, e),
                }

                self.registry
                    .broadcast(&AttendanceEvent::attendance(record))
                    .await;

                response
            }
        }
    }
}
