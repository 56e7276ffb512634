use crate::{AttendanceService, ServerResult};

use att_config::{AttendanceConfig, Config, StreamConfig, UploadConfig};
use att_face::FaceRecognizer;
use att_hub::{ShutdownCoordinator, SubscriberRegistry};

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub recognizer: Arc<dyn FaceRecognizer>,
    pub registry: SubscriberRegistry,
    pub shutdown: ShutdownCoordinator,
    pub attendance: AttendanceConfig,
    pub upload: UploadConfig,
    pub stream: StreamConfig,
    /// Upper bound on a single recognition call
    pub recognize_timeout: Duration,
    /// Renders `/metrics`; absent when no exporter is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn from_config(
        config: &Config,
        pool: SqlitePool,
        recognizer: Arc<dyn FaceRecognizer>,
        shutdown: ShutdownCoordinator,
    ) -> ServerResult<Self> {
        Ok(Self {
            pool,
            recognizer,
            registry: SubscriberRegistry::from_config(&config.stream),
            shutdown,
            attendance: config.attendance.clone(),
            upload: config.upload.clone(),
            stream: config.stream.clone(),
            recognize_timeout: config.face_api.timeout()?,
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn attendance_service(&self) -> AttendanceService {
        AttendanceService::new(
            self.pool.clone(),
            Arc::clone(&self.recognizer),
            self.registry.clone(),
            self.recognize_timeout,
        )
    }
}
