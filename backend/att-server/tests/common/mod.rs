#![allow(dead_code)]

//! Test infrastructure for att-server API tests

use att_config::{AttendanceConfig, StreamConfig, UploadConfig};
use att_core::{
    AttendanceRecord, AttendanceStatus, Face, FaceLocation, RecognitionResult, RecognizedFace,
};
use att_face::{FaceClientError, FaceClientResult, FaceImage, FaceRecognizer};
use att_hub::{ShutdownCoordinator, SubscriberRegistry};
use att_server::AppState;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Request};
use chrono::{TimeZone, Utc};
use sqlx::SqlitePool;

pub const BOUNDARY: &str = "att-test-boundary-7MA4YWxkTrZu0gW";

/// What the stub answers to `recognize`
#[derive(Clone)]
pub enum Recognition {
    Result(RecognitionResult),
    /// Upstream answers with this status
    Fail(u16),
    /// Never answers within any sane timeout
    Hang,
}

/// In-process stand-in for the face recognition service
pub struct StubRecognizer {
    pub faces: Mutex<Vec<Face>>,
    pub recognition: Mutex<Recognition>,
    pub list_fails: bool,
    pub add_fails: bool,
    pub healthy: bool,
    pub added: Mutex<Vec<(String, Vec<FaceImage>)>>,
    pub recognize_calls: AtomicUsize,
}

impl Default for StubRecognizer {
    fn default() -> Self {
        Self {
            faces: Mutex::new(Vec::new()),
            recognition: Mutex::new(Recognition::Result(no_faces())),
            list_fails: false,
            add_fails: false,
            healthy: true,
            added: Mutex::new(Vec::new()),
            recognize_calls: AtomicUsize::new(0),
        }
    }
}

impl StubRecognizer {
    pub fn recognizing(recognition: Recognition) -> Self {
        Self {
            recognition: Mutex::new(recognition),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.recognize_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FaceRecognizer for StubRecognizer {
    async fn list_faces(&self) -> FaceClientResult<Vec<Face>> {
        if self.list_fails {
            return Err(FaceClientError::status(500, "list failed"));
        }
        Ok(self.faces.lock().unwrap().clone())
    }

    async fn recognize(&self, _image: FaceImage) -> FaceClientResult<RecognitionResult> {
        self.recognize_calls.fetch_add(1, Ordering::SeqCst);
        let recognition = self.recognition.lock().unwrap().clone();
        match recognition {
            Recognition::Result(result) => Ok(result),
            Recognition::Fail(status) => Err(FaceClientError::status(status, "upstream failed")),
            Recognition::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(no_faces())
            }
        }
    }

    async fn add_face(&self, name: &str, images: Vec<FaceImage>) -> FaceClientResult<()> {
        if self.add_fails {
            return Err(FaceClientError::status(400, "no face found in image"));
        }
        self.added.lock().unwrap().push((name.to_string(), images));
        Ok(())
    }

    async fn health(&self) -> bool {
        self.healthy
    }
}

pub fn no_faces() -> RecognitionResult {
    RecognitionResult {
        success: true,
        faces_detected: 0,
        faces: Vec::new(),
    }
}

pub fn recognized(name: &str, confidence: f64) -> RecognitionResult {
    RecognitionResult {
        success: true,
        faces_detected: 1,
        faces: vec![RecognizedFace {
            name: name.to_string(),
            confidence,
            location: FaceLocation::default(),
        }],
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    att_db::open_memory_pool()
        .await
        .expect("Failed to create test database")
}

/// Create AppState for testing around the given recognizer
pub async fn create_test_app_state_with(recognizer: Arc<StubRecognizer>) -> AppState {
    AppState {
        pool: create_test_pool().await,
        recognizer,
        registry: SubscriberRegistry::new(10),
        shutdown: ShutdownCoordinator::new(),
        attendance: AttendanceConfig::default(),
        upload: UploadConfig::default(),
        stream: StreamConfig::default(),
        recognize_timeout: Duration::from_millis(200),
        metrics: None,
    }
}

pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(Arc::new(StubRecognizer::default())).await
}

/// A record at a fixed offset (seconds) from a base instant
pub fn record_at(name: &str, status: AttendanceStatus, secs: i64) -> AttendanceRecord {
    let mut record = AttendanceRecord::new(name.to_string(), 0.9, status);
    record.timestamp = Utc.timestamp_opt(1_760_000_000 + secs, 0).unwrap();
    record
}

/// One part of a multipart/form-data body
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: image/jpeg\r\n\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
