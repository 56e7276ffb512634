use crate::{CliClientResult, ClientError, ImageFile};

use att_core::AttendanceResponse;

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{
    Client as ReqwestClient, Method,
    multipart::{Form, Part},
};
use serde_json::Value;

/// HTTP client for the attendance gateway REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("Server returned {}", status));
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    /// URL of the Server-Sent Events stream
    pub fn stream_url(&self) -> String {
        format!("{}/api/attendance/stream", self.base_url)
    }

    // =========================================================================
    // Faces
    // =========================================================================

    pub async fn list_faces(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/faces");
        self.execute(req).await
    }

    /// Enroll a person with one or more images
    pub async fn enroll(&self, name: &str, images: Vec<ImageFile>) -> CliClientResult<Value> {
        let mut form = Form::new().text("name", name.to_string());
        for image in images {
            form = form.part("images", Part::bytes(image.data).file_name(image.filename));
        }

        let req = self.request(Method::POST, "/api/faces/upload").multipart(form);
        self.execute(req).await
    }

    // =========================================================================
    // Attendance
    // =========================================================================

    /// Submit one captured frame, as a door device would
    pub async fn record_attendance(
        &self,
        image: &ImageFile,
    ) -> CliClientResult<AttendanceResponse> {
        let form = Form::new().part(
            "image",
            Part::bytes(image.data.clone()).file_name(image.filename.clone()),
        );

        let req = self.request(Method::POST, "/api/attendance").multipart(form);
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn recent(&self, limit: Option<i64>) -> CliClientResult<Value> {
        let path = with_limit("/api/attendance/recent".to_string(), limit);
        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    pub async fn person(&self, name: &str, limit: Option<i64>) -> CliClientResult<Value> {
        let path = with_limit(format!("/api/attendance/person/{}", name), limit);
        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    pub async fn stats(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/attendance/stats");
        self.execute(req).await
    }

    pub async fn stream_stats(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/attendance/stream/stats");
        self.execute(req).await
    }
}

fn with_limit(path: String, limit: Option<i64>) -> String {
    match limit {
        Some(limit) => format!("{}?limit={}", path, limit),
        None => path,
    }
}
