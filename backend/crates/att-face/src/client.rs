use crate::{FaceClientError, FaceClientResult, FaceImage, FaceRecognizer};

use att_core::{Face, RecognitionResult};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct FaceListResponse {
    #[serde(default)]
    people: Vec<Face>,
}

/// HTTP client for the face recognition service
#[derive(Debug, Clone)]
pub struct FaceRecognitionClient {
    base_url: String,
    client: ReqwestClient,
}

impl FaceRecognitionClient {
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://localhost:5001")
    /// * `timeout` - Applied to every request
    pub fn new(base_url: &str, timeout: Duration) -> FaceClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn image_part(image: FaceImage) -> Part {
        Part::bytes(image.data.to_vec()).file_name(image.filename)
    }

    /// Fail unless the response carries `expected`, keeping the body for context
    async fn expect_status(response: Response, expected: StatusCode) -> FaceClientResult<Response> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(FaceClientError::status(status.as_u16(), body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> FaceClientResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FaceRecognizer for FaceRecognitionClient {
    async fn list_faces(&self) -> FaceClientResult<Vec<Face>> {
        let url = self.url("/faces");
        debug!("Listing faces from {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::expect_status(response, StatusCode::OK).await?;
        let list: FaceListResponse = Self::decode(response).await?;

        Ok(list.people)
    }

    async fn recognize(&self, image: FaceImage) -> FaceClientResult<RecognitionResult> {
        debug!(
            "Recognizing {} ({} bytes)",
            image.filename,
            image.data.len()
        );

        let form = Form::new().part("image", Self::image_part(image));
        let response = self
            .client
            .post(self.url("/recognize"))
            .multipart(form)
            .send()
            .await?;
        let response = Self::expect_status(response, StatusCode::OK).await?;

        Self::decode(response).await
    }

    async fn add_face(&self, name: &str, images: Vec<FaceImage>) -> FaceClientResult<()> {
        debug!("Enrolling {} with {} image(s)", name, images.len());

        let form = images.into_iter().fold(
            Form::new().text("name", name.to_string()),
            |form, image| form.part("images", Self::image_part(image)),
        );
        let response = self
            .client
            .post(self.url("/faces/add"))
            .multipart(form)
            .send()
            .await?;
        Self::expect_status(response, StatusCode::CREATED).await?;

        Ok(())
    }

    async fn health(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Face service health check failed: {}", e);
                false
            }
        }
    }
}
