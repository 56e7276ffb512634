use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FACE_API_TIMEOUT, DEFAULT_FACE_API_URL,
    MAX_FACE_API_TIMEOUT_SECS, MIN_FACE_API_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Location of the external face recognition service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaceApiConfig {
    pub url: String,
    /// Request timeout in humantime notation ("30s", "1m")
    pub timeout: String,
}

impl Default for FaceApiConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_FACE_API_URL),
            timeout: String::from(DEFAULT_FACE_API_TIMEOUT),
        }
    }
}

impl FaceApiConfig {
    pub fn timeout(&self) -> ConfigErrorResult<Duration> {
        humantime::parse_duration(self.timeout.trim()).map_err(|e| {
            ConfigError::face_api(format!(
                "face_api.timeout '{}' is not a valid duration: {}",
                self.timeout, e
            ))
        })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::face_api(format!(
                "face_api.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        let timeout = self.timeout()?;
        let min = Duration::from_secs(MIN_FACE_API_TIMEOUT_SECS);
        let max = Duration::from_secs(MAX_FACE_API_TIMEOUT_SECS);
        if timeout < min || timeout > max {
            return Err(ConfigError::face_api(format!(
                "face_api.timeout must be {}s-{}s, got {}",
                MIN_FACE_API_TIMEOUT_SECS, MAX_FACE_API_TIMEOUT_SECS, self.timeout
            )));
        }

        Ok(())
    }
}
