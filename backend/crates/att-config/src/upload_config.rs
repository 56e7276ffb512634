use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_MEMORY, DEFAULT_MAX_UPLOAD_SIZE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest accepted single image, in bytes
    pub max_upload_size: usize,
    /// Largest accepted multipart request body, in bytes
    pub max_memory: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            max_memory: DEFAULT_MAX_MEMORY,
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_upload_size == 0 || self.max_memory == 0 {
            return Err(ConfigError::upload(
                "upload.max_upload_size and upload.max_memory must be greater than 0",
            ));
        }

        if self.max_upload_size > self.max_memory {
            return Err(ConfigError::upload(format!(
                "upload.max_upload_size ({}) cannot exceed upload.max_memory ({})",
                self.max_upload_size, self.max_memory
            )));
        }

        Ok(())
    }

    /// Human readable upload limit, e.g. "5MB"
    pub fn max_upload_size_label(&self) -> String {
        let mb = self.max_upload_size / (1024 * 1024);
        if mb > 0 && self.max_upload_size % (1024 * 1024) == 0 {
            format!("{}MB", mb)
        } else {
            format!("{} bytes", self.max_upload_size)
        }
    }
}
