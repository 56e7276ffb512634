use crate::{CliClientResult, ClientError};

use std::path::Path;

/// An image read from disk, ready to upload
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn load(path: &Path) -> CliClientResult<Self> {
        let data = std::fs::read(path).map_err(|source| ClientError::Image {
            path: path.to_path_buf(),
            source,
        })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("capture.jpg"));

        Ok(Self { filename, data })
    }

    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> CliClientResult<Vec<Self>> {
        paths.iter().map(|path| Self::load(path.as_ref())).collect()
    }
}
