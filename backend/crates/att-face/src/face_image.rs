use bytes::Bytes;

/// An uploaded image on its way to the face service
#[derive(Debug, Clone)]
pub struct FaceImage {
    pub data: Bytes,
    pub filename: String,
}

impl FaceImage {
    pub fn new(data: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            filename: filename.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
