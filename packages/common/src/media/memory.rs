use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Mutex;

use super::error::MediaError;
use super::traits::{ImageHost, UploadedImage};

/// An upload recorded by [`MemoryImageHost`].
#[derive(Clone, Debug)]
pub struct StoredImage {
    pub public_id: String,
    pub folder: String,
    pub data: Bytes,
}

/// In-process image host for tests and local development.
///
/// Uploads are kept in memory and served from a fake base URL. A host built
/// with [`MemoryImageHost::failing`] rejects every upload.
pub struct MemoryImageHost {
    base_url: String,
    failure: Option<String>,
    stored: Mutex<Vec<StoredImage>>,
}

impl MemoryImageHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            failure: None,
            stored: Mutex::new(Vec::new()),
        }
    }

    /// A host whose uploads always fail with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new("https://images.invalid")
        }
    }

    /// Snapshot of every successful upload so far.
    pub async fn stored(&self) -> Vec<StoredImage> {
        self.stored.lock().await.clone()
    }
}

impl Default for MemoryImageHost {
    fn default() -> Self {
        Self::new("https://images.local")
    }
}

#[async_trait]
impl ImageHost for MemoryImageHost {
    async fn upload(&self, data: Bytes, folder: &str) -> Result<UploadedImage, MediaError> {
        if let Some(message) = &self.failure {
            return Err(MediaError::Rejected {
                status: 500,
                message: message.clone(),
            });
        }

        let public_id = format!("{}/{}", folder.trim_matches('/'), uuid::Uuid::now_v7());
        let url = format!("{}/{}", self.base_url, public_id);

        self.stored.lock().await.push(StoredImage {
            public_id: public_id.clone(),
            folder: folder.to_string(),
            data,
        });

        Ok(UploadedImage { url, public_id })
    }
}
