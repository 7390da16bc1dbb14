use async_trait::async_trait;
use bytes::Bytes;

use super::error::MediaError;

/// Durable reference returned by the image host for one upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    /// Public HTTPS URL of the stored image.
    pub url: String,
    /// Host-assigned identifier, including the folder prefix.
    pub public_id: String,
}

/// External image hosting service.
///
/// Implementations forward the payload as-is; validation of content type and
/// size happens before this call. No retry is attempted at this layer.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload an image into `folder` and return where it can be fetched.
    async fn upload(&self, data: Bytes, folder: &str) -> Result<UploadedImage, MediaError>;
}
