use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use super::error::MediaError;
use super::traits::{ImageHost, UploadedImage};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Cloudinary account credentials.
#[derive(Deserialize, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl CloudinaryConfig {
    /// Reject empty credentials instead of failing on the first upload.
    pub fn validate(&self) -> Result<(), MediaError> {
        let missing: Vec<&str> = [
            ("cloud_name", &self.cloud_name),
            ("api_key", &self.api_key),
            ("api_secret", &self.api_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MediaError::Config(format!(
                "missing Cloudinary credentials: {}",
                missing.join(", ")
            )))
        }
    }
}

impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    public_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Signed uploads to the Cloudinary upload API.
pub struct CloudinaryHost {
    client: reqwest::Client,
    config: CloudinaryConfig,
    api_base: String,
}

impl CloudinaryHost {
    pub fn new(config: CloudinaryConfig) -> Result<Self, MediaError> {
        config.validate()?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API root (e.g. a local stub).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.api_base, self.config.cloud_name)
    }
}

/// The string Cloudinary signs: parameters sorted by name, joined as `k=v&k=v`.
pub fn signature_payload(params: &[(&str, &str)]) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Hex SHA-1 of the signature payload with the API secret appended.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(signature_payload(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl ImageHost for CloudinaryHost {
    async fn upload(&self, data: Bytes, folder: &str) -> Result<UploadedImage, MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(
            &[("folder", folder), ("timestamp", &timestamp)],
            &self.config.api_secret,
        );

        let len = data.len() as u64;
        let form = Form::new()
            .part("file", Part::stream_with_length(data, len).file_name("upload"))
            .text("api_key", self.config.api_key.clone())
            .text("folder", folder.to_string())
            .text("timestamp", timestamp)
            .text("signature", signature);

        let res = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let message = match res.json::<ErrorEnvelope>().await {
                Ok(envelope) => envelope.error.message,
                Err(_) => status.to_string(),
            };
            tracing::warn!(status = status.as_u16(), %message, "Cloudinary rejected upload");
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponse = res
            .json()
            .await
            .map_err(|e| MediaError::MalformedResponse(e.to_string()))?;

        match (body.secure_url, body.public_id) {
            (Some(url), Some(public_id)) if !url.is_empty() && !public_id.is_empty() => {
                Ok(UploadedImage { url, public_id })
            }
            _ => Err(MediaError::MalformedResponse(
                "missing secure_url or public_id".into(),
            )),
        }
    }
}
