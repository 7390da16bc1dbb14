use bytes::Bytes;
use chrono::Utc;
use common::media::ImageHost;
use mime_guess::Mime;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use tracing::instrument;
use uuid::Uuid;

use crate::entity::{block, image};
use crate::error::AppError;

pub const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// 5 MiB.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// A validated-shape upload waiting to be checked and forwarded.
#[derive(Debug)]
pub struct ImageUpload {
    pub data: Bytes,
    pub content_type: Option<String>,
    pub block_id: Option<Uuid>,
    pub alt: Option<String>,
}

/// Content type of a multipart file part: the essence of the declared one
/// (parameters dropped), or a guess from the file name when the client
/// declared none.
pub fn resolve_content_type(declared: Option<&str>, file_name: Option<&str>) -> Option<String> {
    match declared.map(str::trim).filter(|t| !t.is_empty()) {
        Some(declared) => Some(match declared.parse::<Mime>() {
            Ok(mime) => mime.essence_str().to_string(),
            Err(_) => declared.to_ascii_lowercase(),
        }),
        None => file_name
            .and_then(|name| mime_guess::from_path(name).first())
            .map(|mime| mime.essence_str().to_string()),
    }
}

/// Type check first, then size.
pub fn check_file(content_type: Option<&str>, size: usize) -> Result<(), AppError> {
    let allowed = content_type.is_some_and(|t| ALLOWED_TYPES.contains(&t));
    if !allowed {
        return Err(AppError::InvalidFileType {
            allowed: ALLOWED_TYPES,
        });
    }
    if size > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge {
            max_size: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

/// Validate an upload, forward it to the image host and record the result.
///
/// The host's answer is trusted as-is and never retried here.
#[instrument(skip(db, host, upload), fields(size = upload.data.len(), block_id = ?upload.block_id))]
pub async fn upload_image<C: ConnectionTrait>(
    db: &C,
    host: &dyn ImageHost,
    folder: &str,
    upload: ImageUpload,
) -> Result<image::Model, AppError> {
    check_file(upload.content_type.as_deref(), upload.data.len())?;

    if let Some(block_id) = upload.block_id {
        if block::Entity::find_by_id(block_id).one(db).await?.is_none() {
            return Err(AppError::NotFound(format!("Block '{block_id}' not found")));
        }
    }

    let hosted = host.upload(upload.data, folder).await?;

    let now = Utc::now();
    let model = image::ActiveModel {
        id: Set(Uuid::now_v7()),
        url: Set(hosted.url),
        public_id: Set(hosted.public_id),
        alt: Set(upload.alt.filter(|a| !a.trim().is_empty())),
        block_id: Set(upload.block_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let saved = model.insert(db).await?;

    tracing::info!(image_id = %saved.id, public_id = %saved.public_id, "Image uploaded");
    Ok(saved)
}
