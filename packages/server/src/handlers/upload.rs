use axum::extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError};
use axum::http::StatusCode;
use axum::{Json, response::IntoResponse};
use bytes::Bytes;
use tracing::instrument;
use uuid::Uuid;

use crate::content::service::ContentService;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::image::{ImageResponse, UploadImageResponse};
use crate::state::AppState;
use crate::upload::{ImageUpload, MAX_FILE_SIZE, resolve_content_type, upload_image};

/// Multipart bodies may exceed the file ceiling so that oversized files are
/// answered with `FILE_TOO_LARGE` rather than a bare 413.
pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(16 * 1024 * 1024) // 16 MB
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge {
            max_size: MAX_FILE_SIZE,
        }
    } else {
        AppError::Validation(err.body_text())
    }
}

/// Drop the cached renderings of the page showing a block's images.
///
/// The image row is already stored, so a failed lookup is only logged.
async fn invalidate_block_page(state: &AppState, block_id: Uuid) {
    match ContentService::new(&state.db).block_page_slug(block_id).await {
        Ok(Some(slug)) => {
            state.render_cache.invalidate_page(&slug);
        }
        Ok(None) => tracing::warn!(block_id = %block_id, "Uploaded image's block has no page"),
        Err(e) => tracing::error!(block_id = %block_id, "Failed to resolve page of uploaded image: {}", e),
    }
}

#[utoipa::path(
    post,
    path = "/upload-image",
    tag = "Admin",
    operation_id = "uploadImage",
    summary = "Upload an image to the image host",
    description = "Multipart form with `file` (required), `blockId` (optional UUID of the owning block) and \
        `alt` (optional). Accepts JPEG, PNG and WebP up to 5 MiB. The file is forwarded to the image host \
        and the returned reference is stored.",
    request_body(content_type = "multipart/form-data", description = "Image file with optional block and alt text"),
    responses(
        (status = 201, description = "Image stored", body = UploadImageResponse),
        (status = 400, description = "MISSING_FILE, INVALID_FILE_TYPE (with allowedTypes), FILE_TOO_LARGE (with maxSize) or VALIDATION_ERROR", body = ErrorBody),
        (status = 401, description = "No valid session (UNAUTHORIZED)", body = ErrorBody),
        (status = 404, description = "Referenced block not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Image host failure (UPLOAD_FAILED)", body = ErrorBody),
    ),
    security(("session" = [])),
)]
#[instrument(skip(state, auth_user, multipart), fields(user_id = %auth_user.0.id))]
pub async fn upload_image_handler(
    auth_user: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file: Option<(Bytes, Option<String>)> = None;
    let mut block_id: Option<Uuid> = None;
    let mut alt: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("file") => {
                let declared = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some((
                    data,
                    resolve_content_type(declared.as_deref(), file_name.as_deref()),
                ));
            }
            Some("blockId") => {
                let raw = field.text().await.map_err(multipart_error)?;
                let raw = raw.trim();
                if !raw.is_empty() {
                    block_id = Some(
                        Uuid::parse_str(raw)
                            .map_err(|_| AppError::Validation("blockId must be a UUID".into()))?,
                    );
                }
            }
            Some("alt") => {
                alt = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (data, content_type) = file.ok_or(AppError::MissingFile)?;

    let saved = upload_image(
        &state.db,
        state.images.as_ref(),
        &state.config.upload.folder,
        ImageUpload {
            data,
            content_type,
            block_id,
            alt,
        },
    )
    .await?;

    if let Some(block_id) = saved.block_id {
        invalidate_block_page(&state, block_id).await;
    }

    Ok((
        StatusCode::CREATED,
        Json(UploadImageResponse {
            success: true,
            image: ImageResponse::from(saved),
        }),
    ))
}
