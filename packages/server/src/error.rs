use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{AdaptError, media::MediaError};
use sea_orm::DbErr;
use serde::Serialize;

/// Structured error response returned by all JSON endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `INVALID_CREDENTIALS`, `UNAUTHORIZED`, `NOT_FOUND`, `MISSING_FILE`,
    /// `INVALID_FILE_TYPE`, `FILE_TOO_LARGE`, `UPLOAD_FAILED`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Invalid email")]
    pub message: String,
    /// Accepted content types, present on `INVALID_FILE_TYPE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = json!(["image/jpeg", "image/png"]))]
    pub allowed_types: Option<Vec<&'static str>>,
    /// Size limit in bytes, present on `FILE_TOO_LARGE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 5242880)]
    pub max_size: Option<usize>,
}

impl ErrorBody {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            allowed_types: None,
            max_size: None,
        }
    }
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    InvalidCredentials,
    Unauthorized,
    NotFound(String),
    MissingFile,
    InvalidFileType {
        allowed: &'static [&'static str],
    },
    FileTooLarge {
        max_size: usize,
    },
    /// The image host refused or failed the upload. Carries the host's message.
    UploadFailed(String),
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MissingFile => "MISSING_FILE",
            AppError::InvalidFileType { .. } => "INVALID_FILE_TYPE",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::UploadFailed(_) => "UPLOAD_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message suitable for showing to an operator (e.g. in an editor banner).
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid email or password".into(),
            AppError::Unauthorized => "Unauthorized".into(),
            AppError::MissingFile => "No file provided".into(),
            AppError::InvalidFileType { .. } => "Invalid file type".into(),
            AppError::FileTooLarge { .. } => "File too large".into(),
            AppError::UploadFailed(msg) => format!("Upload failed: {msg}"),
            AppError::Internal(_) => "An unexpected error occurred".into(),
        }
    }

    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        let code = self.code();
        let message = self.public_message();
        match self {
            AppError::Validation(_) | AppError::MissingFile => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(code, message))
            }
            AppError::InvalidCredentials | AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, ErrorBody::new(code, message))
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorBody::new(code, message)),
            AppError::InvalidFileType { allowed } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    allowed_types: Some(allowed.to_vec()),
                    ..ErrorBody::new(code, message)
                },
            ),
            AppError::FileTooLarge { max_size } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    max_size: Some(max_size),
                    ..ErrorBody::new(code, message)
                },
            ),
            AppError::UploadFailed(detail) => {
                tracing::warn!("Image upload failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(code, message))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(code, message))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Rejected { message, .. } => AppError::UploadFailed(message),
            other => AppError::UploadFailed(other.to_string()),
        }
    }
}

impl From<AdaptError> for AppError {
    fn from(err: AdaptError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Internal(format!("Template error: {err:?}"))
    }
}
