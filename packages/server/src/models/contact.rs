use serde::{Deserialize, Serialize};

use crate::auth::credentials::is_email_shaped;
use crate::error::AppError;

/// Lead submitted through the public contact form.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    #[schema(example = "Jane Smith")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Acme Forging")]
    pub company: Option<String>,
    #[serde(default)]
    #[schema(example = "We need 2,000 forged wheel blanks per month.")]
    pub message: String,
}

pub fn validate_contact_request(payload: &ContactRequest) -> Result<(), AppError> {
    if payload.name.is_empty() || payload.email.is_empty() || payload.message.is_empty() {
        return Err(AppError::Validation("Missing required fields".into()));
    }
    if !is_email_shaped(&payload.email) {
        return Err(AppError::Validation("Invalid email format".into()));
    }
    Ok(())
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ContactResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Request received successfully")]
    pub message: String,
}
