use std::time::Duration;

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::body::AppJson;
use crate::models::contact::{ContactRequest, ContactResponse, validate_contact_request};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    operation_id = "submitContact",
    summary = "Submit a contact request",
    description = "Validates the lead and records it in the service log. No email or CRM delivery is wired up. \
        The response is sent after a fixed delay (`contact.response_delay_ms`).",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Lead received", body = ContactResponse),
        (status = 400, description = "Missing field or malformed email (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    validate_contact_request(&payload)?;

    tracing::info!(
        name = %payload.name,
        email = %payload.email,
        company = %payload.company.as_deref().filter(|c| !c.is_empty()).unwrap_or("N/A"),
        message = %payload.message,
        "New lead received"
    );

    let delay = state.config.contact.response_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    Ok(Json(ContactResponse {
        success: true,
        message: "Request received successfully".into(),
    }))
}
