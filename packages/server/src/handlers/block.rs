use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::content::service::{BlockEdit, ContentService, UpdatedBlock};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::body::AppJson;
use crate::models::block::{BlockResponse, UpdateBlockRequest, UpdateBlockResponse};
use crate::state::AppState;

/// Apply a block edit and drop the cached renderings of its page.
///
/// Used by both the JSON endpoint and the editor form. Invalidation runs on
/// every successful write, even when nothing changed.
pub async fn apply_block_edit(
    state: &AppState,
    block_id: Uuid,
    edit: BlockEdit,
) -> Result<(UpdatedBlock, Vec<String>), AppError> {
    let updated = ContentService::new(&state.db)
        .update_block(block_id, edit)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Block '{block_id}' not found")))?;

    let invalidated = state.render_cache.invalidate_page(&updated.page_slug);
    tracing::info!(block_id = %block_id, page = %updated.page_slug, "Block updated");
    Ok((updated, invalidated))
}

#[utoipa::path(
    patch,
    path = "/blocks/{id}",
    tag = "Admin",
    operation_id = "updateBlock",
    summary = "Edit a block's text fields",
    description = "Replaces title, subtitle, body and bullets. Empty or absent fields are stored as absent. \
        `bullets` is line-delimited text; blank lines are dropped and an all-blank value clears the list. \
        Type, key and order are never changed.",
    params(("id" = Uuid, Path, description = "Block ID")),
    request_body = UpdateBlockRequest,
    responses(
        (status = 200, description = "Block updated", body = UpdateBlockResponse),
        (status = 400, description = "Malformed body (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "No valid session (UNAUTHORIZED)", body = ErrorBody),
        (status = 404, description = "Block not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("session" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = %auth_user.0.id, block_id))]
pub async fn update_block(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(block_id): Path<String>,
    AppJson(payload): AppJson<UpdateBlockRequest>,
) -> Result<Json<UpdateBlockResponse>, AppError> {
    let block_id = Uuid::parse_str(&block_id)
        .map_err(|_| AppError::NotFound(format!("Block '{block_id}' not found")))?;
    tracing::Span::current().record("block_id", tracing::field::display(block_id));

    let (updated, revalidated) = apply_block_edit(&state, block_id, payload.into()).await?;

    Ok(Json(UpdateBlockResponse {
        block: BlockResponse::from(updated.block),
        revalidated,
    }))
}
