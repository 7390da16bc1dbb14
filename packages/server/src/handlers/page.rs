use axum::{
    Json,
    extract::{Path, State},
};
use common::adapt::adapt_home;
use tracing::instrument;

use crate::content::service::ContentService;
use crate::error::{AppError, ErrorBody};
use crate::models::page::PageContentResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "Pages",
    operation_id = "getPageContent",
    summary = "Get a page's adapted section content",
    description = "Loads the page's blocks with their images and adapts them into the section view-models. \
        A page missing one of its required blocks (hero, intro, wheels, company) is a server error.",
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "Page content", body = PageContentResponse),
        (status = 404, description = "Page not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Required block missing (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_page_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageContentResponse>, AppError> {
    let content = ContentService::new(&state.db)
        .load_page(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page '{slug}' not found")))?;

    let sections = adapt_home(&content.blocks)?;

    Ok(Json(PageContentResponse {
        slug: content.page.slug,
        title: content.page.title,
        updated_at: content.page.updated_at,
        sections,
    }))
}
