use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use common::adapt::adapt_home;
use tera::Context;
use tracing::instrument;

use crate::content::cache::RenderCache;
use crate::content::service::ContentService;
use crate::error::AppError;
use crate::seed::HOME_SLUG;
use crate::state::AppState;
use crate::templates;

/// Render the home page, or `None` when the page has not been provisioned.
async fn render_home(state: &AppState) -> Result<Option<String>, AppError> {
    let Some(content) = ContentService::new(&state.db).load_page(HOME_SLUG).await? else {
        return Ok(None);
    };
    let view = adapt_home(&content.blocks)?;
    let context = Context::from_serialize(&view)?;
    Ok(Some(templates::render("home.html", &context)?))
}

/// Public home page, served from the render cache when possible.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Response {
    let path = RenderCache::public_path(HOME_SLUG);
    if let Some(html) = state.render_cache.get(&path) {
        return Html(html).into_response();
    }

    let generation = state.render_cache.generation();
    match render_home(&state).await {
        Ok(Some(html)) => {
            state.render_cache.insert(path, html.clone(), generation);
            Html(html).into_response()
        }
        Ok(None) => {
            tracing::warn!("Home page requested before provisioning");
            let mut context = Context::new();
            context.insert("slug", HOME_SLUG);
            templates::render_page("placeholder.html", &context)
        }
        Err(e) => {
            tracing::error!("Failed to render home page: {:?}", e);
            templates::render_server_error()
        }
    }
}
