use axum::{
    Router,
    routing::{get, post},
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

/// JSON API, documented in the OpenAPI document and mounted under `/api`.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .routes(routes!(handlers::contact::submit_contact))
        .nest("/pages", page_routes())
        .nest("/admin", admin_api_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::logout))
        .routes(routes!(handlers::auth::me))
}

fn page_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::page::get_page_content))
}

fn admin_api_routes() -> OpenApiRouter<AppState> {
    let upload = OpenApiRouter::new()
        .routes(routes!(handlers::upload::upload_image_handler))
        .layer(handlers::upload::upload_body_limit());

    OpenApiRouter::new()
        .routes(routes!(handlers::block::update_block))
        .merge(upload)
}

/// Server-rendered public site and admin panel.
pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::site::home))
        .nest("/admin", admin_page_routes())
}

fn admin_page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::admin::admin_root))
        .route(
            "/login",
            get(handlers::admin::login_page).post(handlers::admin::login_submit),
        )
        .route("/logout", post(handlers::admin::logout_submit))
        .route("/page-list", get(handlers::admin::page_list))
        .route("/help", get(handlers::admin::help_page))
        .route("/pages/{slug}", get(handlers::admin::page_editor))
        .route(
            "/pages/{slug}/blocks/{id}",
            post(handlers::admin::save_block),
        )
}
