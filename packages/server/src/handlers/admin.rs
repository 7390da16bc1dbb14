use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use common::{ContentBlock, bullets};
use serde::{Deserialize, Serialize};
use tera::Context;
use tracing::instrument;
use uuid::Uuid;

use crate::auth::access::LOGIN_PATH;
use crate::auth::session::{self, Identity};
use crate::content::service::{BlockEdit, ContentService, PageContent};
use crate::error::AppError;
use crate::extractors::auth::AdminSession;
use crate::extractors::body::AppForm;
use crate::handlers::auth::open_session;
use crate::handlers::block::apply_block_edit;
use crate::state::AppState;
use crate::templates;
use crate::utils::cookie;

pub const PAGE_LIST_PATH: &str = "/admin/page-list";

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Submitted block edit form. Browsers send every field, possibly empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockForm {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub bullets: Option<String>,
}

impl From<BlockForm> for BlockEdit {
    fn from(form: BlockForm) -> Self {
        Self {
            title: form.title,
            subtitle: form.subtitle,
            body: form.body,
            bullets: form.bullets,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EditorQuery {
    /// Block whose save succeeded on the previous request.
    pub saved: Option<Uuid>,
}

#[derive(Serialize)]
struct PageRow {
    title: String,
    slug: String,
    updated_at: String,
}

#[derive(Serialize)]
struct EditorImage {
    url: String,
    alt: String,
}

#[derive(Serialize, Default)]
struct EditorForm {
    title: String,
    subtitle: String,
    body: String,
    bullets: String,
}

#[derive(Serialize)]
struct EditorBlock {
    id: Uuid,
    block_type: &'static str,
    key: String,
    role: &'static str,
    title: Option<String>,
    subtitle: Option<String>,
    body: Option<String>,
    bullets: Vec<String>,
    images: Vec<EditorImage>,
    form: EditorForm,
    saved: bool,
    editing: bool,
    error: Option<String>,
}

impl EditorBlock {
    fn new(block: ContentBlock, saved: Option<Uuid>) -> Self {
        let bullet_list = block.bullets.unwrap_or_default();
        Self {
            id: block.id,
            block_type: block.block_type.as_str(),
            key: block.key,
            role: if block.role.is_header() { "header" } else { "item" },
            form: EditorForm {
                title: block.title.clone().unwrap_or_default(),
                subtitle: block.subtitle.clone().unwrap_or_default(),
                body: block.body.clone().unwrap_or_default(),
                bullets: bullets::to_text(&bullet_list),
            },
            title: block.title,
            subtitle: block.subtitle,
            body: block.body,
            bullets: bullet_list,
            images: block
                .images
                .into_iter()
                .map(|img| EditorImage {
                    url: img.url,
                    alt: img.alt.unwrap_or_default(),
                })
                .collect(),
            saved: saved == Some(block.id),
            editing: false,
            error: None,
        }
    }
}

/// A failed save to show on the editor, with the values the operator submitted.
struct FailedEdit {
    block_id: Uuid,
    message: String,
    submitted: BlockForm,
}

fn base_context(identity: Option<&Identity>) -> Context {
    let mut context = Context::new();
    if let Some(identity) = identity {
        context.insert("current_user", identity);
    }
    context
}

fn render_editor(
    identity: &Identity,
    content: PageContent,
    saved: Option<Uuid>,
    failed: Option<FailedEdit>,
    status: StatusCode,
) -> Response {
    let mut blocks: Vec<EditorBlock> = content
        .blocks
        .into_iter()
        .map(|b| EditorBlock::new(b, saved))
        .collect();

    if let Some(failed) = failed {
        if let Some(block) = blocks.iter_mut().find(|b| b.id == failed.block_id) {
            block.editing = true;
            block.error = Some(failed.message);
            block.form = EditorForm {
                title: failed.submitted.title.unwrap_or_default(),
                subtitle: failed.submitted.subtitle.unwrap_or_default(),
                body: failed.submitted.body.unwrap_or_default(),
                bullets: failed.submitted.bullets.unwrap_or_default(),
            };
        }
    }

    let mut context = base_context(Some(identity));
    context.insert("page", &content.page);
    context.insert("blocks", &blocks);
    templates::render_with_status(status, "page_editor.html", &context)
}

#[instrument(skip(_session))]
pub async fn admin_root(_session: AdminSession) -> Redirect {
    Redirect::to(PAGE_LIST_PATH)
}

#[instrument(skip(state, headers))]
pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    // Already signed in: nothing to do here.
    if session::resolve(&headers, &state.keys).is_some() {
        return Redirect::to(PAGE_LIST_PATH).into_response();
    }
    templates::render_page("login.html", &base_context(None))
}

#[instrument(skip(state, jar, form), fields(email = %form.email))]
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    AppForm(form): AppForm<LoginForm>,
) -> Response {
    match open_session(&state, &form.email, &form.password).await {
        Ok((identity, token)) => {
            tracing::info!(user_id = %identity.id, "Operator logged in");
            let jar = jar.add(cookie::session(token, state.config.secure_cookies()));
            (jar, Redirect::to(PAGE_LIST_PATH)).into_response()
        }
        Err(err) => {
            let status = match err {
                AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                ref other => {
                    tracing::error!("Login failed: {:?}", other);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            let mut context = base_context(None);
            context.insert("error", "Invalid email or password");
            context.insert("email", &form.email);
            templates::render_with_status(status, "login.html", &context)
        }
    }
}

#[instrument(skip(state, jar))]
pub async fn logout_submit(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(cookie::cleared(state.config.secure_cookies()));
    (jar, Redirect::to(LOGIN_PATH))
}

#[instrument(skip(state, session), fields(user_id = %session.0.id))]
pub async fn page_list(State(state): State<AppState>, session: AdminSession) -> Response {
    let pages = match ContentService::new(&state.db).list_pages().await {
        Ok(pages) => pages,
        Err(e) => {
            tracing::error!("Failed to list pages: {}", e);
            return templates::render_server_error();
        }
    };

    let rows: Vec<PageRow> = pages
        .into_iter()
        .map(|p| PageRow {
            title: p.title,
            slug: p.slug,
            updated_at: p.updated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        })
        .collect();

    let mut context = base_context(Some(&session.0));
    context.insert("pages", &rows);
    templates::render_page("page_list.html", &context)
}

#[instrument(skip(session))]
pub async fn help_page(session: AdminSession) -> Response {
    templates::render_page("help.html", &base_context(Some(&session.0)))
}

#[instrument(skip(state, session, query), fields(user_id = %session.0.id))]
pub async fn page_editor(
    State(state): State<AppState>,
    session: AdminSession,
    Path(slug): Path<String>,
    Query(query): Query<EditorQuery>,
) -> Response {
    match ContentService::new(&state.db).load_page(&slug).await {
        Ok(Some(content)) => render_editor(&session.0, content, query.saved, None, StatusCode::OK),
        Ok(None) => templates::render_not_found(&format!("Page '{slug}' not found"), PAGE_LIST_PATH),
        Err(e) => {
            tracing::error!("Failed to load page {}: {}", slug, e);
            templates::render_server_error()
        }
    }
}

#[instrument(skip(state, session, form), fields(user_id = %session.0.id))]
pub async fn save_block(
    State(state): State<AppState>,
    session: AdminSession,
    Path((slug, block_id)): Path<(String, String)>,
    AppForm(form): AppForm<BlockForm>,
) -> Response {
    let Ok(block_id) = Uuid::parse_str(&block_id) else {
        return templates::render_not_found(&format!("Block '{block_id}' not found"), PAGE_LIST_PATH);
    };

    let err = match apply_block_edit(&state, block_id, form.clone().into()).await {
        Ok((updated, _)) => {
            let target = format!(
                "/admin/pages/{}?saved={}#block-{}",
                updated.page_slug, block_id, block_id
            );
            return Redirect::to(&target).into_response();
        }
        Err(err) => err,
    };

    if let AppError::NotFound(message) = &err {
        return templates::render_not_found(message, PAGE_LIST_PATH);
    }
    tracing::error!(block_id = %block_id, "Failed to save block: {:?}", err);

    // Keep the operator's input and show the editor in edit mode.
    match ContentService::new(&state.db).load_page(&slug).await {
        Ok(Some(content)) => render_editor(
            &session.0,
            content,
            None,
            Some(FailedEdit {
                block_id,
                message: "Could not update the block. Please try again.".into(),
                submitted: form,
            }),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        _ => templates::render_server_error(),
    }
}
