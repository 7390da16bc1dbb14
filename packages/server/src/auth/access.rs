use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::session;
use crate::utils::jwt::SessionKeys;

pub const LOGIN_PATH: &str = "/admin/login";

const ADMIN_PREFIXES: &[&str] = &["/admin", "/api/admin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Outside the administrative area.
    Public,
    /// The login page, reachable without a session.
    Login,
    /// Everything else under an administrative prefix.
    Protected,
}

/// Classify a request path. Prefixes only match whole segments, so
/// `/administrator` is public.
pub fn classify(path: &str) -> PathClass {
    if path == LOGIN_PATH {
        return PathClass::Login;
    }
    let protected = ADMIN_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    });
    if protected {
        PathClass::Protected
    } else {
        PathClass::Public
    }
}

/// Gate in front of the whole router. Protected paths without a verifiable
/// session cookie are redirected to the login page; otherwise the resolved
/// identity is attached to the request extensions.
pub async fn require_session(
    State(keys): State<SessionKeys>,
    mut req: Request,
    next: Next,
) -> Response {
    match classify(req.uri().path()) {
        PathClass::Public | PathClass::Login => next.run(req).await,
        PathClass::Protected => match session::resolve(req.headers(), &keys) {
            Some(identity) => {
                req.extensions_mut().insert(identity);
                next.run(req).await
            }
            None => {
                tracing::debug!(path = %req.uri().path(), "No valid session, redirecting to login");
                Redirect::to(LOGIN_PATH).into_response()
            }
        },
    }
}
