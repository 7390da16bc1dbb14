use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};

use crate::auth::{access::LOGIN_PATH, session, session::Identity};
use crate::error::AppError;
use crate::utils::jwt::SessionKeys;

/// Operator resolved from the session cookie, for JSON endpoints.
///
/// Rejects with `UNAUTHORIZED` when the cookie is missing or fails verification.
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    SessionKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = SessionKeys::from_ref(state);
        session::resolve(&parts.headers, &keys)
            .map(AuthUser)
            .ok_or(AppError::Unauthorized)
    }
}

/// Operator resolved from the session cookie, for server-rendered admin pages.
///
/// Re-checks the cookie independently of the access-control layer and
/// redirects to the login page on failure.
pub struct AdminSession(pub Identity);

impl<S> FromRequestParts<S> for AdminSession
where
    SessionKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = SessionKeys::from_ref(state);
        session::resolve(&parts.headers, &keys)
            .map(AdminSession)
            .ok_or_else(|| Redirect::to(LOGIN_PATH))
    }
}
