use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;
use common::UserRole;
use serde::Serialize;
use uuid::Uuid;

use crate::utils::cookie::SESSION_COOKIE;
use crate::utils::jwt::{Claims, SessionKeys};

/// The operator a request acts on behalf of. Never carries the password hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Identity {
    pub id: Uuid,
    #[schema(example = "admin@reems.com")]
    pub email: String,
    pub role: UserRole,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.uid,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Resolve the session cookie in `headers` to an identity.
///
/// Both the access-control layer and the per-handler extractors call this, so
/// they always agree on whether a token is acceptable.
pub fn resolve(headers: &HeaderMap, keys: &SessionKeys) -> Option<Identity> {
    let jar = CookieJar::from_headers(headers);
    let token = jar.get(SESSION_COOKIE)?.value();
    if token.is_empty() {
        return None;
    }
    keys.verify(token).map(Identity::from)
}
