use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::utils::jwt::SESSION_DAYS;

pub const SESSION_COOKIE: &str = "reems_auth";

/// Session cookie carrying a freshly issued token.
pub fn session(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(time::Duration::days(SESSION_DAYS))
        .build()
}

/// Same cookie, expired immediately.
pub fn cleared(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}
