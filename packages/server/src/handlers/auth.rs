use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use tracing::instrument;

use crate::auth::credentials::validate_credentials;
use crate::auth::session::Identity;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::body::AppJson;
use crate::models::auth::{LoginRequest, LoginResponse, SuccessResponse};
use crate::state::AppState;
use crate::utils::cookie;

/// Check credentials and issue a session token for the matching operator.
///
/// Shared by the JSON endpoint and the admin login form.
pub async fn open_session(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<(Identity, String), AppError> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::InvalidCredentials);
    }

    let identity = validate_credentials(&state.db, email, password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let token = state
        .keys
        .issue(identity.id, &identity.email, identity.role)
        .map_err(|e| AppError::Internal(format!("JWT sign error: {}", e)))?;

    Ok((identity, token))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Log in with email and password",
    description = "Validates the credentials and sets the `reems_auth` session cookie (HttpOnly, SameSite=Lax, 7 days). \
        Unknown email and wrong password are reported identically.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = LoginResponse),
        (status = 400, description = "Malformed body (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Bad credentials (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, payload), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let (identity, token) = open_session(&state, &payload.email, &payload.password).await?;
    tracing::info!(user_id = %identity.id, "Operator logged in");

    let jar = jar.add(cookie::session(token, state.config.secure_cookies()));
    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            user: identity,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "Auth",
    operation_id = "logout",
    summary = "Clear the session cookie",
    description = "Always succeeds. The token itself stays valid until it expires.",
    responses(
        (status = 200, description = "Session cookie cleared", body = SuccessResponse),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let jar = jar.add(cookie::cleared(state.config.secure_cookies()));
    (jar, Json(SuccessResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    operation_id = "getCurrentUser",
    summary = "Get the logged-in operator",
    responses(
        (status = 200, description = "Current operator", body = Identity),
        (status = 401, description = "No valid session (UNAUTHORIZED)", body = ErrorBody),
    ),
    security(("session" = [])),
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.0.id))]
pub async fn me(auth_user: AuthUser) -> Json<Identity> {
    Json(auth_user.0)
}
