use serde::{Deserialize, Serialize};

use crate::auth::session::Identity;

/// Request body for operator login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Operator email, matched exactly.
    #[serde(default)]
    #[schema(example = "admin@reems.com")]
    pub email: String,
    /// Account password.
    #[serde(default)]
    #[schema(example = "s3cure_P@ss!")]
    pub password: String,
}

/// Successful login. The session itself travels in the `reems_auth` cookie.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    #[schema(example = true)]
    pub success: bool,
    pub user: Identity,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
