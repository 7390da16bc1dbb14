use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use tracing::instrument;

use crate::auth::session::Identity;
use crate::entity::user;
use crate::utils::hash;

/// Check an email/password pair against the stored operators.
///
/// Unknown email, wrong password and an unreadable stored hash all give
/// `Ok(None)`; only store failures are errors. The email is matched exactly.
#[instrument(skip(db, password))]
pub async fn validate_credentials<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<Option<Identity>, DbErr> {
    let Some(found) = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?
    else {
        tracing::debug!("Login attempt for unknown email");
        return Ok(None);
    };

    match hash::verify_password(password, &found.password_hash) {
        Ok(true) => Ok(Some(Identity {
            id: found.id,
            email: found.email,
            role: found.role,
        })),
        Ok(false) => {
            tracing::debug!("Login attempt with wrong password");
            Ok(None)
        }
        Err(e) => {
            tracing::warn!(user_id = %found.id, "Stored password hash is unreadable: {}", e);
            Ok(None)
        }
    }
}

/// Minimal `local@domain.tld` shape check, no whitespace anywhere.
///
/// The domain needs some dot with text on both sides; a trailing dot after
/// that is tolerated (`john@example.com.`).
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}
