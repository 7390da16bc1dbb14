use std::sync::Arc;

use chrono::{Duration, Utc};
use common::UserRole;
use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session validity window.
pub const SESSION_DAYS: i64 = 7;

/// JWT Claims structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub uid: Uuid,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

/// Signing material derived once from the configured secret.
#[derive(Clone)]
pub struct SessionKeys {
    inner: Arc<Keys>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    /// Fails on an empty secret so the service never signs with a blank key.
    pub fn new(secret: &str) -> Result<Self, Error> {
        if secret.trim().is_empty() {
            return Err(ErrorKind::InvalidKeyFormat.into());
        }
        Ok(Self {
            inner: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
        })
    }

    /// Sign a new session token for a user.
    pub fn issue(&self, uid: Uuid, email: &str, role: UserRole) -> Result<String, Error> {
        self.issue_at(uid, email, role, Utc::now().timestamp())
    }

    fn issue_at(&self, uid: Uuid, email: &str, role: UserRole, iat: i64) -> Result<String, Error> {
        let claims = Claims {
            uid,
            email: email.to_owned(),
            role,
            iat,
            exp: iat + Duration::days(SESSION_DAYS).num_seconds(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.inner.encoding,
        )
    }

    /// Validate signature and expiry. Any failure yields `None`.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        match decode::<Claims>(token, &self.inner.decoding, &validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Session token rejected: {}", e);
                None
            }
        }
    }
}
