use std::sync::Arc;

use axum::extract::FromRef;
use common::media::ImageHost;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::content::cache::RenderCache;
use crate::utils::jwt::SessionKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub keys: SessionKeys,
    pub images: Arc<dyn ImageHost>,
    pub render_cache: RenderCache,
}

impl AppState {
    /// Assemble state from an already validated configuration.
    pub fn new(
        db: DatabaseConnection,
        config: AppConfig,
        images: Arc<dyn ImageHost>,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        let keys = SessionKeys::new(&config.auth.jwt_secret)?;
        Ok(Self {
            db,
            config: Arc::new(config),
            keys,
            images,
            render_cache: RenderCache::default(),
        })
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        state.keys.clone()
    }
}
