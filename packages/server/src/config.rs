use common::media::cloudinary::CloudinaryConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

/// Deployment mode. Session cookies are only sent over plain HTTP in development.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Development,
    #[default]
    Production,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub mode: RunMode,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Image host folder uploads are placed in.
    pub folder: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Artificial delay before the contact endpoint answers.
    pub response_delay_ms: u64,
}

#[derive(Deserialize, Clone, Default)]
pub struct SeedConfig {
    pub admin_email: String,
    /// Operator account is only provisioned when a password is supplied.
    pub admin_password: Option<String>,
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("admin_email", &self.admin_email)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cloudinary: CloudinaryConfig,
    pub upload: UploadConfig,
    pub contact: ContactConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load and validate the service configuration.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::read()?;
        config.validate()?;
        Ok(config)
    }

    /// Assemble the configuration from its sources without validating it.
    ///
    /// Required keys default to empty strings so tools that only need part of
    /// the configuration (the `seed` binary) can still read it.
    pub fn read() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.mode", "production")?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("upload.folder", "reems/reems-blocks")?
            .set_default("contact.response_delay_ms", 1000)?
            .set_default("seed.admin_email", "admin@reems.com")?
            .set_default("database.url", "")?
            .set_default("auth.jwt_secret", "")?
            .set_default("cloudinary.cloud_name", "")?
            .set_default("cloudinary.api_key", "")?
            .set_default("cloudinary.api_secret", "")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., REEMS__AUTH__JWT_SECRET)
            .add_source(
                Environment::with_prefix("REEMS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Reject configurations the service must not run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.jwt_secret must be set (REEMS__AUTH__JWT_SECRET)".into(),
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message(
                "database.url must be set (REEMS__DATABASE__URL)".into(),
            ));
        }
        self.cloudinary
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(())
    }

    pub fn secure_cookies(&self) -> bool {
        self.server.mode != RunMode::Development
    }
}
