//! Provision the home page and the admin operator.
//!
//! Only the database URL and the `seed.*` keys are read; the image host and
//! signing secret may be left unset.

use anyhow::Context;
use tracing::{Level, info, warn};

use reems_server::config::AppConfig;
use reems_server::{database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::read().context("Failed to load configuration")?;
    anyhow::ensure!(!config.database.url.is_empty(), "database.url must be set");

    let db = database::init_db(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    seed::ensure_indexes(&db).await?;

    seed::seed_home(&db).await.context("Failed to seed home page")?;

    match config.seed.admin_password.as_deref() {
        Some(password) if !password.is_empty() => {
            seed::seed_admin(&db, &config.seed.admin_email, password)
                .await
                .context("Failed to seed admin operator")?;
        }
        _ => warn!(
            "seed.admin_password not set, skipping operator {}",
            config.seed.admin_email
        ),
    }

    info!("Seed completed");
    Ok(())
}
