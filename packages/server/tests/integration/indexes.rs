use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::common::TestApp;

/// Copy a block row under a fresh id, keeping its page and key.
fn duplicate_block_sql(source: Uuid) -> String {
    format!(
        "INSERT INTO block (id, page_id, type, key, role, \"order\", meta, created_at, updated_at) \
         SELECT '{}', page_id, type, key, role, \"order\", meta, created_at, updated_at \
         FROM block WHERE id = '{}'",
        Uuid::now_v7(),
        source
    )
}

#[tokio::test]
async fn ensuring_indexes_twice_is_harmless() {
    let app = TestApp::spawn().await;

    reems_server::seed::ensure_indexes(&app.db)
        .await
        .expect("indexes already present");
}

#[tokio::test]
async fn duplicate_key_within_a_page_is_rejected() {
    let app = TestApp::spawn().await;
    app.seed_home().await;
    let hero = app.block("home", "hero").await;

    let res = app.db.execute_unprepared(&duplicate_block_sql(hero.id)).await;

    assert!(res.is_err(), "duplicate (page_id, key) was stored");
}

#[tokio::test]
async fn unique_index_failure_is_an_error() {
    let app = TestApp::spawn().await;
    app.seed_home().await;
    let hero = app.block("home", "hero").await;

    app.db
        .execute_unprepared("DROP INDEX idx_block_page_key")
        .await
        .expect("Failed to drop index");
    app.db
        .execute_unprepared(&duplicate_block_sql(hero.id))
        .await
        .expect("Failed to insert duplicate block");

    let res = reems_server::seed::ensure_indexes(&app.db).await;

    assert!(res.is_err(), "startup must not continue without the unique index");
}
