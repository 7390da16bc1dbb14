use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, routes};

mod api_update {
    use super::*;

    #[tokio::test]
    async fn update_replaces_text_and_bullets() {
        let app = TestApp::spawn().await;
        app.seed_home().await;
        app.login_as_admin().await;
        let intro = app.block("home", "intro").await;

        let res = app
            .patch_json(
                &routes::api_block(intro.id),
                &json!({
                    "title": "New intro",
                    "subtitle": "",
                    "body": "Updated body",
                    "bullets": "One\n\n  Two \nThree",
                }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        let block = &res.body["block"];
        assert_eq!(block["title"], "New intro");
        assert!(block["subtitle"].is_null());
        assert_eq!(block["body"], "Updated body");
        assert_eq!(block["bullets"], json!(["One", "Two", "Three"]));
        assert_eq!(block["key"], "intro");
        assert_eq!(block["type"], "INTRO");
        assert_eq!(res.body["revalidated"], json!(["/", "/admin/pages/home"]));

        let stored = app.reload_block(intro.id).await;
        assert_eq!(stored.title.as_deref(), Some("New intro"));
        assert_eq!(stored.order, intro.order);
        assert_eq!(stored.meta, intro.meta);
    }

    #[tokio::test]
    async fn absent_fields_clear_the_block() {
        let app = TestApp::spawn().await;
        app.seed_home().await;
        app.login_as_admin().await;
        let wheels = app.block("home", "wheels").await;

        let res = app.patch_json(&routes::api_block(wheels.id), &json!({})).await;

        assert_eq!(res.status, 200);
        let stored = app.reload_block(wheels.id).await;
        assert!(stored.title.is_none());
        assert!(stored.subtitle.is_none());
        assert!(stored.body.is_none());
        assert!(stored.bullets.is_none());
    }

    #[tokio::test]
    async fn update_bumps_the_page_timestamp() {
        let app = TestApp::spawn().await;
        app.seed_home().await;
        app.login_as_admin().await;
        let before = app.page("home").await;
        let hero = app.block("home", "hero").await;

        let res = app
            .patch_json(&routes::api_block(hero.id), &json!({"title": "Headline"}))
            .await;
        assert_eq!(res.status, 200);

        let after = app.page("home").await;
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn unknown_block_is_not_found() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        let res = app
            .patch_json(&routes::api_block(Uuid::now_v7()), &json!({"title": "x"}))
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        let res = app
            .patch_json("/api/admin/blocks/not-a-uuid", &json!({"title": "x"}))
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn update_drops_the_cached_home_page() {
        let app = TestApp::spawn().await;
        app.seed_home().await;
        app.login_as_admin().await;

        let first = app.get(routes::HOME).await;
        assert_eq!(first.status, 200);
        assert!(app.state.render_cache.get("/").is_some());

        let hero = app.block("home", "hero").await;
        let res = app
            .patch_json(
                &routes::api_block(hero.id),
                &json!({"title": "Lighter than ever"}),
            )
            .await;
        assert_eq!(res.status, 200);
        assert!(app.state.render_cache.get("/").is_none());

        let second = app.get(routes::HOME).await;
        assert!(second.text.contains("Lighter than ever"));
    }
}

mod editor_form {
    use super::*;

    #[tokio::test]
    async fn saving_redirects_back_with_banner() {
        let app = TestApp::spawn().await;
        app.seed_home().await;
        app.login_as_admin().await;
        let segment = app.block("home", "market_aerospace").await;

        let res = app
            .post_form(
                &routes::editor_block("home", segment.id),
                &[
                    ("title", "Aerospace & Space"),
                    ("subtitle", ""),
                    ("body", "Light parts"),
                    ("bullets", "Brackets\nCasings"),
                ],
            )
            .await;

        let expected = format!(
            "/admin/pages/home?saved={}#block-{}",
            segment.id, segment.id
        );
        res.assert_redirects_to(&expected);

        let stored = app.reload_block(segment.id).await;
        assert_eq!(stored.title.as_deref(), Some("Aerospace & Space"));
        assert_eq!(
            stored.bullets.map(|b| b.into_inner()),
            Some(vec!["Brackets".to_string(), "Casings".to_string()])
        );

        let editor = app
            .get(&format!("/admin/pages/home?saved={}", segment.id))
            .await;
        assert_eq!(editor.status, 200);
        assert!(editor.text.contains("Block updated successfully."));
    }

    #[tokio::test]
    async fn saving_an_unknown_block_renders_not_found() {
        let app = TestApp::spawn().await;
        app.seed_home().await;
        app.login_as_admin().await;

        let res = app
            .post_form(
                &routes::editor_block("home", Uuid::now_v7()),
                &[("title", "x")],
            )
            .await;

        assert_eq!(res.status, 404);
        assert!(res.text.contains("not found"));
    }

    #[tokio::test]
    async fn editor_lists_blocks_in_order() {
        let app = TestApp::spawn().await;
        app.seed_home().await;
        app.login_as_admin().await;

        let res = app.get(&routes::editor("home")).await;

        assert_eq!(res.status, 200);
        let pos = |key: &str| {
            res.text
                .find(&format!("Key: {key}"))
                .unwrap_or_else(|| panic!("{key} missing"))
        };
        assert!(pos("hero") < pos("intro"));
        assert!(pos("intro") < pos("market_segments_header"));
        assert!(pos("wheels") < pos("final_cta"));
    }

    #[tokio::test]
    async fn unknown_page_renders_not_found() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        let res = app.get(&routes::editor("missing")).await;

        assert_eq!(res.status, 404);
        assert!(res.text.contains("/admin/page-list"));
    }

    #[tokio::test]
    async fn page_list_shows_provisioned_pages() {
        let app = TestApp::spawn().await;
        app.seed_home().await;
        app.login_as_admin().await;

        let res = app.get(routes::PAGE_LIST).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("/admin/pages/home"));
        assert!(res.text.contains("UTC"));
    }
}
