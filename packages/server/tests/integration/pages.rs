use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn home_shows_placeholder_before_provisioning() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HOME).await;

    assert_eq!(res.status, 200);
    assert!(res.text.contains("has not been seeded"));
    assert!(app.state.render_cache.is_empty());
}

#[tokio::test]
async fn home_renders_seeded_content_and_is_cached() {
    let app = TestApp::spawn().await;
    app.seed_home().await;

    let res = app.get(routes::HOME).await;

    assert_eq!(res.status, 200);
    assert!(res.text.contains("Race &amp; Engineering Elite Manufacturing Services"));
    assert!(res.text.contains("Explore capabilities"));
    assert!(res.text.contains("Let&#x27;s Build What Others Think Is Impossible."));
    assert_eq!(app.state.render_cache.get("/"), Some(res.text.clone()));

    let again = app.get(routes::HOME).await;
    assert_eq!(again.text, res.text);
}

#[tokio::test]
async fn page_content_exposes_adapted_sections() {
    let app = TestApp::spawn().await;
    app.seed_home().await;

    let res = app.get(&routes::page_content("home")).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["slug"], "home");
    let sections = &res.body["sections"];
    assert_eq!(
        sections["hero"]["headline"],
        "Race & Engineering Elite Manufacturing Services"
    );
    assert_eq!(sections["hero"]["buttons"]["primary"], "Explore capabilities");
    assert_eq!(sections["intro"]["ctaButton"], "Start your project");
    assert_eq!(sections["marketSegments"]["title"], "Market segments");
    assert_eq!(
        sections["marketSegments"]["segments"].as_array().unwrap().len(),
        4
    );
    assert_eq!(sections["lifecycle"]["phases"].as_array().unwrap().len(), 4);
    assert_eq!(sections["capabilities"]["items"].as_array().unwrap().len(), 6);
    assert_eq!(
        sections["forgedWheels"]["ctaButton"],
        "Send us your wheel specification"
    );
    assert_eq!(
        sections["company"]["slogan"],
        "Let's Build What Others Think Is Impossible."
    );
}

#[tokio::test]
async fn edited_bullets_show_up_in_adapted_content() {
    let app = TestApp::spawn().await;
    app.seed_home().await;
    app.login_as_admin().await;
    let intro = app.block("home", "intro").await;

    let res = app
        .patch_json(
            &routes::api_block(intro.id),
            &json!({"body": "Intro", "bullets": "One\nTwo\nThree"}),
        )
        .await;
    assert_eq!(res.status, 200);

    let content = app.get(&routes::page_content("home")).await;
    assert_eq!(
        content.body["sections"]["intro"]["bullets"],
        json!(["One", "Two", "Three"])
    );
}

#[tokio::test]
async fn unknown_page_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::page_content("about")).await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::spawn().await;

    let res = app.get("/api-docs/openapi.json").await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["info"]["title"], "REEMS API");
    let paths = res.body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/auth/login"));
    assert!(paths.contains_key("/api/admin/blocks/{id}"));
    assert!(paths.contains_key("/api/admin/upload-image"));
    assert!(paths.contains_key("/api/contact"));
    assert!(paths.contains_key("/api/pages/{slug}"));
}
