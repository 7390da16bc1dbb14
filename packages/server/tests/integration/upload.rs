use common::media::memory::MemoryImageHost;
use reqwest::multipart::{Form, Part};
use uuid::Uuid;

use crate::common::{TestApp, UPLOAD_FOLDER, routes};

fn image_part(bytes: Vec<u8>, file_name: &str, mime: &str) -> Part {
    Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .expect("valid MIME type")
}

#[tokio::test]
async fn image_is_forwarded_and_recorded() {
    let app = TestApp::spawn().await;
    app.seed_home().await;
    app.login_as_admin().await;
    let forging = app.block("home", "capability_forging").await;

    let form = Form::new()
        .part("file", image_part(vec![0x89, b'P', b'N', b'G'], "wheel.png", "image/png"))
        .text("blockId", forging.id.to_string())
        .text("alt", "Forged wheel");
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["success"], true);
    let image = &res.body["image"];
    assert_eq!(image["alt"], "Forged wheel");
    let public_id = image["publicId"].as_str().unwrap();
    assert!(public_id.starts_with(UPLOAD_FOLDER));
    assert!(image["url"].as_str().unwrap().ends_with(public_id));

    let stored = app.images.stored().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].folder, UPLOAD_FOLDER);
    assert_eq!(stored[0].data.as_ref(), &[0x89, b'P', b'N', b'G']);

    // The capability item now prefers the uploaded image.
    let content = app.get(&routes::page_content("home")).await;
    let items = content.body["sections"]["capabilities"]["items"]
        .as_array()
        .unwrap();
    let forging_item = items.iter().find(|i| i["title"] == "Forging").unwrap();
    assert_eq!(forging_item["photoUrls"][0]["alt"], "Forged wheel");
}

#[tokio::test]
async fn upload_refreshes_the_cached_home_page() {
    let app = TestApp::spawn().await;
    app.seed_home().await;
    app.login_as_admin().await;
    let forging = app.block("home", "capability_forging").await;

    let before = app.get(routes::HOME).await;
    assert_eq!(before.status, 200);
    assert!(!before.text.contains(r#"alt="Forged wheel""#));
    assert!(app.state.render_cache.get("/").is_some());

    let form = Form::new()
        .part("file", image_part(vec![0xFF, 0xD8, 0xFF], "wheel.jpg", "image/jpeg"))
        .text("blockId", forging.id.to_string())
        .text("alt", "Forged wheel");
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert!(app.state.render_cache.get("/").is_none());

    // Rendered URLs are HTML-escaped, so look for the id's last segment.
    let public_id = res.body["image"]["publicId"].as_str().unwrap();
    let last_segment = public_id.rsplit('/').next().unwrap();

    let after = app.get(routes::HOME).await;
    assert_eq!(after.status, 200);
    assert!(after.text.contains(r#"alt="Forged wheel""#), "{}", after.text);
    assert!(after.text.contains(last_segment));
}

#[tokio::test]
async fn image_without_block_is_accepted() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let form = Form::new().part("file", image_part(vec![1, 2, 3], "a.webp", "image/webp"));
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 201, "{}", res.text);
    assert!(res.body["image"]["alt"].is_null());
}

#[tokio::test]
async fn content_type_is_guessed_from_file_name_when_undeclared() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let form = Form::new().part(
        "file",
        Part::bytes(vec![0xFF, 0xD8, 0xFF]).file_name("photo.jpg"),
    );
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 201, "{}", res.text);
}

#[tokio::test]
async fn missing_file_is_rejected() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let form = Form::new().text("alt", "nothing attached");
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "MISSING_FILE");
    assert!(app.images.stored().await.is_empty());
}

#[tokio::test]
async fn disallowed_type_lists_allowed_types() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let form = Form::new().part("file", image_part(vec![b'G', b'I', b'F'], "a.gif", "image/gif"));
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "INVALID_FILE_TYPE");
    let allowed = res.body["allowedTypes"].as_array().unwrap();
    assert!(allowed.iter().any(|t| t == "image/webp"));
    assert!(app.images.stored().await.is_empty());
}

#[tokio::test]
async fn oversized_file_reports_the_limit() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let too_big = vec![0u8; 5 * 1024 * 1024 + 1];
    let form = Form::new().part("file", image_part(too_big, "big.png", "image/png"));
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "FILE_TOO_LARGE");
    assert_eq!(res.body["maxSize"], 5 * 1024 * 1024);
}

#[tokio::test]
async fn file_at_the_limit_is_accepted() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let exact = vec![0u8; 5 * 1024 * 1024];
    let form = Form::new().part("file", image_part(exact, "max.png", "image/png"));
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 201, "{}", res.text);
}

#[tokio::test]
async fn unknown_block_is_not_found() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let form = Form::new()
        .part("file", image_part(vec![1], "a.png", "image/png"))
        .text("blockId", Uuid::now_v7().to_string());
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
    assert!(app.images.stored().await.is_empty());
}

#[tokio::test]
async fn malformed_block_id_is_a_validation_error() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;

    let form = Form::new()
        .part("file", image_part(vec![1], "a.png", "image/png"))
        .text("blockId", "block-7");
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn host_failure_is_reported_with_its_message() {
    let app = TestApp::spawn_with_images(MemoryImageHost::failing("quota exceeded")).await;
    app.login_as_admin().await;

    let form = Form::new().part("file", image_part(vec![1], "a.png", "image/png"));
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    assert_eq!(res.status, 500);
    assert_eq!(res.body["code"], "UPLOAD_FAILED");
    assert!(res.body["message"].as_str().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn upload_without_session_redirects_to_login() {
    let app = TestApp::spawn().await;

    let form = Form::new().part("file", image_part(vec![1], "a.png", "image/png"));
    let res = app.post_multipart(routes::UPLOAD_IMAGE, form).await;

    res.assert_redirects_to(routes::ADMIN_LOGIN);
}
