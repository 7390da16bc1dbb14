use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn complete_request_is_accepted() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json(
            routes::CONTACT,
            &json!({
                "name": "Ada",
                "email": "ada@example.com",
                "company": "Analytical Engines",
                "message": "We need forged wheels.",
            }),
        )
        .await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["success"], true);
    assert_eq!(res.body["message"], "Request received successfully");
}

#[tokio::test]
async fn company_is_optional() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json(
            routes::CONTACT,
            &json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"}),
        )
        .await;

    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = TestApp::spawn().await;

    for body in [
        json!({"email": "ada@example.com", "message": "Hi"}),
        json!({"name": "Ada", "message": "Hi"}),
        json!({"name": "Ada", "email": "ada@example.com", "message": ""}),
    ] {
        let res = app.post_json(routes::CONTACT, &body).await;
        assert_eq!(res.status, 400, "{body}");
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["message"], "Missing required fields");
    }
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json(
            routes::CONTACT,
            &json!({"name": "Ada", "email": "ada at example", "message": "Hi"}),
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["message"], "Invalid email format");
}
