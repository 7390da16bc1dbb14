use common::UserRole;
use serde_json::json;

use crate::common::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp, routes};

mod api_login {
    use super::*;

    #[tokio::test]
    async fn valid_credentials_set_the_session_cookie() {
        let app = TestApp::spawn().await;
        app.create_operator(ADMIN_EMAIL, ADMIN_PASSWORD, UserRole::Admin)
            .await;

        let res = app
            .post_json(
                routes::API_LOGIN,
                &json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["success"], true);
        assert_eq!(res.body["user"]["email"], ADMIN_EMAIL);
        assert_eq!(res.body["user"]["role"], "ADMIN");
        assert!(res.body["user"]["id"].is_string());

        let cookie = res.session_cookie().expect("session cookie should be set");
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let app = TestApp::spawn().await;
        app.create_operator(ADMIN_EMAIL, ADMIN_PASSWORD, UserRole::Admin)
            .await;

        let wrong = app
            .post_json(
                routes::API_LOGIN,
                &json!({"email": ADMIN_EMAIL, "password": "nope"}),
            )
            .await;
        let unknown = app
            .post_json(
                routes::API_LOGIN,
                &json!({"email": "ghost@reems.com", "password": ADMIN_PASSWORD}),
            )
            .await;

        for res in [&wrong, &unknown] {
            assert_eq!(res.status, 401);
            assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
            assert!(res.session_cookie().is_none());
        }
        assert_eq!(wrong.body, unknown.body);
    }

    #[tokio::test]
    async fn email_match_is_exact() {
        let app = TestApp::spawn().await;
        app.create_operator(ADMIN_EMAIL, ADMIN_PASSWORD, UserRole::Admin)
            .await;

        let res = app
            .post_json(
                routes::API_LOGIN,
                &json!({"email": "ADMIN@reems.com", "password": ADMIN_PASSWORD}),
            )
            .await;

        assert_eq!(res.status, 401);
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_as_bad_credentials() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::API_LOGIN, &json!({"email": ADMIN_EMAIL}))
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post_raw(routes::API_LOGIN, "application/json", "{not json")
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod current_user {
    use super::*;

    #[tokio::test]
    async fn me_returns_the_logged_in_operator() {
        let app = TestApp::spawn().await;
        app.create_operator("editor@reems.com", "Editor123!", UserRole::Editor)
            .await;
        let login = app
            .post_json(
                routes::API_LOGIN,
                &json!({"email": "editor@reems.com", "password": "Editor123!"}),
            )
            .await;
        assert_eq!(login.status, 200);

        let res = app.get(routes::API_ME).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["email"], "editor@reems.com");
        assert_eq!(res.body["role"], "EDITOR");
        assert_eq!(res.body["id"], login.body["user"]["id"]);
    }

    #[tokio::test]
    async fn me_without_session_is_unauthorized() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::API_ME).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn forged_cookie_is_unauthorized() {
        let app = TestApp::spawn().await;

        let res = app
            .fresh_client()
            .get(app.url(routes::API_ME))
            .header("Cookie", "reems_auth=eyJhbGciOiJIUzI1NiJ9.e30.bogus")
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 401);
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    async fn api_logout_clears_the_cookie() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        let res = app.post_json(routes::API_LOGOUT, &json!({})).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["success"], true);
        let cookie = res.session_cookie().expect("cookie should be cleared");
        assert!(cookie.contains("Max-Age=0"));

        let me = app.get(routes::API_ME).await;
        assert_eq!(me.status, 401);
    }

    #[tokio::test]
    async fn logout_without_session_still_succeeds() {
        let app = TestApp::spawn().await;

        let res = app.post_json(routes::API_LOGOUT, &json!({})).await;

        assert_eq!(res.status, 200);
    }
}

mod login_form {
    use super::*;

    #[tokio::test]
    async fn form_login_redirects_to_page_list() {
        let app = TestApp::spawn().await;
        app.create_operator(ADMIN_EMAIL, ADMIN_PASSWORD, UserRole::Admin)
            .await;

        let res = app
            .post_form(
                routes::ADMIN_LOGIN,
                &[("email", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)],
            )
            .await;

        res.assert_redirects_to(routes::PAGE_LIST);
        assert!(res.session_cookie().is_some());

        let list = app.get(routes::PAGE_LIST).await;
        assert_eq!(list.status, 200);
        assert!(list.text.contains(ADMIN_EMAIL));
    }

    #[tokio::test]
    async fn bad_form_login_re_renders_with_generic_error() {
        let app = TestApp::spawn().await;
        app.create_operator(ADMIN_EMAIL, ADMIN_PASSWORD, UserRole::Admin)
            .await;

        let res = app
            .post_form(
                routes::ADMIN_LOGIN,
                &[("email", ADMIN_EMAIL), ("password", "wrong")],
            )
            .await;

        assert_eq!(res.status, 401);
        assert!(res.text.contains("Invalid email or password"));
        assert!(res.text.contains(ADMIN_EMAIL), "email should be kept");
        assert!(res.session_cookie().is_none());
    }

    #[tokio::test]
    async fn login_page_redirects_when_already_signed_in() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        let res = app.get(routes::ADMIN_LOGIN).await;

        res.assert_redirects_to(routes::PAGE_LIST);
    }

    #[tokio::test]
    async fn form_logout_returns_to_login() {
        let app = TestApp::spawn().await;
        app.login_as_admin().await;

        let res = app.post_form(routes::ADMIN_LOGOUT, &[]).await;

        res.assert_redirects_to(routes::ADMIN_LOGIN);
        let after = app.get(routes::PAGE_LIST).await;
        after.assert_redirects_to(routes::ADMIN_LOGIN);
    }
}
