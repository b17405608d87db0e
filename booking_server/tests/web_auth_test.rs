mod test_utils;

use reqwest::{StatusCode, header};
use serde_json::{Value, json};

use booking_app::test_utils::tests::test_config;

use crate::test_utils::tests::{TEST_PASSWORD, session_cookie, setup_web_app, setup_web_app_with};

async fn login_set_cookie(secure_cookies: bool) -> String {
    let mut config = test_config();
    config.secure_cookies = secure_cookies;
    let server = setup_web_app_with(config).await;
    let email = server.register_user().await;

    let res = server
        .post("/identity/login")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("user_id="))
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_login_sets_session_and_me_reads_it() {
    let server = setup_web_app().await;
    let email = server.register_user().await;

    let res = server
        .post("/identity/login")
        .json(&json!({ "email": email.to_uppercase(), "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = session_cookie(&res).unwrap();
    let logged_in: Value = res.json().await.unwrap();
    assert_eq!(logged_in["email"], email.as_str());
    assert!(logged_in.get("password_hash").is_none());

    let res = server
        .get("/identity/me")
        .header(header::COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let me: Value = res.json().await.unwrap();
    assert_eq!(me["id"], logged_in["id"]);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let server = setup_web_app().await;
    let email = server.register_user().await;

    let res = server
        .post("/identity/login")
        .json(&json!({ "email": email, "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&res).is_none());
}

#[tokio::test]
async fn test_login_with_unknown_email() {
    let server = setup_web_app().await;

    let res = server
        .post("/identity/login")
        .json(&json!({ "email": "nobody@example.com", "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_rejects_missing_or_forged_session() {
    let server = setup_web_app().await;

    let res = server.get("/identity/me").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = server
        .get("/identity/me")
        .header(
            header::COOKIE,
            "user_id=6f0c4b2e-3a59-4a43-9d55-0b1f6e1c2d3a",
        )
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(server.provider.store_calls(), 0);
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let server = setup_web_app().await;
    let cookie = server.login_cookie().await;

    let res = server
        .post("/identity/logout")
        .header(header::COOKIE, &cookie)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let cleared = session_cookie(&res).unwrap();
    assert_eq!(cleared, "user_id=");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = setup_web_app().await;
    let email = server.register_user().await;

    let res = server
        .post("/identity/register")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let server = setup_web_app().await;

    let res = server
        .post("/identity/register")
        .json(&json!({ "email": "not-an-email", "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"][0]["field"], "email");
    assert_eq!(server.provider.store_calls(), 0);
}

#[tokio::test]
async fn test_session_cookie_secure_flag_follows_config() {
    let plain = login_set_cookie(false).await;
    assert!(plain.contains("HttpOnly"));
    assert!(!plain.contains("Secure"));

    let secure = login_set_cookie(true).await;
    assert!(secure.contains("Secure"));
}
