mod test_utils;

use reqwest::{StatusCode, header};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::tests::setup_web_app;

fn jfk() -> Value {
    json!({ "name": "JFK Intl", "address": "NYC", "code": "JFK" })
}

#[tokio::test]
async fn test_create_airport_requires_session() {
    let server = setup_web_app().await;

    let res = server
        .post("/flight/airport")
        .json(&jfk())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(server.provider.transactions_begun(), 0);
    assert_eq!(server.provider.store_calls(), 0);
}

#[tokio::test]
async fn test_create_airport_then_duplicate_code() {
    let server = setup_web_app().await;
    let cookie = server.login_cookie().await;

    let res = server
        .post("/flight/airport")
        .header(header::COOKIE, &cookie)
        .json(&jfk())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await.unwrap();
    assert!(created["id"].as_str().is_some());

    let res = server
        .post("/flight/airport")
        .header(header::COOKIE, &cookie)
        .json(&jfk())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 409);
    assert_eq!(body["title"], "Conflict");

    assert_eq!(server.provider.airport_count(), 1);
}

#[tokio::test]
async fn test_airport_round_trip_keeps_client_id() {
    let server = setup_web_app().await;
    let cookie = server.login_cookie().await;
    let id = Uuid::new_v4();

    let res = server
        .post("/flight/airport")
        .header(header::COOKIE, &cookie)
        .json(&json!({ "id": id, "name": "Heathrow", "address": "London", "code": "LHR" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], id.to_string());

    let res = server
        .get(&format!("/flight/airport/{id}"))
        .header(header::COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["airport"],
        json!({ "id": id, "name": "Heathrow", "address": "London", "code": "LHR" })
    );
}

#[tokio::test]
async fn test_create_airport_reports_every_missing_field() {
    let server = setup_web_app().await;
    let cookie = server.login_cookie().await;
    let calls_before = server.provider.store_calls();

    let res = server
        .post("/flight/airport")
        .header(header::COOKIE, &cookie)
        .json(&json!({ "name": "  " }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["name", "address", "code"]);
    assert_eq!(server.provider.store_calls(), calls_before);
}

#[tokio::test]
async fn test_malformed_input_is_a_bad_request() {
    let server = setup_web_app().await;
    let cookie = server.login_cookie().await;

    let res = server
        .post("/flight/airport")
        .header(header::COOKIE, &cookie)
        .header(header::CONTENT_TYPE, "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .get("/flight/airport/not-a-uuid")
        .header(header::COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleted_airport_frees_its_code() {
    let server = setup_web_app().await;
    let cookie = server.login_cookie().await;

    let res = server
        .post("/flight/airport")
        .header(header::COOKIE, &cookie)
        .json(&jfk())
        .send()
        .await
        .unwrap();
    let created: Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let res = server
        .delete(&format!("/flight/airport/{id}"))
        .header(header::COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = server
        .get(&format!("/flight/airport/{id}"))
        .header(header::COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = server
        .post("/flight/airport")
        .header(header::COOKIE, &cookie)
        .json(&jfk())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let recreated: Value = res.json().await.unwrap();
    assert_ne!(recreated["id"], created["id"]);
}
