mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_shorten_text_created() {
    let server = common::create_test_server();

    let response = server.post("/").text("https://practicum.yandex.ru").await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.text(),
        format!(
            "{}/{}",
            common::BASE_URL,
            url_shortener::utils::code_generator::generate_short_code(
                "https://practicum.yandex.ru"
            )
        )
    );
}

#[tokio::test]
async fn test_shorten_text_twice_conflicts_with_same_body() {
    let server = common::create_test_server();

    let first = server.post("/").text("https://ya.ru").await;
    first.assert_status(StatusCode::CREATED);

    let second = server.post("/").text("https://ya.ru").await;
    second.assert_status(StatusCode::CONFLICT);

    assert_eq!(first.text(), second.text());
    assert_eq!(first.text(), format!("{}/2138586483", common::BASE_URL));
}

#[tokio::test]
async fn test_shorten_text_hashes_raw_body() {
    let server = common::create_test_server();

    let response = server.post("/").text(" https://ya.ru").await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.text(),
        format!(
            "{}/{}",
            common::BASE_URL,
            url_shortener::utils::code_generator::generate_short_code(" https://ya.ru")
        )
    );
}

#[tokio::test]
async fn test_shorten_text_rejects_control_characters() {
    let server = common::create_test_server();

    let response = server.post("/").text("https://a.ru/x\ny").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    server.get("/1742541160").await.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_json_rejects_control_characters() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://a.ru/\ty" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_text_empty_body() {
    let server = common::create_test_server();

    let response = server.post("/").text("").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_json_created() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://ya5.ru" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["result"], format!("{}/269264536", common::BASE_URL));
}

#[tokio::test]
async fn test_shorten_json_conflict() {
    let server = common::create_test_server();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://ya.ru" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://ya.ru" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["result"], format!("{}/2138586483", common::BASE_URL));
}

#[tokio::test]
async fn test_shorten_json_conflicts_with_text_endpoint() {
    let server = common::create_test_server();

    server
        .post("/")
        .text("https://ya.ru")
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://ya.ru" }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_shorten_json_wrong_content_type() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .text(r#"{"url": "https://ya.ru"}"#)
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "Content-Type must be 'application/json'"
    );
}

#[tokio::test]
async fn test_shorten_json_malformed() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .bytes(Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_json_empty_url() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
}
