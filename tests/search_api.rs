mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, get, post_json, send, FakeProvider, Reply};

#[tokio::test]
async fn search_without_query_is_400_and_skips_provider() {
    let provider = FakeProvider::new(Reply::Json(json!({ "foods": [] })));

    let (status, body) = send(app(None, provider.clone()), post_json("/api/search", &json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing query" }));
    assert!(provider.searches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn non_string_or_empty_query_is_400() {
    let provider = FakeProvider::new(Reply::Json(json!({})));

    for payload in [json!({ "query": 7 }), json!({ "query": "" }), json!({ "query": ["egg"] })] {
        let (status, body) = send(app(None, provider.clone()), post_json("/api/search", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing query");
    }
    assert!(provider.searches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn search_passes_provider_payload_through() {
    let payload = json!({
        "totalHits": 1,
        "foods": [{ "fdcId": 171287, "description": "Egg, whole, raw, fresh" }],
    });
    let provider = FakeProvider::new(Reply::Json(payload.clone()));

    let (status, body) = send(
        app(None, provider.clone()),
        post_json("/api/search", &json!({ "query": "egg" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
    let searches = provider.searches.lock().unwrap();
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].query, "egg");
    assert_eq!(searches[0].page_size, 25);
    assert_eq!(searches[0].page_number, 1);
}

#[tokio::test]
async fn search_forwards_paging() {
    let provider = FakeProvider::new(Reply::Json(json!({ "foods": [] })));

    let (status, _) = send(
        app(None, provider.clone()),
        post_json("/api/search", &json!({ "query": "rice", "pageSize": 10, "pageNumber": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let searches = provider.searches.lock().unwrap();
    assert_eq!((searches[0].page_size, searches[0].page_number), (10, 4));
}

#[tokio::test]
async fn upstream_failure_is_500_with_status_and_body() {
    let provider = FakeProvider::new(Reply::Status(403, "API_KEY_INVALID"));

    let (status, body) = send(app(None, provider), post_json("/api/search", &json!({ "query": "egg" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "FDC search failed: 403 API_KEY_INVALID");
}

#[tokio::test]
async fn missing_api_key_is_500_config_error() {
    let provider = FakeProvider::new(Reply::MissingKey);

    let (status, body) = send(app(None, provider), post_json("/api/search", &json!({ "query": "egg" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("FDC API key not configured"));
}

#[tokio::test]
async fn malformed_json_is_400_with_error_body() {
    let provider = FakeProvider::new(Reply::Json(json!({})));
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/search")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, body) = send(app(None, provider), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn get_on_search_points_to_post() {
    let provider = FakeProvider::new(Reply::Json(json!({})));

    let (status, body) = send(app(None, provider), get("/api/search")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Use POST with { query }");
}

#[tokio::test]
async fn food_lookup_validates_id_and_returns_record() {
    let provider = FakeProvider::new(Reply::Json(json!({ "fdcId": 42, "description": "Oats" })));

    let (status, body) = send(app(None, provider.clone()), get("/api/foods/42")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Oats");
    assert_eq!(*provider.lookups.lock().unwrap(), vec![42]);

    let (status, body) = send(app(None, provider.clone()), get("/api/foods/zero")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid id");
}

#[tokio::test]
async fn health_is_ok() {
    let provider = FakeProvider::new(Reply::Json(json!({})));
    let res = tower::ServiceExt::oneshot(app(None, provider), get("/api/health"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
