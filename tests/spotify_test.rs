use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use spotrec::{
    config::parse_config,
    error::ApiError,
    spotify::{RecommendationSource, SpotifyClient},
    types::RecommendationRequest,
};

// base64("test-client:test-secret")
const EXPECTED_BASIC_AUTH: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";

#[derive(Default)]
struct MockSpotify {
    token_requests: AtomicUsize,
    reject_credentials: AtomicBool,
    reject_next_token: AtomicBool,
    malformed_body: AtomicBool,
    last_query: Mutex<HashMap<String, String>>,
}

async fn token(
    State(mock): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if mock.reject_credentials.load(Ordering::SeqCst)
        || authorization != EXPECTED_BASIC_AUTH
        || form.get("grant_type").map(String::as_str) != Some("client_credentials")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_client" })),
        )
            .into_response();
    }

    let n = mock.token_requests.fetch_add(1, Ordering::SeqCst) + 1;
    Json(json!({
        "access_token": format!("mock-token-{}", n),
        "token_type": "Bearer",
        "expires_in": 3600,
    }))
    .into_response()
}

async fn recommendations(
    State(mock): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let current = format!(
        "Bearer mock-token-{}",
        mock.token_requests.load(Ordering::SeqCst)
    );
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if mock.reject_next_token.swap(false, Ordering::SeqCst) || authorization != current {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "The access token expired" } })),
        )
            .into_response();
    }

    *mock.last_query.lock().unwrap() = query;

    if mock.malformed_body.load(Ordering::SeqCst) {
        return Json(json!({ "seeds": [] })).into_response();
    }

    Json(json!({
        "tracks": [
            {
                "id": "t1",
                "name": "First Song",
                "album": {
                    "name": "First Album",
                    "artists": [{ "id": "a1", "name": "First Artist" }],
                    "images": [{ "url": "https://i.scdn.co/image/first", "height": 640, "width": 640 }]
                }
            },
            {
                "id": "t2",
                "name": "Second Song",
                "album": {
                    "name": "Second Album",
                    "artists": [{ "id": "a2", "name": "Second Artist" }],
                    "images": []
                }
            }
        ]
    }))
    .into_response()
}

async fn spawn_mock() -> (Arc<MockSpotify>, SpotifyClient) {
    let mock = Arc::new(MockSpotify::default());
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/recommendations", get(recommendations))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = parse_config(&format!(
        r#"
spotify:
  CLIENT_ID: "test-client"
  CLIENT_SECRET: "test-secret"
  API_URL: "http://{addr}/v1/"
  TOKEN_URL: "http://{addr}/api/token"
"#,
        addr = addr
    ))
    .unwrap();

    (mock, SpotifyClient::new(&config.spotify))
}

fn request(artists: &[&str], tracks: &[&str]) -> RecommendationRequest {
    RecommendationRequest {
        seed_artists: artists.iter().map(|s| s.to_string()).collect(),
        seed_tracks: tracks.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_recommendations_query() {
    let (mock, client) = spawn_mock().await;

    let response = client
        .get_recommendations(
            &request(
                &["a1", "spotify:artist:a2"],
                &["https://open.spotify.com/track/t9?si=x"],
            ),
            10,
        )
        .await
        .unwrap();

    assert_eq!(response.tracks.len(), 2);
    assert_eq!(response.tracks[0].name, "First Song");
    assert_eq!(response.tracks[1].album.artists[0].name, "Second Artist");

    let query = mock.last_query.lock().unwrap().clone();
    assert_eq!(query.get("limit").map(String::as_str), Some("10"));
    assert_eq!(query.get("seed_artists").map(String::as_str), Some("a1,a2"));
    assert_eq!(query.get("seed_tracks").map(String::as_str), Some("t9"));
    assert!(!query.contains_key("seed_genres"));
}

#[tokio::test]
async fn test_empty_seed_tracks_are_omitted() {
    let (mock, client) = spawn_mock().await;

    client
        .get_recommendations(&request(&["a1"], &[]), 5)
        .await
        .unwrap();

    let query = mock.last_query.lock().unwrap().clone();
    assert_eq!(query.get("limit").map(String::as_str), Some("5"));
    assert!(!query.contains_key("seed_tracks"));
}

#[tokio::test]
async fn test_token_is_reused() {
    let (mock, client) = spawn_mock().await;

    for _ in 0..3 {
        client
            .recommendations(&request(&["a1"], &[]), 10)
            .await
            .unwrap();
    }

    assert_eq!(mock.token_requests.load(Ordering::SeqCst), 1);
    assert_eq!(client.access_token().await.unwrap(), "mock-token-1");
}

#[tokio::test]
async fn test_rejected_token_is_dropped() {
    let (mock, client) = spawn_mock().await;

    client.access_token().await.unwrap();
    mock.reject_next_token.store(true, Ordering::SeqCst);

    let err = client
        .get_recommendations(&request(&["a1"], &[]), 10)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UpstreamRequest(_)));
    assert!(err.to_string().contains("401"));

    // Next call authenticates again
    client
        .get_recommendations(&request(&["a1"], &[]), 10)
        .await
        .unwrap();
    assert_eq!(mock.token_requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_rejected_credentials() {
    let (mock, client) = spawn_mock().await;
    mock.reject_credentials.store(true, Ordering::SeqCst);

    let err = client
        .get_recommendations(&request(&["a1"], &[]), 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UpstreamAuth(_)));
    assert!(err.to_string().contains("invalid_client"));
}

#[tokio::test]
async fn test_malformed_response() {
    let (mock, client) = spawn_mock().await;
    mock.malformed_body.store(true, Ordering::SeqCst);

    let err = client
        .get_recommendations(&request(&["a1"], &[]), 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UpstreamSchema(_)));
}

#[tokio::test]
async fn test_unreachable_upstream() {
    let config = parse_config(
        r#"
spotify:
  CLIENT_ID: "test-client"
  CLIENT_SECRET: "test-secret"
  API_URL: "http://127.0.0.1:1/v1"
  TOKEN_URL: "http://127.0.0.1:1/api/token"
"#,
    )
    .unwrap();
    let client = SpotifyClient::new(&config.spotify);

    let err = client
        .get_recommendations(&request(&["a1"], &[]), 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UpstreamAuth(_)));
}
