#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use sporlapi::{
    config::SpotifySettings, server::router, spotify::SpotifyClient,
    spotify::auth::basic_auth_header,
};
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const ACCESS_TOKEN: &str = "stub-access-token";

/// Counters and knobs of the stubbed Spotify API.
pub struct Upstream {
    pub token_requests: AtomicUsize,
    pub api_requests: AtomicUsize,
    pub expires_in: u64,
}

impl Upstream {
    pub fn new(expires_in: u64) -> Arc<Self> {
        Arc::new(Self {
            token_requests: AtomicUsize::new(0),
            api_requests: AtomicUsize::new(0),
            expires_in,
        })
    }

    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    pub fn api_requests(&self) -> usize {
        self.api_requests.load(Ordering::SeqCst)
    }
}

/// Binds `app` on an ephemeral local port and returns its base url.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts a stubbed Spotify API and returns its state and base url.
pub async fn spawn_upstream(expires_in: u64) -> (Arc<Upstream>, String) {
    let state = Upstream::new(expires_in);
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/search", get(search))
        .route("/v1/artists/{id}/albums", get(artist_albums))
        .route("/v1/artists/{id}/top-tracks", get(top_tracks))
        .route("/v1/albums/{id}", get(album))
        .with_state(Arc::clone(&state));

    let url = spawn(app).await;
    (state, url)
}

pub fn settings_for(upstream: &str) -> SpotifySettings {
    let mut settings = SpotifySettings::new(CLIENT_ID, CLIENT_SECRET);
    settings.api_url = format!("{upstream}/v1");
    settings.token_url = format!("{upstream}/api/token");
    settings
}

/// Starts the facade wired to `upstream` and returns its base url.
pub async fn spawn_facade(settings: SpotifySettings) -> String {
    let client = Arc::new(SpotifyClient::new(&settings).unwrap());
    spawn(router(client)).await
}

async fn token(
    State(state): State<Arc<Upstream>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state.token_requests.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == basic_auth_header(CLIENT_ID, CLIENT_SECRET));
    let grant = form.get("grant_type").map(String::as_str);

    if !authorized || grant != Some("client_credentials") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_client" })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": state.expires_in
    }))
    .into_response()
}

fn check_bearer(state: &Upstream, headers: &HeaderMap) -> Result<(), Response> {
    state.api_requests.fetch_add(1, Ordering::SeqCst);

    let expected = format!("Bearer {ACCESS_TOKEN}");
    match headers.get(header::AUTHORIZATION) {
        Some(v) if v.to_str().ok() == Some(expected.as_str()) => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
        )
            .into_response()),
    }
}

async fn search(
    State(state): State<Arc<Upstream>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(res) = check_bearer(&state, &headers) {
        return res;
    }

    let q = params.get("q").map(String::as_str).unwrap_or_default();
    let kind = params.get("type").map(String::as_str).unwrap_or_default();
    assert_eq!(params.get("limit").map(String::as_str), Some("1"));

    let body = match (kind, q) {
        ("track", "Blinding Lights") => json!({ "tracks": { "items": [track_fixture()] } }),
        ("track", "broken") => {
            let mut track = track_fixture();
            track.as_object_mut().unwrap().remove("popularity");
            json!({ "tracks": { "items": [track] } })
        }
        ("track", _) => json!({ "tracks": { "items": [] } }),
        ("artist", "The Weeknd") => json!({ "artists": { "items": [artist_fixture()] } }),
        ("artist", _) => json!({ "artists": { "items": [] } }),
        ("album", "After Hours") => json!({ "albums": { "items": [{ "id": "4yP0hdKOZPNshxUOjY0cZj", "name": "After Hours" }] } }),
        ("album", _) => json!({ "albums": { "items": [] } }),
        _ => return (StatusCode::BAD_REQUEST, "unsupported search").into_response(),
    };

    Json(body).into_response()
}

async fn artist_albums(
    State(state): State<Arc<Upstream>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(res) = check_bearer(&state, &headers) {
        return res;
    }
    assert_eq!(id, "1Xyo4u8uXC1ZmMpatF05PJ");

    Json(json!({
        "items": [
            { "id": "a1", "name": "After Hours", "album_type": "album" },
            { "id": "a2", "name": "Starboy", "album_type": "album" },
            { "id": "s1", "name": "Blinding Lights", "album_type": "single" },
            { "id": "c1", "name": "The Highlights", "album_type": "compilation" },
            { "id": "x1", "name": "Guest Verse", "album_type": "appears_on" }
        ]
    }))
    .into_response()
}

async fn top_tracks(
    State(state): State<Arc<Upstream>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(res) = check_bearer(&state, &headers) {
        return res;
    }
    assert_eq!(id, "1Xyo4u8uXC1ZmMpatF05PJ");
    assert_eq!(params.get("market").map(String::as_str), Some("US"));

    Json(json!({
        "tracks": [
            { "name": "Blinding Lights", "popularity": 94 },
            { "name": "Save Your Tears", "popularity": 90 }
        ]
    }))
    .into_response()
}

async fn album(
    State(state): State<Arc<Upstream>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(res) = check_bearer(&state, &headers) {
        return res;
    }
    assert_eq!(id, "4yP0hdKOZPNshxUOjY0cZj");

    Json(json!({
        "name": "After Hours",
        "album_type": "album",
        "release_date": "2020-03-20",
        "total_tracks": 1,
        "popularity": 88,
        "external_urls": { "spotify": "https://open.spotify.com/album/4yP0hdKOZPNshxUOjY0cZj" },
        "artists": [{
            "id": "1Xyo4u8uXC1ZmMpatF05PJ",
            "name": "The Weeknd",
            "external_urls": { "spotify": "https://open.spotify.com/artist/1Xyo4u8uXC1ZmMpatF05PJ" }
        }],
        "images": [{ "url": "https://i.scdn.co/image/cover", "height": 640, "width": 640 }],
        "tracks": {
            "items": [{
                "name": "Alone Again",
                "duration_ms": 250051,
                "track_number": 1,
                "external_urls": { "spotify": "https://open.spotify.com/track/a" }
            }]
        }
    }))
    .into_response()
}

pub fn track_fixture() -> Value {
    json!({
        "id": "0VjIjW4GlUZAMYd2vXMi3b",
        "name": "Blinding Lights",
        "duration_ms": 200040,
        "popularity": 94,
        "explicit": false,
        "external_urls": { "spotify": "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b" }
    })
}

pub fn artist_fixture() -> Value {
    json!({
        "id": "1Xyo4u8uXC1ZmMpatF05PJ",
        "name": "The Weeknd",
        "external_urls": { "spotify": "https://open.spotify.com/artist/1Xyo4u8uXC1ZmMpatF05PJ" },
        "images": [{ "url": "https://i.scdn.co/image/640", "height": 640, "width": 640 }],
        "genres": ["canadian contemporary r&b", "pop"],
        "followers": { "href": null, "total": 95000000 },
        "popularity": 96
    })
}
