//! End-to-end test harness for the Bookshelf catalog service.
//!
//! Each test spawns its own server on an ephemeral port with a freshly seeded
//! catalog, plus a stub volumes API so lookups never leave the machine.
//!
//! # Stub volumes API
//!
//! The stub answers `GET /volumes?q=...` by search term:
//!
//! - `inauthor:Harper Lee` - two volumes, one without identifiers
//! - `intitle:Dune` - one volume without authors
//! - a term containing `slow` - answers after [`STUB_SLOW_DELAY`]
//! - a term containing `broken` - `503 Service Unavailable`
//! - a term containing `garbage` - a body that is not JSON
//! - anything else - `{"totalItems": 0}`
//!
//! # Example
//!
//! ```rust,ignore
//! let ctx = TestContext::spawn().await;
//! let resp = ctx.get("/books").await;
//! assert_eq!(resp.status(), 200);
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use bookshelf_api::config::{ApiConfig, LookupConfig};
use bookshelf_api::state::AppState;
use reqwest::Client;
use serde_json::{Value, json};
use url::Url;

/// How long the stub waits before answering a `slow` search.
pub const STUB_SLOW_DELAY: Duration = Duration::from_secs(3);

/// Lookup timeout used by spawned servers; shorter than [`STUB_SLOW_DELAY`].
pub const TEST_LOOKUP_TIMEOUT: Duration = Duration::from_secs(1);

/// A running server and a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Spawn a server with no retrieval delay.
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn a server after adjusting its configuration.
    pub async fn spawn_with(configure: impl FnOnce(&mut ApiConfig)) -> Self {
        let volumes_addr = serve(volumes_stub()).await;
        let volumes_url = Url::parse(&format!("http://{volumes_addr}/volumes"))
            .expect("stub URL is valid");

        let mut config = ApiConfig {
            port: 0,
            lookup: LookupConfig {
                base_url: volumes_url,
                timeout: TEST_LOOKUP_TIMEOUT,
            },
            retrieval_delay: Duration::ZERO,
            ..ApiConfig::default()
        };
        configure(&mut config);

        let state = AppState::new(config).expect("Failed to create application state");
        let addr = serve(bookshelf_api::app(state)).await;

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Full URL for a path on the spawned server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Send a DELETE request with a JSON body.
    pub async fn delete_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .json(body)
            .send()
            .await
            .expect("DELETE request failed")
    }
}

/// Read a response body as JSON.
pub async fn json_body(response: reqwest::Response) -> Value {
    response.json().await.expect("Response body is not JSON")
}

/// Serve a router on an ephemeral local port.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server error");
    });

    addr
}

fn volumes_stub() -> Router {
    Router::new().route("/volumes", get(stub_search))
}

async fn stub_search(Query(params): Query<HashMap<String, String>>) -> Response {
    let query = params.get("q").cloned().unwrap_or_default();

    if query.contains("slow") {
        tokio::time::sleep(STUB_SLOW_DELAY).await;
    }
    if query.contains("broken") {
        return (StatusCode::SERVICE_UNAVAILABLE, "backend unavailable").into_response();
    }
    if query.contains("garbage") {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let body = match query.as_str() {
        "inauthor:Harper Lee" => json!({
            "kind": "books#volumes",
            "totalItems": 2,
            "items": [
                {
                    "volumeInfo": {
                        "title": "To Kill a Mockingbird",
                        "authors": ["Harper Lee"],
                        "industryIdentifiers": [
                            {"type": "ISBN_13", "identifier": "9780061120084"},
                            {"type": "ISBN_10", "identifier": "0061120081"}
                        ]
                    }
                },
                {
                    "volumeInfo": {
                        "title": "Go Set a Watchman",
                        "authors": ["Harper Lee", "Anonymous Editor"]
                    }
                }
            ]
        }),
        "intitle:Dune" => json!({
            "totalItems": 1,
            "items": [{
                "volumeInfo": {
                    "title": "Dune",
                    "industryIdentifiers": [{"type": "ISBN_13", "identifier": "9780441013593"}]
                }
            }]
        }),
        _ => json!({"kind": "books#volumes", "totalItems": 0}),
    };

    Json(body).into_response()
}
