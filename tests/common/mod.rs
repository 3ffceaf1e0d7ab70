#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use parking_lot::Mutex;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use url_shortener_client::application::services::ShortenerService;
use url_shortener_client::infrastructure::HttpShortenerApi;

/// A request as seen by the fake service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Raw request path, percent-encoding preserved.
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<(String, String), CannedResponse>>>,
}

/// Stand-in for the shortener service, listening on a random local port.
///
/// Every request is recorded. Unconfigured routes answer
/// `404 {"detail":"Not Found"}`.
pub struct FakeService {
    pub base_url: String,
    state: FakeState,
}

impl FakeService {
    pub async fn start() -> Self {
        Self::start_with_prefix("").await
    }

    /// Serves under a path prefix, e.g. `/app`, and reports a base URL ending in `/app/`.
    pub async fn start_with_prefix(prefix: &str) -> Self {
        let state = FakeState::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}{}/", addr, prefix),
            state,
        }
    }

    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        self.respond_after(method, path, status, body, None);
    }

    pub fn respond_after(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: &str,
        delay: Option<Duration>,
    ) {
        self.state.responses.lock().insert(
            (method.to_string(), path.to_string()),
            CannedResponse {
                status,
                body: body.to_string(),
                delay,
            },
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn api(&self) -> HttpShortenerApi {
        HttpShortenerApi::new(Url::parse(&self.base_url).unwrap(), Client::new())
    }

    pub fn api_with_timeout(&self, timeout: Duration) -> HttpShortenerApi {
        let client = Client::builder().timeout(timeout).build().unwrap();
        HttpShortenerApi::new(Url::parse(&self.base_url).unwrap(), client)
    }

    pub fn service(&self) -> ShortenerService<HttpShortenerApi> {
        ShortenerService::new(Arc::new(self.api()))
    }
}

async fn record(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();

    state.requests.lock().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let canned = state
        .responses
        .lock()
        .get(&(method.to_string(), path))
        .cloned();

    match canned {
        Some(canned) => {
            if let Some(delay) = canned.delay {
                tokio::time::sleep(delay).await;
            }
            (
                canned.status,
                [(header::CONTENT_TYPE, "application/json")],
                canned.body,
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"detail":"Not Found"}"#,
        )
            .into_response(),
    }
}
