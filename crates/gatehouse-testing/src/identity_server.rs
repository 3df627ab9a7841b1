//! Stub identity runtime.
//!
//! Serves canned JSON per request path and records every request, so broker adapters
//! can be tested over real HTTP without the runtime.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Request as received by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
}

pub struct StubIdentityServer {
    base_url: String,
    state: StubState,
    task: JoinHandle<()>,
}

impl StubIdentityServer {
    /// Bind to an ephemeral localhost port and start serving.
    pub async fn start() -> Self {
        let state = StubState::default();
        let router = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub identity server");
        let addr = listener.local_addr().expect("stub identity server address");
        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("stub identity server");
        });
        Self {
            base_url: format!("http://{addr}"),
            state,
            task,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Answer `path` with `200` and `body`.
    pub fn respond_json(&self, path: &str, body: Value) {
        self.respond(path, 200, body.to_string());
    }

    /// Answer `path` with a raw status and body.
    pub fn respond(&self, path: &str, status: u16, body: impl Into<String>) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_owned(), (status, body.into()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for StubIdentityServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_owned();
    state.requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let canned = state.responses.lock().unwrap().get(&path).cloned();
    match canned {
        Some((status, body)) => {
            (status, [(CONTENT_TYPE, "application/json")], body).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({
                "kind": "UNKNOWN_OPERATION",
                "message": format!("no stub for {path}"),
            })),
        )
            .into_response(),
    }
}
