// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use recipy_client::config::Config;
use recipy_client::store::MemoryStore;
use recipy_client::time_utils::Clock;
use recipy_client::RecipyClient;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A request as seen by the fake gateway.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Shared {
    responses: HashMap<(Method, String), (StatusCode, String)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Canned-response gateway served by axum on an ephemeral port.
#[derive(Default)]
pub struct FakeGateway {
    responses: HashMap<(Method, String), (StatusCode, String)>,
}

#[allow(dead_code)]
impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `method path` with a JSON body.
    pub fn json(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.raw(method, path, status, &body.to_string())
    }

    /// Respond to `method path` with a literal body.
    pub fn raw(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.responses
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    pub async fn start(self) -> RunningGateway {
        let shared = Arc::new(Shared {
            responses: self.responses,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(shared.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake gateway");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake gateway");
        });

        RunningGateway {
            base_url: format!("http://{}", addr),
            shared,
        }
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    };
    shared.requests.lock().unwrap().push(request);

    match shared.responses.get(&(method, uri.path().to_string())) {
        Some((status, body)) => (
            *status,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"no such route"}"#,
        )
            .into_response(),
    }
}

pub struct RunningGateway {
    pub base_url: String,
    shared: Arc<Shared>,
}

#[allow(dead_code)]
impl RunningGateway {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    /// The only request received; panics otherwise.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }

    /// Client wired to this gateway with an in-memory session store.
    pub fn client(&self) -> (RecipyClient, Arc<MemoryStore>) {
        client_for(&self.base_url)
    }
}

#[allow(dead_code)]
pub fn client_for(base_url: &str) -> (RecipyClient, Arc<MemoryStore>) {
    let config = Config {
        api_gateway_url: base_url.to_string(),
        ..Config::test_default()
    };
    let store = Arc::new(MemoryStore::new());
    let client = RecipyClient::new(config, store.clone()).expect("client");
    (client, store)
}

/// Base URL of a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Clock that only moves when told to.
#[allow(dead_code)]
pub struct ManualClock(Mutex<DateTime<Utc>>);

#[allow(dead_code)]
impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Mutex::new(start))
    }

    pub fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}
