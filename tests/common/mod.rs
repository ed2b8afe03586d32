// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use skill_metrics::config::Config;
use skill_metrics::models::{Credentials, MetricName};
use skill_metrics::time_utils::ClockMode;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A request seen by the mock LWA/SMAPI server.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Recorded {
    Token {
        content_type: Option<String>,
        body: String,
    },
    Metrics {
        skill_id: String,
        query: String,
        authorization: Option<String>,
    },
}

/// How the mock server answers.
#[derive(Clone)]
pub struct MockBehavior {
    pub token_status: StatusCode,
    pub token_body: String,
    pub metrics_status: StatusCode,
    /// Metrics body; `{metric}` is replaced with the requested metric name.
    pub metrics_body: String,
    pub token_delay: Duration,
    pub metrics_delay: Duration,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            token_status: StatusCode::OK,
            token_body: r#"{"access_token":"Atza|mock-access-token","expires_in":3600,"token_type":"bearer","refresh_token":"Atzr|rotated"}"#.to_string(),
            metrics_status: StatusCode::OK,
            metrics_body: r#"{"metric":"{metric}","timestamps":["2024-01-01T00:00:00Z","2024-01-02T00:00:00Z"],"values":[3.0,5.0]}"#.to_string(),
            token_delay: Duration::ZERO,
            metrics_delay: Duration::ZERO,
        }
    }
}

#[derive(Clone)]
struct MockState {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Running mock server.
pub struct MockApi {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

#[allow(dead_code)]
impl MockApi {
    pub fn token_url(&self) -> String {
        format!("{}/auth/o2/token", self.base_url)
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a mock LWA + SMAPI server on an ephemeral local port.
pub async fn spawn_mock(behavior: MockBehavior) -> MockApi {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        behavior,
        requests: requests.clone(),
    };

    let app = Router::new()
        .route("/auth/o2/token", post(token_handler))
        .route("/v1/skills/{skill_id}/metrics", get(metrics_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{}", addr),
        requests,
    }
}

async fn token_handler(State(state): State<MockState>, headers: HeaderMap, body: String) -> Response {
    state.requests.lock().unwrap().push(Recorded::Token {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    tokio::time::sleep(state.behavior.token_delay).await;
    json_response(state.behavior.token_status, state.behavior.token_body.clone())
}

async fn metrics_handler(
    State(state): State<MockState>,
    Path(skill_id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    let query = query.unwrap_or_default();
    let metric = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("metric="))
        .unwrap_or_default()
        .to_string();

    state.requests.lock().unwrap().push(Recorded::Metrics {
        skill_id,
        query,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    tokio::time::sleep(state.behavior.metrics_delay).await;
    let body = state.behavior.metrics_body.replace("{metric}", &metric);
    json_response(state.behavior.metrics_status, body)
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Config pointed at a mock server, without charts.
#[allow(dead_code)]
pub fn test_config(mock: &MockApi, metrics: Vec<MetricName>) -> Config {
    Config {
        credentials: Credentials {
            client_id: "amzn1.application-oa2-client.test".to_string(),
            client_secret: "s3cret&value=with+specials".to_string(),
            refresh_token: "Atzr|IwEB/refresh==".to_string(),
        },
        skill_id: "amzn1.ask.skill.0000-1111".to_string(),
        deploy_dir: std::env::temp_dir().join("skill-metrics-unused"),
        render_charts: false,
        metrics,
        lwa_token_url: mock.token_url(),
        smapi_base_url: mock.base_url.clone(),
        http_timeout: Duration::from_secs(5),
        clock: ClockMode::Utc,
        print_access_token: false,
    }
}

/// Decode an `application/x-www-form-urlencoded` body into ordered pairs.
#[allow(dead_code)]
pub fn decode_form(body: &str) -> Vec<(String, String)> {
    let decode = |raw: &str| {
        urlencoding::decode(&raw.replace('+', " "))
            .expect("form field is not valid UTF-8")
            .into_owned()
    };
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect()
}
