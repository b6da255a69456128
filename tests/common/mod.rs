//! Stub Wikimedia upstreams served on an ephemeral local port.

#![allow(dead_code)]

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use wdaudiolex::{AppState, Config};

type Params = Query<HashMap<String, String>>;

fn has_user_agent(headers: &HeaderMap) -> bool {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ua| ua.starts_with("WDAudioLEx/"))
}

async fn language_info(headers: HeaderMap, Query(params): Params) -> Response {
    if !has_user_agent(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }
    let expected = [
        ("action", "query"),
        ("meta", "languageinfo"),
        ("liprop", "name|autonym"),
        ("format", "json"),
    ];
    if expected
        .iter()
        .any(|(k, v)| params.get(*k).map(String::as_str) != Some(*v))
    {
        return StatusCode::BAD_REQUEST.into_response();
    }

    Json(json!({
        "batchcomplete": true,
        "query": {
            "languageinfo": {
                "en": {"name": "English", "autonym": "English"},
                "fr": {"name": "French", "autonym": "Français"}
            }
        }
    }))
    .into_response()
}

async fn sparql(headers: HeaderMap, Query(params): Params) -> Response {
    if !has_user_agent(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }
    let accepts_sparql_json = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        == Some("application/sparql-results+json");
    if !accepts_sparql_json || params.get("format").map(String::as_str) != Some("json") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let (Some(word), Some(query)) = (params.get("search_word"), params.get("query")) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    if !query.contains(&format!("VALUES ?search_word {{ \"{}\" }}", word)) {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let bindings = if word == "hello" {
        vec![json!({
            "lexeme": {"type": "uri", "value": "http://www.wikidata.org/entity/L123"},
            "lemma": {"type": "literal", "value": "hello"},
            "languageLabel": {"type": "literal", "value": "English"}
        })]
    } else {
        vec![]
    };

    Json(json!({
        "head": {"vars": ["lexeme", "lemma", "language", "languageLabel"]},
        "results": {"bindings": bindings}
    }))
    .into_response()
}

async fn partial_row() -> Json<serde_json::Value> {
    Json(json!({
        "results": {"bindings": [
            {"lexeme": {"value": "http://www.wikidata.org/entity/L1"}, "lemma": {"value": "x"}}
        ]}
    }))
}

async fn no_query_section() -> Json<serde_json::Value> {
    Json(json!({"batchcomplete": true}))
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn garbage() -> &'static str {
    "<html>upstream maintenance</html>"
}

/// Start the stub upstream and return its base URL.
pub async fn spawn_upstream() -> String {
    let router = Router::new()
        .route("/w/api.php", get(language_info))
        .route("/sparql", get(sparql))
        .route("/partial", get(partial_row))
        .route("/empty", get(no_query_section))
        .route("/broken", get(broken))
        .route("/garbage", get(garbage));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A URL nothing is listening on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

pub fn state_for(language_info_url: &str, sparql_url: &str) -> Arc<AppState> {
    let config = Config::default()
        .with_language_info_url(language_info_url)
        .with_sparql_url(sparql_url)
        .with_upstream_timeout(std::time::Duration::from_secs(5));
    Arc::new(AppState::new(&config))
}

/// State pointed at the healthy stub endpoints.
pub async fn healthy_state() -> Arc<AppState> {
    let base = spawn_upstream().await;
    state_for(&format!("{}/w/api.php", base), &format!("{}/sparql", base))
}

/// State whose upstreams refuse connections.
pub async fn unreachable_state() -> Arc<AppState> {
    let url = closed_url().await;
    state_for(&url, &url)
}
