//! HTTP surface: the search page and two JSON endpoints

use crate::error::WdAudioLexError;
use crate::languages::LanguageMap;
use crate::lexemes::LexemeRecord;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const PAGE_TITLE: &str = "Welcome to WDAudioLEx";

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

// === Handlers ===

async fn index() -> Html<String> {
    Html(INDEX_TEMPLATE.replace("{{ title }}", PAGE_TITLE))
}

async fn get_languages(State(state): State<Arc<AppState>>) -> Json<LanguageMap> {
    Json(state.languages.fetch_supported_languages().await.into_value())
}

async fn search_lexemes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<LexemeRecord>>, WdAudioLexError> {
    // Repeated `word` parameters are allowed; the first one wins.
    let word = params
        .into_iter()
        .find_map(|(key, value)| (key == "word").then_some(value))
        .ok_or_else(|| WdAudioLexError::BadRequest("Word parameter is required".to_string()))?;

    Ok(Json(state.lexemes.search_lexemes(&word).await.into_value()))
}

async fn not_found(uri: Uri) -> WdAudioLexError {
    WdAudioLexError::NotFound(uri.path().to_string())
}

/// Every route the application serves, bound to `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/languages", get(get_languages))
        .route("/api/search-lexemes", get(search_lexemes))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
