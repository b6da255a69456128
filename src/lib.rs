//! WDAudioLEx - Wikidata lexeme search
//!
//! Thin web layer over the Wikimedia language-info API and the Wikidata
//! SPARQL endpoint.

pub mod config;
pub mod error;
pub mod forms;
pub mod languages;
pub mod lexemes;
pub mod routes;
pub mod sanitize;
pub mod state;
pub mod upstream;

pub use config::Config;
pub use error::{Result, WdAudioLexError};
pub use forms::{parse_lexeme_forms, LexemeForm, LexemeForms};
pub use languages::{label_in, LanguageDirectory, LanguageMap};
pub use lexemes::{build_query, LexemeRecord, LexemeSearch};
pub use routes::{build_router, PAGE_TITLE};
pub use sanitize::sanitize_word;
pub use state::AppState;
pub use upstream::{Fetched, Upstream};
