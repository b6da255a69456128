//! Application state management

use crate::config::Config;
use crate::languages::LanguageDirectory;
use crate::lexemes::LexemeSearch;
use crate::upstream::Upstream;

/// Clients shared by every request handler. Holds settings only.
pub struct AppState {
    pub languages: LanguageDirectory,
    pub lexemes: LexemeSearch,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let upstream = Upstream::new(config.user_agent.clone(), config.upstream_timeout);

        Self {
            languages: LanguageDirectory::new(config.language_info_url.clone(), upstream.clone()),
            lexemes: LexemeSearch::new(config.sparql_url.clone(), upstream),
        }
    }
}
