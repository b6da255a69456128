//! Supported language directory from the Wikimedia language-info API

use crate::error::Result;
use crate::upstream::{Fetched, Upstream};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_LANGUAGE_INFO_URL: &str = "https://commons.wikimedia.org/w/api.php";

/// Language code to display label.
pub type LanguageMap = BTreeMap<String, String>;

#[derive(Debug, Deserialize)]
struct LanguageInfoResponse {
    query: Option<LanguageInfoQuery>,
}

#[derive(Debug, Deserialize)]
struct LanguageInfoQuery {
    #[serde(default)]
    languageinfo: HashMap<String, LanguageInfo>,
}

#[derive(Debug, Deserialize)]
struct LanguageInfo {
    name: Option<String>,
    autonym: Option<String>,
}

impl LanguageInfo {
    /// Autonym, then English name, then the code itself.
    fn label(self, code: &str) -> String {
        match (self.autonym, self.name) {
            (Some(autonym), _) if !autonym.is_empty() => autonym,
            (_, Some(name)) => name,
            _ => code.to_string(),
        }
    }
}

fn into_language_map(response: LanguageInfoResponse) -> LanguageMap {
    let Some(query) = response.query else {
        return LanguageMap::new();
    };

    query
        .languageinfo
        .into_iter()
        .map(|(code, info)| {
            let label = info.label(&code);
            (code, label)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct LanguageDirectory {
    url: String,
    upstream: Upstream,
}

impl LanguageDirectory {
    pub fn new(url: impl Into<String>, upstream: Upstream) -> Self {
        Self {
            url: url.into(),
            upstream,
        }
    }

    async fn fetch(&self) -> Result<LanguageMap> {
        let params = [
            ("action", "query"),
            ("meta", "languageinfo"),
            ("liprop", "name|autonym"),
            ("format", "json"),
        ];
        let response: LanguageInfoResponse = self
            .upstream
            .get_json(&self.url, &params, "application/json")
            .await?;
        Ok(into_language_map(response))
    }

    /// Fetch every supported language. Failures degrade to an empty map.
    pub async fn fetch_supported_languages(&self) -> Fetched<LanguageMap> {
        let fetched = Fetched::from_result(self.fetch().await, "fetching language codes");
        tracing::debug!(count = fetched.value().len(), "language directory fetched");
        fetched
    }

    /// Label for `code` from a fresh fetch, or the code itself when unknown.
    pub async fn label_for(&self, code: &str) -> String {
        let languages = self.fetch_supported_languages().await.into_value();
        label_in(&languages, code)
    }
}

/// Look `code` up in an already fetched directory.
pub fn label_in(languages: &LanguageMap, code: &str) -> String {
    languages
        .get(code)
        .cloned()
        .unwrap_or_else(|| code.to_string())
}
