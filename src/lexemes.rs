//! Lexeme search against the Wikidata SPARQL endpoint

use crate::error::Result;
use crate::sanitize::sanitize_word;
use crate::upstream::{Fetched, Upstream};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SPARQL_URL: &str = "https://query.wikidata.org/sparql";

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// One matching lexeme, as returned by `/api/search-lexemes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexemeRecord {
    pub id: String,
    pub lemma: String,
    pub language: String,
}

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: Option<SparqlResults>,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<LexemeBinding>,
}

#[derive(Debug, Deserialize)]
struct LexemeBinding {
    lexeme: BoundValue,
    lemma: BoundValue,
    #[serde(rename = "languageLabel")]
    language_label: BoundValue,
}

#[derive(Debug, Deserialize)]
struct BoundValue {
    value: String,
}

impl From<LexemeBinding> for LexemeRecord {
    fn from(binding: LexemeBinding) -> Self {
        Self {
            id: lexeme_id(&binding.lexeme.value).to_string(),
            lemma: binding.lemma.value,
            language: binding.language_label.value,
        }
    }
}

/// `http://www.wikidata.org/entity/L123` -> `L123`
fn lexeme_id(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}

fn into_records(response: SparqlResponse) -> Vec<LexemeRecord> {
    response
        .results
        .map(|results| results.bindings.into_iter().map(LexemeRecord::from).collect())
        .unwrap_or_default()
}

/// Body of a SPARQL `"..."` literal. Sanitized words carry no quotes or
/// backslashes, but may keep line breaks, which the grammar forbids raw.
fn string_literal(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Exact, case-insensitive match of a lemma's written representation.
///
/// `word` is expected to be sanitized already.
pub fn build_query(word: &str) -> String {
    let word = string_literal(word);
    format!(
        r#"SELECT DISTINCT ?lexeme ?lemma ?language ?languageLabel WHERE {{
  VALUES ?search_word {{ "{word}" }}
  ?lexeme a ontolex:LexicalEntry ;
          dct:language ?language ;
          ontolex:lemma ?lemma .
  ?lemma ontolex:writtenRep ?writtenRep .
  FILTER(LCASE(?writtenRep) = LCASE(?search_word))
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "[AUTO_LANGUAGE],en". }}
}}"#
    )
}

#[derive(Debug, Clone)]
pub struct LexemeSearch {
    url: String,
    upstream: Upstream,
}

impl LexemeSearch {
    pub fn new(url: impl Into<String>, upstream: Upstream) -> Self {
        Self {
            url: url.into(),
            upstream,
        }
    }

    async fn query(&self, sanitized: &str) -> Result<Vec<LexemeRecord>> {
        let query = build_query(sanitized);
        let params = [
            ("query", query.as_str()),
            ("format", "json"),
            ("search_word", sanitized),
        ];
        let response: SparqlResponse = self
            .upstream
            .get_json(&self.url, &params, SPARQL_RESULTS_JSON)
            .await?;
        Ok(into_records(response))
    }

    /// Lexemes whose lemma equals the sanitized `word`, in upstream order.
    /// Failures degrade to an empty list.
    pub async fn search_lexemes(&self, word: &str) -> Fetched<Vec<LexemeRecord>> {
        let sanitized = sanitize_word(word);
        if sanitized.is_empty() {
            tracing::debug!(raw = word, "search word is empty after sanitizing");
        }

        let fetched = Fetched::from_result(self.query(&sanitized).await, "searching lexemes");
        tracing::debug!(word = %sanitized, count = fetched.value().len(), "lexeme search finished");
        fetched
    }
}
