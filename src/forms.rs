//! Form extraction from Wikibase lexeme JSON

use crate::error::{Result, WdAudioLexError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single form of a lexeme (`L123-F1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexemeForm {
    #[serde(rename = "id")]
    pub form_id: Option<String>,
    /// Written representations keyed by language code.
    #[serde(default)]
    pub representations: Map<String, Value>,
    /// Item ids of grammatical features (e.g. `Q110786`).
    #[serde(default, rename = "grammaticalFeatures")]
    pub grammatical_features: Vec<String>,
    #[serde(default)]
    pub statements: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct LexemeDocument {
    #[serde(default)]
    forms: Vec<LexemeForm>,
}

/// Lexeme id to its forms, in lexeme id order.
pub type LexemeForms = BTreeMap<String, Vec<LexemeForm>>;

/// Parse a JSON object of lexemes keyed by id and collect each lexeme's forms.
pub fn parse_lexeme_forms(json: &str) -> Result<LexemeForms> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(lexemes) = value else {
        return Err(WdAudioLexError::Malformed(
            "Invalid JSON format. Expected an object keyed by lexeme id".to_string(),
        ));
    };

    lexemes
        .into_iter()
        .map(|(id, doc)| -> Result<(String, Vec<LexemeForm>)> {
            let doc: LexemeDocument = serde_json::from_value(doc)?;
            Ok((id, doc.forms))
        })
        .collect()
}
