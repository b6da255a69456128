//! Outbound HTTP to the Wikimedia APIs
//!
//! Every call builds its own client and performs a single GET. Callers that
//! must not fail wrap the outcome in [`Fetched`].

use crate::error::{Result, WdAudioLexError};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Settings shared by every outbound request.
#[derive(Debug, Clone)]
pub struct Upstream {
    user_agent: String,
    timeout: Option<Duration>,
}

impl Upstream {
    pub fn new(user_agent: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
        }
    }

    fn client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    /// GET `url` with query `params` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        accept: &str,
    ) -> Result<T> {
        let response = self
            .client()?
            .get(url)
            .query(params)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WdAudioLexError::UpstreamStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// A value that is always usable: either the real data, or the empty default
/// together with the failure that caused the fallback.
#[derive(Debug)]
pub struct Fetched<T> {
    value: T,
    failure: Option<WdAudioLexError>,
}

impl<T: Default> Fetched<T> {
    pub fn ok(value: T) -> Self {
        Self { value, failure: None }
    }

    /// Log `failure` and fall back to `T::default()`.
    pub fn degraded(failure: WdAudioLexError, what: &str) -> Self {
        tracing::warn!(error = %failure, "Error {}", what);
        Self {
            value: T::default(),
            failure: Some(failure),
        }
    }

    pub fn from_result(result: Result<T>, what: &str) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(e) => Self::degraded(e, what),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Why the value fell back to the default, if it did.
    pub fn failure(&self) -> Option<&WdAudioLexError> {
        self.failure.as_ref()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
