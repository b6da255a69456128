//! Process configuration from the environment

use crate::error::{Result, WdAudioLexError};
use crate::languages::DEFAULT_LANGUAGE_INFO_URL;
use crate::lexemes::DEFAULT_SPARQL_URL;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub language_info_url: String,
    pub sparql_url: String,
    /// Wikimedia rejects anonymous clients, so every request names itself.
    pub user_agent: String,
    /// Unset means the HTTP client's default.
    pub upstream_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            language_info_url: DEFAULT_LANGUAGE_INFO_URL.to_string(),
            sparql_url: DEFAULT_SPARQL_URL.to_string(),
            user_agent: default_user_agent(),
            upstream_timeout: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("WDAudioLEx/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Read `WDAUDIOLEX_*` variables, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let addr = lookup("WDAUDIOLEX_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .map_err(|e| WdAudioLexError::Config(format!("WDAUDIOLEX_ADDR {:?}: {}", addr, e)))?;

        let upstream_timeout = match lookup("WDAUDIOLEX_UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs.trim().parse().map_err(|e| {
                    WdAudioLexError::Config(format!(
                        "WDAUDIOLEX_UPSTREAM_TIMEOUT_SECS {:?}: {}",
                        secs, e
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            bind_addr,
            language_info_url: lookup("WDAUDIOLEX_LANGUAGE_INFO_URL")
                .unwrap_or(defaults.language_info_url),
            sparql_url: lookup("WDAUDIOLEX_SPARQL_URL").unwrap_or(defaults.sparql_url),
            user_agent: lookup("WDAUDIOLEX_USER_AGENT").unwrap_or(defaults.user_agent),
            upstream_timeout,
        })
    }

    pub fn with_language_info_url(mut self, url: impl Into<String>) -> Self {
        self.language_info_url = url.into();
        self
    }

    pub fn with_sparql_url(mut self, url: impl Into<String>) -> Self {
        self.sparql_url = url.into();
        self
    }

    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = Some(timeout);
        self
    }
}
