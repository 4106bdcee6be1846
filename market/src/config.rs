//! # Client Configuration
//!
//! Runtime settings read from the environment once at startup.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BEP_API_URL` | `http://localhost:8000` |
//! | `BEP_TOKEN_FILE` | `./bep-session.json` |
//! | `BEP_SEARCH_DEBOUNCE_MS` | `500` |
//! | `BEP_NEGOTIATION_DELAY_MS` | `1500` |

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOKEN_FILE: &str = "./bep-session.json";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_NEGOTIATION_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Marketplace API base URL, without trailing slash
    pub api_base_url: String,
    /// Where the access token is persisted
    pub token_path: PathBuf,
    /// Quiet period before a typed search is sent
    pub search_debounce: Duration,
    /// Delay before the negotiation assistant answers
    pub negotiation_reply_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            token_path: PathBuf::from(DEFAULT_TOKEN_FILE),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            negotiation_reply_delay: Duration::from_millis(DEFAULT_NEGOTIATION_DELAY_MS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("BEP_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token_path = lookup("BEP_TOKEN_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE));

        Self {
            api_base_url,
            token_path,
            search_debounce: millis(&lookup, "BEP_SEARCH_DEBOUNCE_MS", DEFAULT_SEARCH_DEBOUNCE_MS),
            negotiation_reply_delay: millis(&lookup, "BEP_NEGOTIATION_DELAY_MS", DEFAULT_NEGOTIATION_DELAY_MS),
        }
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Duration {
    let Some(raw) = lookup(key) else {
        return Duration::from_millis(default);
    };

    match raw.trim().parse::<u64>() {
        Ok(ms) => Duration::from_millis(ms),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, default_ms = default, "Ignoring malformed setting");
            Duration::from_millis(default)
        }
    }
}
