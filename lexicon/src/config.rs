use std::env;
use std::time::Duration;

use dictionary::DICTIONARY_API_URL;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    /// Unset means requests wait as long as the server takes
    pub timeout: Option<Duration>,
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = var("LEXICON_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DICTIONARY_API_URL.to_string());

        let timeout = var("LEXICON_TIMEOUT_SECONDS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs);

        let log_filter =
            var("LEXICON_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Config {
            api_url,
            timeout,
            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
