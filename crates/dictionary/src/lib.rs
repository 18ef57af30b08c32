use std::time::Duration;

use dictionary_api::{entry_url, get_entries};

mod dictionary;
mod dictionary_api;

pub use dictionary::{Definition, Entry, License, Meaning, PartOfSpeech, Phonetic};
pub use dictionary_api::{interpret_response, DICTIONARY_API_URL};
pub use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary")]
    Fetch(#[source] reqwest::Error),
    #[error("dictionary answered with status {status}")]
    NotFound { status: StatusCode },
    #[error("failed to parse dictionary response")]
    Deserialize(#[source] serde_json::Error),
}

/// Anything that can look a word up. The controller only talks to this.
#[async_trait::async_trait]
pub trait WordLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Vec<Entry>, DictionaryError>;
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DICTIONARY_API_URL.to_owned(),
        }
    }

    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DictionaryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build().map_err(DictionaryError::Fetch)?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn entry_url(&self, word: &str) -> String {
        entry_url(&self.base_url, word)
    }

    pub async fn get_entries(&self, word: &str) -> Result<Vec<Entry>, DictionaryError> {
        get_entries(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WordLookup for Dictionary {
    async fn lookup(&self, word: &str) -> Result<Vec<Entry>, DictionaryError> {
        self.get_entries(word).await
    }
}
