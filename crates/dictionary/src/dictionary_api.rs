// https://dictionaryapi.dev/ - free, no key, english entries with wiktionary sources

use reqwest::StatusCode;

use crate::{DictionaryError, Entry};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub(crate) fn entry_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    )
}

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<Entry>, DictionaryError> {
    let url = entry_url(base_url, word);
    tracing::debug!(%url, "requesting dictionary entries");
    let res = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    tracing::debug!(%status, "dictionary responded");
    // unknown words come back as a 404 with a json "title", the body is ignored then
    let body = res.bytes().await.map_err(DictionaryError::Fetch)?;
    interpret_response(status, &body)
}

/// Turns a raw response into entries. Every non-success status counts as
/// "not found", whatever the code.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<Vec<Entry>, DictionaryError> {
    if !status.is_success() {
        return Err(DictionaryError::NotFound { status });
    }
    serde_json::from_slice::<Vec<Entry>>(body).map_err(DictionaryError::Deserialize)
}
