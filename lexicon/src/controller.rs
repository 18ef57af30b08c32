use dictionary::{DictionaryError, WordLookup};
use tokio::sync::watch;

use crate::state::{LookupState, Session, LOOKUP_FAILED_MESSAGE, NOT_FOUND_MESSAGE};

// Only the controller writes the session; every transition is one send_modify
// so receivers never see half of one.
pub struct LookupController<D> {
    dictionary: D,
    state: watch::Sender<Session>,
}

impl<D: WordLookup> LookupController<D> {
    pub fn new(dictionary: D) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self { dictionary, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn update_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|session| {
            session.query = text;
            if matches!(
                session.phase,
                LookupState::Success(_) | LookupState::Failure(_)
            ) {
                session.phase = LookupState::Idle;
            }
        });
    }

    /// Looks up the trimmed query. Does nothing when the query is blank or a
    /// lookup is already running.
    pub async fn submit(&self) {
        let mut word = None;
        self.state.send_if_modified(|session| {
            if session.is_loading() {
                return false;
            }
            let Some(query) = session.trimmed_query() else {
                return false;
            };
            word = Some(query.to_owned());
            session.phase = LookupState::Loading;
            true
        });
        let Some(word) = word else {
            tracing::debug!("submit ignored, query is blank or a lookup is running");
            return;
        };

        let _loading = LoadingGuard { state: &self.state };
        tracing::info!(%word, "looking up word");
        let phase = match self.dictionary.lookup(&word).await {
            Ok(entries) => {
                tracing::info!(%word, entries = entries.len(), "lookup succeeded");
                LookupState::Success(entries)
            }
            Err(DictionaryError::NotFound { status }) => {
                tracing::info!(%word, %status, "word not found");
                LookupState::Failure(NOT_FOUND_MESSAGE.to_owned())
            }
            Err(error) => {
                tracing::warn!(%word, error = ?error, "lookup failed");
                LookupState::Failure(LOOKUP_FAILED_MESSAGE.to_owned())
            }
        };
        let found = matches!(phase, LookupState::Success(_));
        self.state.send_modify(|session| {
            if found {
                session.query.clear();
            }
            session.phase = phase;
        });
    }
}

// resets Loading even when the submit future is dropped mid-request
struct LoadingGuard<'a> {
    state: &'a watch::Sender<Session>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|session| {
            if !session.is_loading() {
                return false;
            }
            tracing::debug!("lookup abandoned, leaving loading state");
            session.phase = LookupState::Idle;
            true
        });
    }
}
