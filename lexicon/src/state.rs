use dictionary::Entry;

pub const NOT_FOUND_MESSAGE: &str = "Word not found. Please try another word.";
pub const LOOKUP_FAILED_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Entry>),
    Failure(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub query: String,
    pub phase: LookupState,
}

impl Session {
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// The query as it would be sent, `None` when there is nothing to send.
    pub fn trimmed_query(&self) -> Option<&str> {
        let query = self.query.trim();
        (!query.is_empty()).then_some(query)
    }
}
