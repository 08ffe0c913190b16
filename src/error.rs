use thiserror::Error;

/// Errors surfaced by the compatibility engine
///
/// All of these are precondition violations on the caller's input. An empty
/// result is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Invalid candidate {id:?}: {reason}")]
    InvalidCandidate { id: String, reason: String },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid value {value:?} for {attribute}")]
    InvalidValue {
        attribute: &'static str,
        value: String,
    },
}

impl EngineError {
    pub fn invalid_candidate(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCandidate {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
