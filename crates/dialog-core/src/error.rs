//! Error Types

use thiserror::Error;

/// Result type alias for dialog operations
pub type Result<T> = std::result::Result<T, DialogError>;

/// Errors that abort a whole invocation.
///
/// Anything the user can fix (bad slot values, unknown choices) is answered
/// with a dialog response instead and never shows up here.
#[derive(Error, Debug)]
pub enum DialogError {
    /// No handler registered for the requested intent
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// Wire (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DialogError {
    /// Machine-readable code for error bodies
    pub fn code(&self) -> &'static str {
        match self {
            DialogError::UnsupportedIntent(_) => "UNSUPPORTED_INTENT",
            DialogError::Json(_) => "INVALID_REQUEST",
        }
    }

    /// Convert to a message that is safe to hand back to the caller
    pub fn user_message(&self) -> String {
        match self {
            DialogError::UnsupportedIntent(name) => {
                format!("The intent '{}' is not supported by this bot.", name)
            }
            DialogError::Json(_) => "The request could not be parsed.".into(),
        }
    }
}
