//! Editor-level error types.

use thiserror::Error;

/// Failure to reach or write the system clipboard.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(pub String);

/// Errors produced by navbar actions.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The action needs a logged-in user.
    #[error("log in required")]
    Unauthenticated,

    /// A font-style class outside the three supported ones.
    #[error("unknown font style: '{0}'")]
    UnknownFontStyle(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// Transport failure talking to the forms API.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The forms API answered with a non-success status.
    #[error("forms API answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}
