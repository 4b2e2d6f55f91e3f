//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gateway returned {status}: {body}")]
    Gateway { status: u16, body: String },

    #[error("invalid gateway response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected gateway response shape: expected {expected}")]
    UnexpectedShape { expected: &'static str },

    #[error("row not found")]
    NotFound,

    #[error("configuration error: {0}")]
    Config(String),
}
