use thiserror::Error;

/// Errors produced while decoding or checking a search fragment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchDataError {
    /// Malformed fragment text. Positions are 1-based.
    #[error("syntax error at line {line}, column {column}: {msg}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
    },

    /// An entry with an empty search key.
    #[error("entry {index} has an empty key")]
    EmptyKey { index: usize },

    /// A key that is not lowercase-normalized.
    #[error("key '{0}' is not lowercase")]
    KeyNotLowercase(String),

    /// The same key appears more than once.
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    /// Keys are not in ascending order.
    #[error("key '{second}' sorts before preceding key '{first}'")]
    OutOfOrder { first: String, second: String },

    /// An entry with no link targets.
    #[error("entry '{0}' has no targets")]
    NoTargets(String),

    /// A target URL that fails the syntax or scope checks.
    #[error("invalid url '{url}' in entry '{key}': {reason}")]
    InvalidUrl {
        key: String,
        url: String,
        reason: String,
    },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SearchDataError {
    fn from(err: std::io::Error) -> Self {
        SearchDataError::Io(err.to_string())
    }
}
