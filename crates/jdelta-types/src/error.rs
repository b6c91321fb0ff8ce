use thiserror::Error;

/// Errors produced when parsing a rendered path back into steps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path must start with '$'")]
    MissingRoot,

    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    #[error("unexpected end of path at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("invalid identifier at offset {offset}")]
    InvalidIdentifier { offset: usize },

    #[error("invalid sequence index {text:?} at offset {offset}")]
    InvalidIndex { offset: usize, text: String },

    #[error("invalid quoted key at offset {offset}: {reason}")]
    InvalidKey { offset: usize, reason: String },
}
