use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::Encoding;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name} is not valid {encoding} at byte {offset}")]
    Decode {
        source_name: String,
        encoding: Encoding,
        offset: usize,
    },

    #[error(
        "parse error in {source_name} at byte {offset} (line {line}, column {column}): {message}; near `{snippet}`"
    )]
    Parse {
        source_name: String,
        offset: usize,
        line: usize,
        column: usize,
        snippet: String,
        message: String,
    },

    #[error("{source_name} nests deeper than {limit} levels at byte {offset}")]
    TooDeep {
        source_name: String,
        limit: usize,
        offset: usize,
    },
}

impl LoadError {
    /// Stable error code: `IO_ERROR`, `DECODE_ERROR`, `PARSE_ERROR` or
    /// `DEPTH_ERROR`.
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "IO_ERROR",
            LoadError::Decode { .. } => "DECODE_ERROR",
            LoadError::Parse { .. } => "PARSE_ERROR",
            LoadError::TooDeep { .. } => "DEPTH_ERROR",
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
