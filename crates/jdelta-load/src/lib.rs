//! Document loading for jdelta.
//!
//! Turns files or in-memory bytes into [`Value`](jdelta_types::Value) trees.
//! Everything that can go wrong before a comparison starts is reported here
//! as a [`LoadError`]: unreadable files, bytes that are not valid in the
//! chosen [`Encoding`], and malformed JSON (with byte offset, line, column
//! and a snippet of the surrounding text), plus documents nested deeper
//! than [`MAX_NESTING`].

pub mod encoding;
pub mod error;
pub mod loader;

pub use encoding::{decode, Encoding};
pub use error::{LoadError, LoadResult};
pub use loader::{load_document, parse_document, Document, MAX_NESTING};
