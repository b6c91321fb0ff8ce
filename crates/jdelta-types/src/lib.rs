//! Foundation types for jdelta.
//!
//! This crate provides the document model and location types shared by the
//! comparator, the loader, and the command-line front end.
//!
//! # Key Types
//!
//! - [`Value`] — One node of a document tree: scalar, sequence, or mapping
//! - [`Scalar`] / [`ScalarType`] — Atomic data and their subtypes
//! - [`Kind`] — The three structural shapes a value can take
//! - [`Path`] / [`Step`] — Canonical location of a node, rendered as `$.a["b c"][3]`

pub mod error;
pub mod path;
pub mod value;

pub use error::PathError;
pub use path::{is_identifier, Path, Step};
pub use value::{Kind, Scalar, ScalarType, Value};
