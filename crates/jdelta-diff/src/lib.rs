//! Structural diff engine for jdelta.
//!
//! Walks two document trees in lock-step and reports every place where they
//! disagree, classified by [`DiffKind`] and anchored to a canonical
//! [`Path`](jdelta_types::Path).
//!
//! # Key Types
//!
//! - [`Comparator`] / [`diff_values`] -- Run a comparison
//! - [`DiffConfig`] / [`ListMode`] -- Strict or order-insensitive sequence handling, depth limit, labels
//! - [`DiffReport`] / [`Difference`] / [`DiffKind`] -- Ordered, classified output
//!
//! # Example
//!
//! ```
//! use jdelta_diff::{diff_values, DiffKind, ListMode};
//! use jdelta_types::Value;
//!
//! let left = Value::from(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
//! let right = Value::from(vec![Value::from(1i64), Value::from(2i64)]);
//!
//! let report = diff_values(&left, &right, ListMode::Strict);
//! assert_eq!(report.count(DiffKind::Length), 1);
//! assert_eq!(report.differences[1].path.to_string(), "$[2]");
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod report;

pub use compare::{diff_values, Comparator};
pub use config::{DiffConfig, ListMode, DEFAULT_MAX_DEPTH};
pub use error::{DiffError, DiffResult};
pub use report::{DiffKind, DiffReport, DiffSummary, Difference};
