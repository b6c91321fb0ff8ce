//! The comparator: a lock-step walk over two document trees.
//!
//! At each node the walk either reports the node and stops (`TYPE`,
//! `CHANGED`) or descends into the children both sides share. Mapping keys
//! are visited in lexicographic order and sequence elements by ascending
//! index, so the same inputs always yield the same report.

use std::collections::BTreeMap;

use jdelta_types::{Path, Scalar, Step, Value};
use tracing::{debug, warn};

use crate::config::{DiffConfig, ListMode};
use crate::error::{DiffError, DiffResult};
use crate::report::{DiffKind, DiffReport, Difference};

/// Compare two trees with no depth limit and default labels.
///
/// Never fails; use a [`Comparator`] with a depth limit for untrusted,
/// arbitrarily nested input.
pub fn diff_values(left: &Value, right: &Value, mode: ListMode) -> DiffReport {
    let config = DiffConfig::default()
        .with_mode(mode)
        .with_max_depth(None);
    let mut walker = Walker::new(&config);
    walker.walk(left, right);
    DiffReport::from(walker.out)
}

/// Runs comparisons under a fixed [`DiffConfig`].
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    config: DiffConfig,
}

impl Comparator {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare `left` (the first document) against `right` (the second).
    ///
    /// Fails only when the trees nest past `max_depth`; in that case no
    /// partial report is returned.
    pub fn compare(&self, left: &Value, right: &Value) -> DiffResult<DiffReport> {
        let mut walker = Walker::new(&self.config);
        walker.walk(left, right);

        if let Some((limit, path)) = walker.overflow {
            warn!(limit, path = %path, "comparison aborted: depth limit exceeded");
            return Err(DiffError::DepthExceeded { limit, path });
        }

        debug!(
            mode = %self.config.mode,
            differences = walker.out.len(),
            "comparison complete"
        );
        Ok(DiffReport::from(walker.out))
    }
}

/// Single-writer state for one comparison: the current location and the
/// records emitted so far.
struct Walker<'c> {
    config: &'c DiffConfig,
    path: Path,
    out: Vec<Difference>,
    overflow: Option<(usize, Path)>,
}

impl<'c> Walker<'c> {
    fn new(config: &'c DiffConfig) -> Self {
        Self {
            config,
            path: Path::root(),
            out: Vec::new(),
            overflow: None,
        }
    }

    fn walk(&mut self, left: &Value, right: &Value) {
        if self.overflow.is_some() {
            return;
        }
        if let Some(limit) = self.config.max_depth {
            if self.path.len() > limit {
                self.overflow = Some((limit, self.path.clone()));
                return;
            }
        }

        match (left, right) {
            (Value::Scalar(a), Value::Scalar(b)) => self.scalars(a, b),
            (Value::Mapping(a), Value::Mapping(b)) => self.mappings(a, b),
            (Value::Sequence(a), Value::Sequence(b)) => self.sequences(a, b),
            _ => self.type_mismatch(left.type_name(), right.type_name()),
        }
    }

    fn scalars(&mut self, a: &Scalar, b: &Scalar) {
        let (ta, tb) = (a.scalar_type(), b.scalar_type());
        if ta != tb {
            self.type_mismatch(ta.name(), tb.name());
        } else if a != b {
            self.emit(DiffKind::Changed, format!("value differs: {a} → {b}"));
        }
    }

    fn mappings(&mut self, a: &BTreeMap<String, Value>, b: &BTreeMap<String, Value>) {
        for key in a.keys().filter(|k| !b.contains_key(*k)) {
            self.emit_only_in(key.as_str(), DiffKind::Removed);
        }
        for key in b.keys().filter(|k| !a.contains_key(*k)) {
            self.emit_only_in(key.as_str(), DiffKind::Added);
        }
        for (key, av) in a {
            if let Some(bv) = b.get(key) {
                self.descend(key.as_str(), av, bv);
            }
        }
    }

    fn sequences(&mut self, a: &[Value], b: &[Value]) {
        if a.len() != b.len() {
            self.emit(
                DiffKind::Length,
                format!("list length differs: {} vs {}", a.len(), b.len()),
            );
        }

        if self.config.mode == ListMode::Relaxed {
            if let Some(same) = scalar_multisets_equal(a, b) {
                if !same {
                    self.emit(
                        DiffKind::Changed,
                        "list items differ (order-insensitive)".to_string(),
                    );
                }
                return;
            }
        }

        self.pairwise(a, b);
    }

    /// Index-by-index comparison up to the shorter length, then the longer
    /// side's tail reported element by element.
    fn pairwise(&mut self, a: &[Value], b: &[Value]) {
        for (index, (av, bv)) in a.iter().zip(b).enumerate() {
            self.descend(index, av, bv);
        }
        let shared = a.len().min(b.len());
        for index in shared..a.len() {
            self.emit_only_in(index, DiffKind::Removed);
        }
        for index in shared..b.len() {
            self.emit_only_in(index, DiffKind::Added);
        }
    }

    fn descend(&mut self, step: impl Into<Step>, a: &Value, b: &Value) {
        self.path.push(step);
        self.walk(a, b);
        self.path.pop();
    }

    fn type_mismatch(&mut self, a: &str, b: &str) {
        self.emit(DiffKind::Type, format!("type differs: {a} vs {b}"));
    }

    fn emit_only_in(&mut self, step: impl Into<Step>, kind: DiffKind) {
        let label = match kind {
            DiffKind::Added => &self.config.right_label,
            _ => &self.config.left_label,
        };
        let detail = format!("present only in {label}");
        self.path.push(step);
        self.emit(kind, detail);
        self.path.pop();
    }

    fn emit(&mut self, kind: DiffKind, detail: String) {
        let path = self.path.clone();
        let message = format!("{path} {detail}");
        self.out.push(Difference { kind, path, message });
    }
}

/// Compares two sequences as unordered multisets of scalars.
///
/// Returns `None` when the multiset view does not apply: some element is a
/// container, or the scalars span subtypes with no shared order (text and
/// numbers, say). Callers then fall back to pairwise comparison, which
/// reports such pairs as `TYPE`.
fn scalar_multisets_equal(a: &[Value], b: &[Value]) -> Option<bool> {
    let mut left: Vec<&Scalar> = a.iter().map(Value::as_scalar).collect::<Option<_>>()?;
    let mut right: Vec<&Scalar> = b.iter().map(Value::as_scalar).collect::<Option<_>>()?;

    if let Some(first) = left.iter().chain(&right).next() {
        let family = first.scalar_type();
        if !left
            .iter()
            .chain(&right)
            .all(|s| s.scalar_type().shares_order_with(family))
        {
            return None;
        }
    }

    // All scalars share one order family here, so natural_cmp is total.
    left.sort_by(|x, y| x.natural_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    right.sort_by(|x, y| x.natural_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    Some(left == right)
}
