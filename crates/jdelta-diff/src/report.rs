//! Difference records and the report that collects them.

use std::fmt;

use jdelta_types::Path;
use serde::{Deserialize, Serialize};

/// Classification of a single difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiffKind {
    /// Different shapes or incompatible scalar subtypes. Nothing below is compared.
    Type,
    /// Same subtype, different value; or differing scalar multisets in relaxed mode.
    Changed,
    /// Present only in the first document.
    Removed,
    /// Present only in the second document.
    Added,
    /// Two sequences of different length.
    Length,
}

impl DiffKind {
    /// Every kind, in report order.
    pub const ALL: [DiffKind; 5] = [
        DiffKind::Type,
        DiffKind::Changed,
        DiffKind::Removed,
        DiffKind::Added,
        DiffKind::Length,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Type => "TYPE",
            DiffKind::Changed => "CHANGED",
            DiffKind::Removed => "REMOVED",
            DiffKind::Added => "ADDED",
            DiffKind::Length => "LENGTH",
        }
    }

    /// The kind the same difference gets when the documents are swapped.
    pub fn mirrored(&self) -> DiffKind {
        match self {
            DiffKind::Removed => DiffKind::Added,
            DiffKind::Added => DiffKind::Removed,
            other => *other,
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported discrepancy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    pub kind: DiffKind,
    pub path: Path,
    /// Human-readable description, starting with the rendered path.
    pub message: String,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.message)
    }
}

/// The ordered result of a comparison. Empty means structurally equivalent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffReport {
    pub differences: Vec<Difference>,
}

impl DiffReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.differences.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Difference> {
        self.differences.iter()
    }

    /// Number of differences of one kind.
    pub fn count(&self, kind: DiffKind) -> usize {
        self.differences.iter().filter(|d| d.kind == kind).count()
    }

    /// Differences of one kind, in emission order.
    pub fn of_kind(&self, kind: DiffKind) -> impl Iterator<Item = &Difference> {
        self.differences.iter().filter(move |d| d.kind == kind)
    }

    /// Per-kind counts.
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for d in &self.differences {
            match d.kind {
                DiffKind::Type => summary.type_mismatches += 1,
                DiffKind::Changed => summary.changed += 1,
                DiffKind::Removed => summary.removed += 1,
                DiffKind::Added => summary.added += 1,
                DiffKind::Length => summary.length += 1,
            }
        }
        summary
    }
}

impl From<Vec<Difference>> for DiffReport {
    fn from(differences: Vec<Difference>) -> Self {
        Self { differences }
    }
}

impl IntoIterator for DiffReport {
    type Item = Difference;
    type IntoIter = std::vec::IntoIter<Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.differences.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffReport {
    type Item = &'a Difference;
    type IntoIter = std::slice::Iter<'a, Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.differences.iter()
    }
}

/// Difference counts by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub type_mismatches: usize,
    pub changed: usize,
    pub removed: usize,
    pub added: usize,
    pub length: usize,
}

impl DiffSummary {
    pub fn total(&self) -> usize {
        self.type_mismatches + self.changed + self.removed + self.added + self.length
    }

    pub fn get(&self, kind: DiffKind) -> usize {
        match kind {
            DiffKind::Type => self.type_mismatches,
            DiffKind::Changed => self.changed,
            DiffKind::Removed => self.removed,
            DiffKind::Added => self.added,
            DiffKind::Length => self.length,
        }
    }
}
