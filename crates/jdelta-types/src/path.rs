//! Canonical document locations.
//!
//! A [`Path`] is a root-to-leaf list of [`Step`]s. It renders as a single
//! string starting with the `$` root sentinel:
//!
//! - identifier keys as `.name`
//! - any other key as `["name"]`, JSON-escaped
//! - sequence indices as `[N]`
//!
//! Steps remember whether they are keys or indices, so the key `"3"`
//! (`$["3"]`) never collides with index 3 (`$[3]`). The rendered form parses
//! back with [`str::parse`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PathError;
use crate::value::Value;

/// One access step: a mapping key or a sequence index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Key(String),
    Index(usize),
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(name) if is_identifier(name) => write!(f, ".{name}"),
            Step::Key(name) => {
                let quoted = serde_json::to_string(name).map_err(|_| fmt::Error)?;
                write!(f, "[{quoted}]")
            }
            Step::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Returns `true` if `name` can be rendered as a bare `.name` step:
/// non-empty, letters, digits and underscores only, not starting with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Location of a node within a document. The empty path is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// The document root (`$`).
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Same as [`Path::is_root`].
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Number of steps from the root.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn push(&mut self, step: impl Into<Step>) {
        self.steps.push(step.into());
    }

    pub fn pop(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    /// A new path one step below this one.
    pub fn child(&self, step: impl Into<Step>) -> Path {
        let mut steps = self.steps.clone();
        steps.push(step.into());
        Path { steps }
    }

    pub fn parent(&self) -> Option<Path> {
        self.steps
            .split_last()
            .map(|(_, rest)| Path::from_steps(rest.to_vec()))
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Follow the steps from `root`. Returns `None` as soon as a step does
    /// not exist or does not fit the node's shape (key on a sequence, index
    /// on a mapping).
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.steps.iter().try_fold(root, |node, step| match step {
            Step::Key(key) => node.get(key),
            Step::Index(index) => node.at(*index),
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl FromIterator<Step> for Path {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::from_steps(iter.into_iter().collect())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s.strip_prefix('$').ok_or(PathError::MissingRoot)?;
        let mut offset = 1;
        let mut steps = Vec::new();

        while let Some(c) = rest.chars().next() {
            let (step, consumed) = match c {
                '.' => parse_identifier(&rest[1..], offset + 1)?,
                '[' => parse_bracket(&rest[1..], offset + 1)?,
                found => return Err(PathError::UnexpectedChar { offset, found }),
            };
            steps.push(step);
            // Both parsers report what they consumed after the leading '.' / '['.
            rest = &rest[1 + consumed..];
            offset += 1 + consumed;
        }

        Ok(Path { steps })
    }
}

fn parse_identifier(body: &str, offset: usize) -> Result<(Step, usize), PathError> {
    let len = body.find(['.', '[']).unwrap_or(body.len());
    let name = &body[..len];
    if !is_identifier(name) {
        return Err(PathError::InvalidIdentifier { offset });
    }
    Ok((Step::Key(name.to_string()), len))
}

fn parse_bracket(body: &str, offset: usize) -> Result<(Step, usize), PathError> {
    if body.starts_with('"') {
        let end = closing_quote(body).ok_or_else(|| PathError::InvalidKey {
            offset,
            reason: "unterminated string".into(),
        })?;
        let key: String =
            serde_json::from_str(&body[..=end]).map_err(|e| PathError::InvalidKey {
                offset,
                reason: e.to_string(),
            })?;
        expect_close(&body[end + 1..], offset + end + 1)?;
        return Ok((Step::Key(key), end + 2));
    }

    let close = body.find(']').ok_or(PathError::UnexpectedEnd {
        offset: offset + body.len(),
    })?;
    let digits = &body[..close];
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    let index = canonical
        .then(|| digits.parse::<usize>().ok())
        .flatten()
        .ok_or_else(|| PathError::InvalidIndex {
            offset,
            text: digits.to_string(),
        })?;
    Ok((Step::Index(index), close + 1))
}

/// Byte index of the quote closing the JSON string literal that opens `body`.
fn closing_quote(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn expect_close(rest: &str, offset: usize) -> Result<(), PathError> {
    match rest.chars().next() {
        Some(']') => Ok(()),
        Some(found) => Err(PathError::UnexpectedChar { offset, found }),
        None => Err(PathError::UnexpectedEnd { offset }),
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
