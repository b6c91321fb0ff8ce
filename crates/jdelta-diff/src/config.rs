use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default nesting limit applied by [`DiffConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How two sequences are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Position matters: elements are compared index by index.
    #[default]
    Strict,
    /// Purely scalar sequences are compared as unordered multisets.
    /// Sequences holding containers fall back to strict comparison.
    Relaxed,
}

impl ListMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMode::Strict => "strict",
            ListMode::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ListMode::Strict),
            "relaxed" => Ok(ListMode::Relaxed),
            other => Err(format!("unknown list mode: {other}")),
        }
    }
}

/// Configuration for a comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Sequence comparison policy.
    pub mode: ListMode,
    /// Maximum nesting depth walked before the comparison is aborted.
    /// `None` disables the guard.
    pub max_depth: Option<usize>,
    /// Name of the first document in `REMOVED` messages.
    pub left_label: String,
    /// Name of the second document in `ADDED` messages.
    pub right_label: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            mode: ListMode::Strict,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            left_label: "left".into(),
            right_label: "right".into(),
        }
    }
}

impl DiffConfig {
    /// Default configuration with order-insensitive scalar sequences.
    pub fn relaxed() -> Self {
        Self {
            mode: ListMode::Relaxed,
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: ListMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_label = left.into();
        self.right_label = right.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = DiffConfig::default();
        assert_eq!(c.mode, ListMode::Strict);
        assert_eq!(c.max_depth, Some(DEFAULT_MAX_DEPTH));
        assert_eq!(c.left_label, "left");
        assert_eq!(c.right_label, "right");
    }

    #[test]
    fn builders() {
        let c = DiffConfig::relaxed()
            .with_max_depth(None)
            .with_labels("a.json", "b.json");
        assert_eq!(c.mode, ListMode::Relaxed);
        assert!(c.max_depth.is_none());
        assert_eq!(c.left_label, "a.json");
        assert_eq!(c.right_label, "b.json");
    }

    #[test]
    fn list_mode_parsing() {
        assert_eq!("strict".parse::<ListMode>(), Ok(ListMode::Strict));
        assert_eq!("Relaxed".parse::<ListMode>(), Ok(ListMode::Relaxed));
        assert!("loose".parse::<ListMode>().is_err());
        assert_eq!(ListMode::Relaxed.to_string(), "relaxed");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let c: DiffConfig = serde_json::from_str(r#"{"mode": "relaxed"}"#).unwrap();
        assert_eq!(c.mode, ListMode::Relaxed);
        assert_eq!(c.max_depth, Some(DEFAULT_MAX_DEPTH));
        assert_eq!(c.left_label, "left");
    }
}
