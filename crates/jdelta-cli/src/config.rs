//! `jdelta.toml` configuration.
//!
//! ```toml
//! [diff]
//! mode = "relaxed"
//! max_depth = 256
//! left_label = "expected"
//! right_label = "actual"
//!
//! [input]
//! encoding = "windows1252"
//!
//! [output]
//! format = "json"
//! color = false
//! summary = true
//! ```
//!
//! Every key is optional; command-line flags win over the file.

use std::path::{Path, PathBuf};

use jdelta_diff::{DiffConfig, ListMode};
use jdelta_load::Encoding;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::{CompareArgs, OutputFormat};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "jdelta.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub diff: DiffSection,
    pub input: InputSection,
    pub output: OutputSection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffSection {
    pub mode: Option<ListMode>,
    pub max_depth: Option<usize>,
    pub left_label: Option<String>,
    pub right_label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSection {
    pub encoding: Option<Encoding>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub summary: Option<bool>,
}

impl CliConfig {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else `jdelta.toml` from the working
    /// directory if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_toml(&path, &text)
    }

    /// Comparator settings: flags first, then the file, then defaults.
    /// Labels fall back to the document names.
    pub fn diff_config(
        &self,
        args: &CompareArgs,
        left_name: &str,
        right_name: &str,
    ) -> DiffConfig {
        let defaults = DiffConfig::default();
        DiffConfig {
            mode: args.list_mode().or(self.diff.mode).unwrap_or(defaults.mode),
            max_depth: args.max_depth.or(self.diff.max_depth).or(defaults.max_depth),
            left_label: self
                .diff
                .left_label
                .clone()
                .unwrap_or_else(|| left_name.to_string()),
            right_label: self
                .diff
                .right_label
                .clone()
                .unwrap_or_else(|| right_name.to_string()),
        }
    }

    pub fn encoding(&self, flag: Option<Encoding>) -> Encoding {
        flag.or(self.input.encoding).unwrap_or_default()
    }

    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output.format).unwrap_or(OutputFormat::Text)
    }

    pub fn summary(&self, flag: bool) -> bool {
        flag || self.output.summary.unwrap_or(false)
    }

    /// `false` only when disabled by flag or file.
    pub fn color(&self, no_color_flag: bool) -> bool {
        !no_color_flag && self.output.color.unwrap_or(true)
    }
}
