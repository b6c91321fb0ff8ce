use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jdelta_diff::ListMode;
use jdelta_load::Encoding;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "jdelta",
    about = "jdelta — structural diff for JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (defaults to ./jdelta.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    Strict,
    Relaxed,
}

impl From<ModeArg> for ListMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Strict => ListMode::Strict,
            ModeArg::Relaxed => ListMode::Relaxed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum EncodingArg {
    Utf8,
    Latin1,
    Windows1252,
}

impl From<EncodingArg> for Encoding {
    fn from(encoding: EncodingArg) -> Self {
        match encoding {
            EncodingArg::Utf8 => Encoding::Utf8,
            EncodingArg::Latin1 => Encoding::Latin1,
            EncodingArg::Windows1252 => Encoding::Windows1252,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two documents and list their differences
    Compare(CompareArgs),
    /// Check that documents can be loaded
    Check(CheckArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Sequence comparison mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Shorthand for --mode relaxed
    #[arg(long, conflicts_with = "mode")]
    pub relaxed: bool,
    #[arg(long, value_enum)]
    pub encoding: Option<EncodingArg>,
    /// Abort when documents nest deeper than this
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Print per-kind counts after the differences
    #[arg(long)]
    pub summary: bool,
}

impl CompareArgs {
    pub fn list_mode(&self) -> Option<ListMode> {
        if self.relaxed {
            Some(ListMode::Relaxed)
        } else {
            self.mode.map(ListMode::from)
        }
    }
}

#[derive(Args)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    #[arg(long, value_enum)]
    pub encoding: Option<EncodingArg>,
}
