use anyhow::Context;
use colored::Colorize;
use jdelta_diff::Comparator;
use jdelta_load::{load_document, LoadError};

use crate::cli::*;
use crate::config::CliConfig;
use crate::render::{render_json, render_summary, render_text};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    if !config.color(cli.no_color) {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Compare(args) => cmd_compare(&config, cli.format, args),
        Command::Check(args) => cmd_check(&config, args),
    }
}

/// Process exit status for a failed run: 1 for unreadable input, 2 for
/// input that does not decode, parse or fit the nesting limit, 3 for
/// anything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::Io { .. }) => 1,
        Some(LoadError::Decode { .. } | LoadError::Parse { .. } | LoadError::TooDeep { .. }) => 2,
        None => 3,
    }
}

fn cmd_compare(
    config: &CliConfig,
    format: Option<OutputFormat>,
    args: CompareArgs,
) -> anyhow::Result<()> {
    let encoding = config.encoding(args.encoding.map(Into::into));
    let left = load_document(&args.left, encoding)?;
    let right = load_document(&args.right, encoding)?;

    let comparator = Comparator::new(config.diff_config(&args, &left.name, &right.name));
    let report = comparator
        .compare(&left.root, &right.root)
        .with_context(|| format!("comparing {} with {}", left.name, right.name))?;

    let summary = config.summary(args.summary);
    match config.format(format) {
        OutputFormat::Text => {
            print!("{}", render_text(&report));
            if summary && !report.is_empty() {
                println!("{}", render_summary(&report.summary()));
            }
        }
        OutputFormat::Json => println!("{}", render_json(&report, summary)?),
    }
    Ok(())
}

fn cmd_check(config: &CliConfig, args: CheckArgs) -> anyhow::Result<()> {
    let encoding = config.encoding(args.encoding.map(Into::into));
    for path in &args.files {
        let doc = load_document(path, encoding)?;
        println!(
            "{} {} ({}, depth {})",
            "✓".green().bold(),
            doc.name.as_str().bold(),
            doc.root.type_name(),
            doc.root.depth()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use jdelta_diff::DiffError;

    #[test]
    fn exit_codes_follow_error_kind() {
        let io = anyhow::Error::new(LoadError::Io {
            path: PathBuf::from("x.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(exit_code(&io), 1);

        let parse = anyhow::Error::new(LoadError::Parse {
            source_name: "x.json".into(),
            offset: 0,
            line: 1,
            column: 0,
            snippet: String::new(),
            message: "EOF while parsing a value".into(),
        });
        assert_eq!(exit_code(&parse), 2);

        let nested = anyhow::Error::new(LoadError::TooDeep {
            source_name: "x.json".into(),
            limit: 4096,
            offset: 4096,
        });
        assert_eq!(exit_code(&nested), 2);

        let depth = anyhow::Error::new(DiffError::DepthExceeded {
            limit: 1,
            path: "$.a.b".parse().unwrap(),
        });
        assert_eq!(exit_code(&depth), 3);
        assert_eq!(exit_code(&anyhow::anyhow!("other")), 3);
    }
}
