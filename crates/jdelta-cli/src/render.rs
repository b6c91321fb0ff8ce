use colored::{ColoredString, Colorize};
use jdelta_diff::{DiffKind, DiffReport, DiffSummary};
use serde::Serialize;

fn paint(kind: DiffKind, text: &str) -> ColoredString {
    match kind {
        DiffKind::Added => text.green(),
        DiffKind::Removed => text.red(),
        DiffKind::Changed => text.yellow(),
        DiffKind::Type => text.magenta(),
        DiffKind::Length => text.cyan(),
    }
}

/// One line per difference: the kind padded to seven columns, then the message.
pub fn render_text(report: &DiffReport) -> String {
    if report.is_empty() {
        return format!("{} No differences found.\n", "✔".green());
    }
    let mut out = String::new();
    for d in report {
        let kind = format!("{:<7}", d.kind.as_str());
        out.push_str(&format!("{} {}\n", paint(d.kind, &kind), d.message));
    }
    out
}

/// Non-zero counts in report order, e.g. `3 differences: 2 REMOVED, 1 ADDED`.
pub fn render_summary(summary: &DiffSummary) -> String {
    let total = summary.total();
    let noun = if total == 1 { "difference" } else { "differences" };
    let parts: Vec<String> = DiffKind::ALL
        .iter()
        .filter(|kind| summary.get(**kind) > 0)
        .map(|kind| format!("{} {}", summary.get(*kind), paint(*kind, kind.as_str())))
        .collect();
    if parts.is_empty() {
        format!("{total} {noun}")
    } else {
        format!("{total} {noun}: {}", parts.join(", "))
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    differences: &'a DiffReport,
    summary: DiffSummary,
}

/// The report as a JSON array of `{kind, path, message}` records, or an
/// object with `differences` and `summary` when `with_summary` is set.
pub fn render_json(report: &DiffReport, with_summary: bool) -> serde_json::Result<String> {
    if with_summary {
        serde_json::to_string_pretty(&JsonOutput {
            differences: report,
            summary: report.summary(),
        })
    } else {
        serde_json::to_string_pretty(report)
    }
}
