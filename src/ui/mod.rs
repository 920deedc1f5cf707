//! Run report output

use crate::types::{CopyOutcome, EntryReport, RunReport};
use console::style;

/// Print one line per entry, in processing order, then the summary line.
pub fn print_report(report: &RunReport) {
    for entry in &report.entries {
        println!("  {}", styled_entry_line(entry));
    }
    println!();
    println!("{}", format_summary(report));
}

fn styled_entry_line(entry: &EntryReport) -> String {
    let tag = match &entry.outcome {
        CopyOutcome::Copied => style("[OK]").green(),
        CopyOutcome::Skipped(_) => style("[SKIP]").yellow(),
        CopyOutcome::Failed(_) => style("[FAIL]").red(),
    };
    match entry.outcome.reason() {
        Some(reason) => format!("{} {}: {}", tag, entry.entry, reason),
        None => format!("{} {}", tag, entry.entry),
    }
}

/// Plain (unstyled) entry line, used by tests and non-tty consumers
pub fn format_entry_line(entry: &EntryReport) -> String {
    match entry.outcome.reason() {
        Some(reason) => format!("[{}] {}: {}", entry.outcome.tag(), entry.entry, reason),
        None => format!("[{}] {}", entry.outcome.tag(), entry.entry),
    }
}

/// Summary line for a completed run
pub fn format_summary(report: &RunReport) -> String {
    format!(
        "{} copied, {} skipped, {} failed",
        report.copied(),
        report.skipped(),
        report.failed()
    )
}
