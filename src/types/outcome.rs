//! CopyOutcome - Per-entry results aggregated into a run report

use std::path::PathBuf;

/// Result of processing a single configured entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Entry was copied to its destination
    Copied,

    /// Entry was skipped (e.g. not present in the backup during restore)
    Skipped(String),

    /// Entry failed; the run continued with the next entry
    Failed(String),
}

impl CopyOutcome {
    /// Console tag for this outcome
    pub fn tag(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => "OK",
            CopyOutcome::Skipped(_) => "SKIP",
            CopyOutcome::Failed(_) => "FAIL",
        }
    }

    /// Reason attached to a skip or failure, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            CopyOutcome::Copied => None,
            CopyOutcome::Skipped(reason) | CopyOutcome::Failed(reason) => Some(reason),
        }
    }
}

/// One configured entry paired with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    /// Relative path as declared in the config
    pub entry: String,

    /// What happened to it
    pub outcome: CopyOutcome,
}

/// Aggregated report for one backup or restore pass.
///
/// Entries appear in processing order, which is declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Per-entry outcomes in processing order
    pub entries: Vec<EntryReport>,

    /// Archive produced by this run (backup only)
    pub archive: Option<PathBuf>,
}

impl RunReport {
    /// Record an outcome for an entry
    pub fn record(&mut self, entry: &str, outcome: CopyOutcome) {
        self.entries.push(EntryReport {
            entry: entry.to_string(),
            outcome,
        });
    }

    /// Number of copied entries
    pub fn copied(&self) -> usize {
        self.count(|o| matches!(o, CopyOutcome::Copied))
    }

    /// Number of skipped entries
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, CopyOutcome::Skipped(_)))
    }

    /// Number of failed entries
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CopyOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&CopyOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_tags() {
        assert_eq!(CopyOutcome::Copied.tag(), "OK");
        assert_eq!(CopyOutcome::Skipped("not in backup".to_string()).tag(), "SKIP");
        assert_eq!(CopyOutcome::Failed("boom".to_string()).tag(), "FAIL");
    }

    #[test]
    fn test_outcome_reason() {
        assert_eq!(CopyOutcome::Copied.reason(), None);
        assert_eq!(
            CopyOutcome::Skipped("not in backup".to_string()).reason(),
            Some("not in backup")
        );
        assert_eq!(
            CopyOutcome::Failed("permission denied".to_string()).reason(),
            Some("permission denied")
        );
    }

    #[test]
    fn test_report_counters() {
        let mut report = RunReport::default();
        report.record(".zshrc", CopyOutcome::Copied);
        report.record(".vimrc", CopyOutcome::Failed("missing".to_string()));
        report.record(".npmrc", CopyOutcome::Skipped("not in backup".to_string()));
        report.record(".gitconfig", CopyOutcome::Copied);

        assert_eq!(report.copied(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_report_preserves_order() {
        let mut report = RunReport::default();
        report.record("b", CopyOutcome::Copied);
        report.record("a", CopyOutcome::Copied);
        report.record("c", CopyOutcome::Copied);

        let order: Vec<&str> = report.entries.iter().map(|e| e.entry.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }
}
