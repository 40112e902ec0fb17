use crate::cancel::CancelToken;
use crate::history::{History, HistoryEntry};
use crate::options::Options;
use crate::preview::Preview;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a single rename action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionOutcome {
    Applied,
    SkippedExists,
    SkippedUnchanged,
    Failed,
}

/// Per-action record in a commit or undo report.
#[derive(Debug, Clone, Serialize)]
pub struct ActionReport {
    pub from: PathBuf,
    pub to: PathBuf,
    pub outcome: ActionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What a commit run did (or, when simulating, would do), action by
/// action, with summary counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommitReport {
    pub actions: Vec<ActionReport>,
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
    pub simulated: bool,
    /// The stop token was set mid-batch.
    pub cancelled: bool,
    /// A failure stopped the batch because auto-stop is set.
    pub halted: bool,
}

impl CommitReport {
    fn record(&mut self, from: PathBuf, to: PathBuf, outcome: ActionOutcome, error: Option<String>) {
        match outcome {
            ActionOutcome::Applied => self.applied += 1,
            ActionOutcome::SkippedExists | ActionOutcome::SkippedUnchanged => self.skipped += 1,
            ActionOutcome::Failed => self.failed += 1,
        }
        self.actions.push(ActionReport {
            from,
            to,
            outcome,
            error,
        });
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} applied, {} skipped, {} failed",
            self.applied, self.skipped, self.failed
        );
        if self.simulated {
            summary.push_str(" (simulated)");
        }
        if self.cancelled {
            summary.push_str(" (cancelled)");
        }
        if self.halted {
            summary.push_str(" (stopped on error)");
        }
        summary
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Execute the renames described by `previews`.
///
/// Actions run in descending depth order of the old path, so entries
/// inside a soon-to-be-renamed directory move before their ancestors and
/// no recorded path is invalidated mid-batch. In simulate mode nothing
/// touches the filesystem but the ordered action list is still reported.
/// The stop token is polled between actions; cancellation keeps the
/// already-applied subset. The applied actions are pushed onto `history`
/// as one entry (never in simulate mode, never when empty).
pub fn commit_previews(
    previews: &[Preview],
    options: &Options,
    cancel: &CancelToken,
    history: &mut History,
) -> CommitReport {
    let mut report = CommitReport {
        simulated: options.simulate,
        ..CommitReport::default()
    };

    let mut actions: Vec<(PathBuf, PathBuf)> = Vec::new();
    for preview in previews {
        let to = destination(&preview.path, &preview.new_name);
        if to == preview.path {
            report.record(
                preview.path.clone(),
                to,
                ActionOutcome::SkippedUnchanged,
                None,
            );
        } else {
            actions.push((preview.path.clone(), to));
        }
    }

    // Deepest old paths first; ties broken by path for a stable order.
    actions.sort_by(|a, b| {
        b.0.components()
            .count()
            .cmp(&a.0.components().count())
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut applied: Vec<(PathBuf, PathBuf)> = Vec::new();
    for (from, to) in actions {
        if cancel.is_cancelled() {
            log::info!("commit cancelled after {} renames", applied.len());
            report.cancelled = true;
            break;
        }

        if options.no_clobber && to.exists() {
            log::warn!("destination exists, skipping: {}", to.display());
            report.record(from, to, ActionOutcome::SkippedExists, None);
            continue;
        }

        if options.simulate {
            report.record(from, to, ActionOutcome::Applied, None);
            continue;
        }

        match fs::rename(&from, &to) {
            Ok(()) => {
                applied.push((from.clone(), to.clone()));
                report.record(from, to, ActionOutcome::Applied, None);
            },
            Err(e) => {
                log::warn!(
                    "rename failed: {} -> {}: {}",
                    from.display(),
                    to.display(),
                    e
                );
                report.record(from, to, ActionOutcome::Failed, Some(e.to_string()));
                if options.auto_stop {
                    report.halted = true;
                    break;
                }
            },
        }
    }

    if !options.simulate && !applied.is_empty() {
        history.push(HistoryEntry::new(applied));
    }

    report
}

/// New full path for a preview: the new name under the old parent.
fn destination(path: &Path, new_name: &str) -> PathBuf {
    path.parent().map_or_else(
        || PathBuf::from(new_name),
        |parent| parent.join(new_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn preview(path: PathBuf, new_name: &str) -> Preview {
        Preview {
            path,
            new_name: new_name.to_string(),
        }
    }

    #[test]
    fn test_children_rename_before_parent_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("old_dir");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("old.txt"), "x").unwrap();

        let previews = vec![
            preview(dir.clone(), "new_dir"),
            preview(dir.join("old.txt"), "new.txt"),
        ];

        let mut history = History::new();
        let report = commit_previews(
            &previews,
            &Options::default(),
            &CancelToken::new(),
            &mut history,
        );

        assert_eq!(report.applied, 2);
        assert_eq!(report.failed, 0);
        assert!(tmp.path().join("new_dir/new.txt").exists());

        // The file action ran first: the recorded order is deepest-first
        let entry = history.last().unwrap();
        assert_eq!(entry.renames[0].0, dir.join("old.txt"));
        assert_eq!(entry.renames[1].0, dir);
    }

    #[test]
    fn test_unchanged_names_are_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("same.txt"), "x").unwrap();

        let previews = vec![preview(tmp.path().join("same.txt"), "same.txt")];
        let mut history = History::new();
        let report = commit_previews(
            &previews,
            &Options::default(),
            &CancelToken::new(),
            &mut history,
        );

        assert_eq!(report.applied, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.actions[0].outcome, ActionOutcome::SkippedUnchanged);
        assert!(history.is_empty());
    }

    #[test]
    fn test_no_clobber_skips_existing_destination() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();

        let mut options = Options::default();
        options.no_clobber = true;
        let previews = vec![preview(tmp.path().join("a.txt"), "b.txt")];
        let mut history = History::new();
        let report = commit_previews(&previews, &options, &CancelToken::new(), &mut history);

        assert_eq!(report.applied, 0);
        assert_eq!(report.actions[0].outcome, ActionOutcome::SkippedExists);
        assert_eq!(fs::read_to_string(tmp.path().join("b.txt")).unwrap(), "b");
        assert!(history.is_empty());
    }

    #[test]
    fn test_simulate_touches_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "x").unwrap();

        let mut options = Options::default();
        options.simulate = true;
        let previews = vec![preview(tmp.path().join("a.txt"), "b.txt")];
        let mut history = History::new();
        let report = commit_previews(&previews, &options, &CancelToken::new(), &mut history);

        assert!(report.simulated);
        assert_eq!(report.applied, 1);
        assert!(tmp.path().join("a.txt").exists());
        assert!(!tmp.path().join("b.txt").exists());
        assert!(history.is_empty());
    }

    #[test]
    fn test_missing_source_fails_and_continues() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("real.txt"), "x").unwrap();

        let previews = vec![
            preview(tmp.path().join("ghost.txt"), "other.txt"),
            preview(tmp.path().join("real.txt"), "renamed.txt"),
        ];
        let mut history = History::new();
        let report = commit_previews(
            &previews,
            &Options::default(),
            &CancelToken::new(),
            &mut history,
        );

        assert_eq!(report.failed, 1);
        assert_eq!(report.applied, 1);
        assert!(!report.halted);
        assert!(tmp.path().join("renamed.txt").exists());
        assert_eq!(history.last().unwrap().renames.len(), 1);
    }

    #[test]
    fn test_auto_stop_halts_on_first_failure() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("real.txt"), "x").unwrap();

        let mut options = Options::default();
        options.auto_stop = true;
        let previews = vec![
            preview(tmp.path().join("aaa-ghost.txt"), "other.txt"),
            preview(tmp.path().join("real.txt"), "renamed.txt"),
        ];
        let mut history = History::new();
        let report = commit_previews(&previews, &options, &CancelToken::new(), &mut history);

        assert!(report.halted);
        assert_eq!(report.failed, 1);
        assert_eq!(report.applied, 0);
        assert!(tmp.path().join("real.txt").exists());
    }

    #[test]
    fn test_cancelled_batch_records_applied_subset() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "x").unwrap();

        let cancel = CancelToken::new();
        cancel.cancel();
        let previews = vec![preview(tmp.path().join("a.txt"), "b.txt")];
        let mut history = History::new();
        let report = commit_previews(&previews, &Options::default(), &cancel, &mut history);

        assert!(report.cancelled);
        assert_eq!(report.applied, 0);
        assert!(tmp.path().join("a.txt").exists());
        assert!(history.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let report = CommitReport {
            applied: 3,
            skipped: 1,
            failed: 0,
            simulated: true,
            ..CommitReport::default()
        };
        assert_eq!(report.summary(), "3 applied, 1 skipped, 0 failed (simulated)");
    }
}
