use crate::apply::{ActionOutcome, ActionReport};
use crate::cancel::CancelToken;
use crate::history::{History, HistoryEntry};
use crate::options::Options;
use serde::Serialize;
use std::fs;

/// What an undo run restored, action by action.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UndoReport {
    pub actions: Vec<ActionReport>,
    pub restored: usize,
    pub failed: usize,
    /// There was no history entry to undo.
    pub nothing_to_undo: bool,
    pub cancelled: bool,
    pub halted: bool,
}

impl UndoReport {
    pub fn summary(&self) -> String {
        if self.nothing_to_undo {
            return "nothing to undo".to_string();
        }
        let mut summary = format!("{} restored, {} failed", self.restored, self.failed);
        if self.cancelled {
            summary.push_str(" (cancelled)");
        }
        if self.halted {
            summary.push_str(" (stopped on error)");
        }
        summary
    }
}

/// Replay a history entry in reverse, renaming each new path back to its
/// old one.
///
/// Reversing the recorded order is sufficient to undo the commit's depth
/// ordering: the last rename applied is the first undone, so ancestor
/// renames are reverted before the child paths recorded beneath them are
/// needed again. Per-action errors are logged and skipped unless
/// auto-stop is set; the stop token is polled between actions.
pub fn undo_entry(entry: &HistoryEntry, options: &Options, cancel: &CancelToken) -> UndoReport {
    let mut report = UndoReport::default();

    for (old, new) in entry.renames.iter().rev() {
        if cancel.is_cancelled() {
            log::info!("undo cancelled after {} renames", report.restored);
            report.cancelled = true;
            break;
        }

        match fs::rename(new, old) {
            Ok(()) => {
                report.restored += 1;
                report.actions.push(ActionReport {
                    from: new.clone(),
                    to: old.clone(),
                    outcome: ActionOutcome::Applied,
                    error: None,
                });
            },
            Err(e) => {
                log::warn!(
                    "undo rename failed: {} -> {}: {}",
                    new.display(),
                    old.display(),
                    e
                );
                report.failed += 1;
                report.actions.push(ActionReport {
                    from: new.clone(),
                    to: old.clone(),
                    outcome: ActionOutcome::Failed,
                    error: Some(e.to_string()),
                });
                if options.auto_stop {
                    report.halted = true;
                    break;
                }
            },
        }
    }

    report
}

/// Pop the most recent history entry and undo it. An empty history is a
/// reported no-op, not an error.
pub fn undo_last(history: &mut History, options: &Options, cancel: &CancelToken) -> UndoReport {
    match history.pop() {
        Some(entry) => undo_entry(&entry, options, cancel),
        None => {
            log::warn!("undo requested with empty history");
            UndoReport {
                nothing_to_undo: true,
                ..UndoReport::default()
            }
        },
    }
}
