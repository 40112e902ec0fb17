use crate::apply::{commit_previews, CommitReport};
use crate::cancel::CancelToken;
use crate::history::History;
use crate::options::Options;
use crate::preview::build_previews;
use crate::walk::enumerate;
use anyhow::{Context, Result};
use std::path::Path;

/// One full operation cycle: enumerate the working directory, build the
/// previews and commit (or simulate) the renames.
pub fn rename_operation(
    root: &Path,
    match_pattern: &str,
    replace_pattern: Option<&str>,
    options: &Options,
    cancel: &CancelToken,
    history: &mut History,
) -> Result<CommitReport> {
    let targets = enumerate(root, options, cancel)
        .with_context(|| format!("failed to enumerate {}", root.display()))?;
    log::info!("found {} targets in {}", targets.len(), root.display());

    let previews = build_previews(&targets, match_pattern, replace_pattern, options);

    Ok(commit_previews(&previews, options, cancel, history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_full_cycle_glob_rename() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::write(tmp.path().join("keep.log"), "").unwrap();

        let mut history = History::new();
        let report = rename_operation(
            tmp.path(),
            "*.txt",
            Some("*.md"),
            &Options::default(),
            &CancelToken::new(),
            &mut history,
        )
        .unwrap();

        assert_eq!(report.applied, 2);
        assert_eq!(report.skipped, 1); // keep.log unchanged
        assert!(tmp.path().join("a.md").exists());
        assert!(tmp.path().join("b.md").exists());
        assert!(tmp.path().join("keep.log").exists());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_missing_root_surfaces_error() {
        let tmp = TempDir::new().unwrap();
        let mut history = History::new();
        let result = rename_operation(
            &tmp.path().join("gone"),
            "*",
            None,
            &Options::default(),
            &CancelToken::new(),
            &mut history,
        );
        assert!(result.is_err());
    }
}
