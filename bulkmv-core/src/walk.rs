use crate::cancel::CancelToken;
use crate::error::WalkError;
use crate::matcher::Matcher;
use crate::options::{Depth, Options};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One enumerated filesystem entry eligible for renaming.
///
/// Produced fresh on every enumeration and never mutated. `ext` keeps its
/// leading dot and is empty for directories; a name whose only dot is the
/// leading one (`.env`) is all stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Directory containing the entry.
    pub dir: PathBuf,
    pub stem: String,
    pub ext: String,
    pub kind: TargetKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Dir,
    File,
}

impl Target {
    /// Build a target from a bare name, splitting files at the last dot.
    pub fn from_name(dir: PathBuf, name: &str, kind: TargetKind) -> Self {
        let (stem, ext) = match kind {
            TargetKind::Dir => (name.to_string(), String::new()),
            TargetKind::File => split_name(name),
        };
        Self { dir, stem, ext, kind }
    }

    /// The entry's name as enumerated.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.ext)
    }

    /// The full original path of the entry.
    pub fn path(&self) -> PathBuf {
        self.dir.join(self.file_name())
    }
}

/// Split a file name into `(stem, extension)` at the last dot. The
/// extension keeps its dot; a leading dot belongs to the stem, so hidden
/// names like `.env` stay whole.
pub fn split_name(name: &str) -> (String, String) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (name[..idx].to_string(), name[idx..].to_string()),
        _ => (name.to_string(), String::new()),
    }
}

/// Walk `root` to the configured depth and return the matching entries in
/// a stable order: within each directory, subdirectories before files,
/// each group name-sorted.
///
/// Unreadable subtrees are logged and skipped. The cancel token is polled
/// as the walk proceeds; on cancellation the entries collected so far are
/// returned. Only a missing or non-directory root is a hard error.
pub fn enumerate(
    root: &Path,
    options: &Options,
    cancel: &CancelToken,
) -> Result<Vec<Target>, WalkError> {
    if !root.exists() {
        return Err(WalkError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let matcher = Matcher::new(options);

    let mut walker = WalkDir::new(root).min_depth(1).sort_by(|a, b| {
        b.file_type()
            .is_dir()
            .cmp(&a.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });
    if let Depth::Levels(levels) = options.effective_depth() {
        walker = walker.max_depth(levels + 1);
    }

    let mut targets = Vec::new();
    let mut it = walker.into_iter();
    while let Some(entry) = it.next() {
        // Polled per entry, the walk's natural boundary.
        if cancel.is_cancelled() {
            log::info!("enumeration cancelled after {} targets", targets.len());
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                continue;
            },
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().is_dir();

        if is_dir {
            // Hidden directories are pruned from the walk entirely unless
            // explicitly included.
            if !options.hidden
                && name.starts_with('.')
                && !options.include_names.contains(&name)
            {
                it.skip_current_dir();
                continue;
            }
            if options.scope.wants_dirs() && matcher.is_match(&name) {
                targets.push(Target::from_name(
                    entry.path().parent().unwrap_or(root).to_path_buf(),
                    &name,
                    TargetKind::Dir,
                ));
            }
        } else if options.scope.wants_files() && matcher.is_match(&name) {
            targets.push(Target::from_name(
                entry.path().parent().unwrap_or(root).to_path_buf(),
                &name,
                TargetKind::File,
            ));
        }
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::create_dir(tmp.path().join("sub/nested")).unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::write(tmp.path().join(".env"), "").unwrap();
        fs::write(tmp.path().join("sub/inner.log"), "").unwrap();
        fs::write(tmp.path().join("sub/nested/deep.log"), "").unwrap();
        tmp
    }

    fn names(targets: &[Target]) -> Vec<String> {
        targets.iter().map(Target::file_name).collect()
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("a.txt"), ("a".into(), ".txt".into()));
        assert_eq!(split_name("a.tar.gz"), ("a.tar".into(), ".gz".into()));
        assert_eq!(split_name("noext"), ("noext".into(), String::new()));
        assert_eq!(split_name(".env"), (".env".into(), String::new()));
        assert_eq!(split_name(".env.local"), (".env".into(), ".local".into()));
    }

    #[test]
    fn test_target_path_round_trip() {
        let target = Target::from_name(PathBuf::from("/data"), "a.txt", TargetKind::File);
        assert_eq!(target.path(), PathBuf::from("/data/a.txt"));
        assert_eq!(target.file_name(), "a.txt");
    }

    #[test]
    fn test_enumerate_children_only_by_default() {
        let tmp = fixture();
        let targets = enumerate(tmp.path(), &Options::default(), &CancelToken::new()).unwrap();
        assert_eq!(names(&targets), vec!["sub", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_enumerate_dirs_before_files_sorted() {
        let tmp = fixture();
        let mut options = Options::default();
        options.recursive = true;
        options.depth = Depth::Unlimited;
        let targets = enumerate(tmp.path(), &options, &CancelToken::new()).unwrap();
        assert_eq!(
            names(&targets),
            vec!["sub", "nested", "deep.log", "inner.log", "a.txt", "b.txt"]
        );
    }

    #[test]
    fn test_enumerate_bounded_depth() {
        let tmp = fixture();
        let mut options = Options::default();
        options.recursive = true;
        options.depth = Depth::Levels(1);
        let targets = enumerate(tmp.path(), &options, &CancelToken::new()).unwrap();
        assert_eq!(
            names(&targets),
            vec!["sub", "nested", "inner.log", "a.txt", "b.txt"]
        );
    }

    #[test]
    fn test_enumerate_scope_filters() {
        let tmp = fixture();
        let mut options = Options::default();
        options.set_dirs_only(true);
        let targets = enumerate(tmp.path(), &options, &CancelToken::new()).unwrap();
        assert_eq!(names(&targets), vec!["sub"]);

        options.set_files_only(true);
        let targets = enumerate(tmp.path(), &options, &CancelToken::new()).unwrap();
        assert_eq!(names(&targets), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_enumerate_hidden_policy() {
        let tmp = fixture();
        let mut options = Options::default();
        options.hidden = true;
        let targets = enumerate(tmp.path(), &options, &CancelToken::new()).unwrap();
        assert!(names(&targets).contains(&".env".to_string()));

        // Explicit include overrides the hidden default
        options.hidden = false;
        options.include_names.insert(".env".to_string());
        let targets = enumerate(tmp.path(), &options, &CancelToken::new()).unwrap();
        assert!(names(&targets).contains(&".env".to_string()));
    }

    #[test]
    fn test_enumerate_cancelled_returns_partial() {
        let tmp = fixture();
        let cancel = CancelToken::new();
        cancel.cancel();
        let targets = enumerate(tmp.path(), &Options::default(), &cancel).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_enumerate_missing_root_is_hard_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let err = enumerate(&missing, &Options::default(), &CancelToken::new()).unwrap_err();
        assert!(matches!(err, WalkError::RootMissing(_)));

        let file = tmp.path().join("plain.txt");
        fs::write(&file, "").unwrap();
        let err = enumerate(&file, &Options::default(), &CancelToken::new()).unwrap_err();
        assert!(matches!(err, WalkError::NotADirectory(_)));
    }
}
