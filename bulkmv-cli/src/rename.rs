use crate::cli::Cli;
use anyhow::Result;
use bulkmv_core::{
    default_settings_path, rename_operation, ActionOutcome, CancelToken, CommitReport, Depth,
    History, Options, PatternKind, Settings,
};
use std::path::PathBuf;

/// Run one rename cycle from the parsed arguments. Returns the process
/// exit code: 0 on normal completion, 1 when auto-stop halted the batch
/// on a rename error.
pub fn run(cli: &Cli, cancel: &CancelToken) -> Result<i32> {
    let settings = match cli.config.as_deref().map(PathBuf::from).or_else(default_settings_path) {
        Some(path) => Settings::load_or_default(&path),
        None => Settings::default(),
    };
    let mut options = settings.into_options();
    apply_cli_overrides(&mut options, cli);

    let root = match cli.path.clone() {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let mut history = History::new();
    let report = rename_operation(
        &root,
        cli.match_pattern.as_deref().unwrap_or(""),
        cli.replace_pattern.as_deref(),
        &options,
        cancel,
        &mut history,
    )?;

    print_report(&report);

    if report.halted {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Flags the user passed win over the persisted settings. Boolean flags
/// only ever enable; absent flags leave the stored value alone.
fn apply_cli_overrides(options: &mut Options, cli: &Cli) {
    if cli.hidden {
        options.hidden = true;
    }
    if cli.recursive {
        options.recursive = true;
        options.depth = match cli.depth {
            Some(levels) => Depth::Levels(levels),
            None => Depth::Unlimited,
        };
    }
    if cli.dirs_only {
        options.set_dirs_only(true);
    }
    if cli.files_only {
        options.set_files_only(true);
    }
    if let Some(ref names) = cli.exclude {
        options
            .exclude_names
            .extend(names.split(':').filter(|n| !n.is_empty()).map(String::from));
    }
    if cli.ignore_case {
        options.ignore_case = true;
    }
    if cli.regex {
        options.pattern_kind = PatternKind::Regex;
    }
    if cli.keep_extension {
        options.set_keep_ext(true);
    }
    if cli.remove_extensions {
        options.set_remove_ext(true);
    }
    if cli.simulate {
        options.simulate = true;
    }
    if cli.no_clobber {
        options.no_clobber = true;
    }
    if cli.auto_stop {
        options.auto_stop = true;
    }
    if cli.media {
        options.media_mode = true;
    }

    if let Some(mode) = cli.case_mode {
        options.case_enabled = true;
        if let Some(mode) = bulkmv_core::CaseMode::from_index(mode) {
            options.case_mode = mode;
        }
    }
    if let Some(mode) = cli.separator_mode {
        options.separator_enabled = true;
        if let Some(mode) = bulkmv_core::SeparatorMode::from_index(mode) {
            options.separator_mode = mode;
        }
    }
    if cli.remove_duplicates {
        options.remove_enabled = true;
        options.remove_duplicates = true;
    }
    if cli.remove_symbols {
        options.remove_enabled = true;
        options.remove_symbols = true;
    }
    if cli.remove_nonwords {
        options.remove_enabled = true;
        options.remove_nonwords = true;
    }

    if let Some(pos) = cli.count {
        options.counter_enabled = true;
        options.counter_pos = pos;
        options.counter_base = cli.count_base;
        options.counter_step = cli.count_step;
        options.counter_fill = !cli.no_count_fill;
        if let Some(ref prefix) = cli.count_prefix {
            options.counter_prefix.clone_from(prefix);
        }
        if let Some(ref suffix) = cli.count_suffix {
            options.counter_suffix.clone_from(suffix);
        }
    }
    if let Some(ref text) = cli.insert {
        options.insert_enabled = true;
        options.insert_text.clone_from(text);
        options.insert_pos = cli.insert_pos;
    }
    if let Some(ref range) = cli.delete {
        match parse_delete_range(range) {
            Some((start, end)) => {
                options.delete_enabled = true;
                options.delete_start = start;
                options.delete_end = end;
            },
            None => log::warn!("ignoring malformed delete range {range:?}; expected START..END"),
        }
    }
    if let Some(ref pattern) = cli.filter {
        options.filter_pattern.clone_from(pattern);
    }
    if let Some(ref pattern) = cli.exclude_pattern {
        options.exclude_pattern.clone_from(pattern);
    }
}

/// Parse a `START..END` character range.
fn parse_delete_range(range: &str) -> Option<(usize, usize)> {
    let (start, end) = range.split_once("..")?;
    Some((start.trim().parse().ok()?, end.trim().parse().ok()?))
}

fn print_report(report: &CommitReport) {
    for action in &report.actions {
        match action.outcome {
            ActionOutcome::Applied => {
                if report.simulated {
                    println!("{} -> {}", action.from.display(), action.to.display());
                } else {
                    println!("renamed {} -> {}", action.from.display(), action.to.display());
                }
            },
            ActionOutcome::SkippedExists => {
                println!("exists, skipped: {}", action.to.display());
            },
            ActionOutcome::SkippedUnchanged => {
                log::debug!("unchanged: {}", action.from.display());
            },
            ActionOutcome::Failed => {
                let reason = action.error.as_deref().unwrap_or("unknown error");
                eprintln!(
                    "failed: {} -> {}: {}",
                    action.from.display(),
                    action.to.display(),
                    reason
                );
            },
        }
    }
    println!("{}", report.summary());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("bulkmv").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_delete_range() {
        assert_eq!(parse_delete_range("0..3"), Some((0, 3)));
        assert_eq!(parse_delete_range("2 .. 5"), Some((2, 5)));
        assert_eq!(parse_delete_range("junk"), None);
        assert_eq!(parse_delete_range("1..x"), None);
    }

    #[test]
    fn test_overrides_enable_stages() {
        let cli = parse(&["--case-mode", "1", "-D", "--count", "0", "--no-count-fill"]);
        let mut options = Options::default();
        apply_cli_overrides(&mut options, &cli);

        assert!(options.case_enabled);
        assert_eq!(options.case_mode, bulkmv_core::CaseMode::Upper);
        assert!(options.remove_enabled);
        assert!(options.remove_duplicates);
        assert!(options.counter_enabled);
        assert!(!options.counter_fill);
    }

    #[test]
    fn test_recursive_depth_flags() {
        let cli = parse(&["-r"]);
        let mut options = Options::default();
        apply_cli_overrides(&mut options, &cli);
        assert!(options.recursive);
        assert_eq!(options.depth, Depth::Unlimited);

        let cli = parse(&["-r", "--depth", "2"]);
        let mut options = Options::default();
        apply_cli_overrides(&mut options, &cli);
        assert_eq!(options.depth, Depth::Levels(2));
    }

    #[test]
    fn test_exclude_names_split_on_colon() {
        let cli = parse(&["-e", "build:target:"]);
        let mut options = Options::default();
        apply_cli_overrides(&mut options, &cli);
        assert!(options.exclude_names.contains("build"));
        assert!(options.exclude_names.contains("target"));
        assert_eq!(options.exclude_names.len(), 2);
    }

    #[test]
    fn test_extension_flags_conflict_handled_by_setters() {
        let cli = parse(&["-E"]);
        let mut options = Options::default();
        options.set_keep_ext(true);
        apply_cli_overrides(&mut options, &cli);
        assert!(options.remove_ext);
        assert!(!options.keep_ext);
    }
}
