use clap::Parser;
use std::path::PathBuf;

/// Batch file and directory renaming with preview and undo
#[derive(Parser, Debug)]
#[command(name = "bulkmv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pattern to identify targets by (glob unless --regex). Defaults to
    /// matching every name in the working set
    pub match_pattern: Option<String>,

    /// Replacement pattern for the match pattern. For glob patterns the
    /// wildcards map positionally onto those of the match pattern
    pub replace_pattern: Option<String>,

    /// Working directory to start in. Defaults to the current directory
    #[arg(short = 'p', long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Only rename directory names. Default is files + dirs
    #[arg(short = 'd', long, conflicts_with = "files_only")]
    pub dirs_only: bool,

    /// Only rename file names. Default is files + dirs
    #[arg(short = 'f', long)]
    pub files_only: bool,

    /// Apply changes recursively
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Descend N additional levels below the working directory when
    /// recursing. Without this, recursion is unlimited
    #[arg(long, value_name = "N", requires = "recursive")]
    pub depth: Option<usize>,

    /// Include hidden files and directories
    #[arg(short = 'a', long = "all")]
    pub hidden: bool,

    /// Exclude files/directories by name. Colon separated
    #[arg(short = 'e', long, value_name = "NAMES")]
    pub exclude: Option<String>,

    /// Disable case sensitivity for pattern matching
    #[arg(short = 'I', long)]
    pub ignore_case: bool,

    /// Preserve file extensions, re-attaching them untransformed
    #[arg(short = 'k', long = "keep-extension", conflicts_with = "remove_extensions")]
    pub keep_extension: bool,

    /// Do a test run and print the results without renaming anything
    #[arg(short = 's', long)]
    pub simulate: bool,

    /// Do not overwrite an existing file
    #[arg(short = 'n', long = "no-clobber")]
    pub no_clobber: bool,

    /// Stop the whole batch on the first rename error
    #[arg(long)]
    pub auto_stop: bool,

    /// Option bundle: all lowercase, dots and spaces to underscore,
    /// remove duplicate separators, normalize symbols, keep extensions
    #[arg(short = 'M', long)]
    pub media: bool,

    /// Use regex matching instead of globbing
    #[arg(short = 'R', long)]
    pub regex: bool,

    /// Case mode: 0 = lowercase, 1 = uppercase, 2 = capitalize first,
    /// 3 = capitalize every word
    #[arg(long, value_name = "MODE", value_parser = clap::value_parser!(u8).range(0..=3))]
    pub case_mode: Option<u8>,

    /// Separator mode: 0-2 = space to underscore/hyphen/dot,
    /// 3-5 = reversed, 6 = dots and spaces to underscore
    #[arg(long, value_name = "MODE", value_parser = clap::value_parser!(u8).range(0..=6))]
    pub separator_mode: Option<u8>,

    /// Remove duplicate separator characters
    #[arg(short = 'D', long)]
    pub remove_duplicates: bool,

    /// Remove filetype extensions
    #[arg(short = 'E', long = "remove-extensions")]
    pub remove_extensions: bool,

    /// Remove most symbols and normalize accents
    #[arg(short = 'S', long)]
    pub remove_symbols: bool,

    /// Remove non-word characters
    #[arg(short = 'W', long)]
    pub remove_nonwords: bool,

    /// Insert an index at position POS, counting up from the base
    #[arg(short = 'c', long = "count", value_name = "POS")]
    pub count: Option<usize>,

    /// Base to start counting from
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub count_base: i64,

    /// Counter increment
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub count_step: i64,

    /// Disable zero-padding of the counter
    #[arg(long)]
    pub no_count_fill: bool,

    /// Literal text prepended to the counter
    #[arg(long, value_name = "TEXT")]
    pub count_prefix: Option<String>,

    /// Literal text appended to the counter
    #[arg(long, value_name = "TEXT")]
    pub count_suffix: Option<String>,

    /// Insert TEXT at --insert-pos
    #[arg(long, value_name = "TEXT")]
    pub insert: Option<String>,

    /// Character index for --insert; past the end appends
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub insert_pos: usize,

    /// Delete the character range START..END (end exclusive, clamped)
    #[arg(long, value_name = "START..END")]
    pub delete: Option<String>,

    /// Only consider names matching these patterns (slash separated)
    #[arg(long, value_name = "PAT")]
    pub filter: Option<String>,

    /// Reject names matching these patterns (slash separated)
    #[arg(long = "exclude-pattern", value_name = "PAT")]
    pub exclude_pattern: Option<String>,

    /// Settings file to load. Defaults to ~/.config/bulkmv/bulkmv.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging verbosity, up to -vvv (debug)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print log messages to console
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
