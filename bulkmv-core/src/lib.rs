#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod cancel;
pub mod config;
pub mod error;
pub mod history;
pub mod matcher;
pub mod operations;
pub mod options;
pub mod pattern;
pub mod pipeline;
pub mod preview;
pub mod undo;
pub mod walk;

pub use apply::{commit_previews, ActionOutcome, ActionReport, CommitReport};
pub use cancel::CancelToken;
pub use config::{default_settings_path, Settings};
pub use error::WalkError;
pub use history::{History, HistoryEntry};
pub use matcher::{matches, Matcher};
pub use operations::{rename_operation, undo_operation};
pub use options::{CaseMode, Depth, Options, PatternKind, Scope, SeparatorMode};
pub use pattern::{build_substitution, glob_to_regex, glob_to_replacement, Substitution};
pub use pipeline::apply_stages;
pub use preview::{build_previews, Preview};
pub use undo::{undo_entry, undo_last, UndoReport};
pub use walk::{enumerate, split_name, Target, TargetKind};
