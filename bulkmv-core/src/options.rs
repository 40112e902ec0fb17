use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which entry kinds are eligible for renaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Both,
    Dirs,
    Files,
}

impl Scope {
    pub fn wants_dirs(self) -> bool {
        matches!(self, Self::Both | Self::Dirs)
    }

    pub fn wants_files(self) -> bool {
        matches!(self, Self::Both | Self::Files)
    }
}

/// How the match/filter/exclude patterns are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Glob,
    Regex,
}

/// Recursion depth below the working directory. `Levels(0)` walks the
/// immediate children only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Levels(usize),
    Unlimited,
}

/// Case stage modes, in combo-box order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Lower,
    Upper,
    CapitalizeFirst,
    CapitalizeWords,
}

impl CaseMode {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Lower),
            1 => Some(Self::Upper),
            2 => Some(Self::CapitalizeFirst),
            3 => Some(Self::CapitalizeWords),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Self::Lower => 0,
            Self::Upper => 1,
            Self::CapitalizeFirst => 2,
            Self::CapitalizeWords => 3,
        }
    }
}

/// Separator stage modes, in combo-box order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorMode {
    SpaceToUnderscore,
    SpaceToHyphen,
    SpaceToDot,
    DotToSpace,
    HyphenToSpace,
    UnderscoreToSpace,
    DotAndSpaceToUnderscore,
}

impl SeparatorMode {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::SpaceToUnderscore),
            1 => Some(Self::SpaceToHyphen),
            2 => Some(Self::SpaceToDot),
            3 => Some(Self::DotToSpace),
            4 => Some(Self::HyphenToSpace),
            5 => Some(Self::UnderscoreToSpace),
            6 => Some(Self::DotAndSpaceToUnderscore),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Self::SpaceToUnderscore => 0,
            Self::SpaceToHyphen => 1,
            Self::SpaceToDot => 2,
            Self::DotToSpace => 3,
            Self::HyphenToSpace => 4,
            Self::UnderscoreToSpace => 5,
            Self::DotAndSpaceToUnderscore => 6,
        }
    }
}

/// The shared configuration record read by every engine component and
/// mutated only by the owning caller between operations.
///
/// Cross-field invariants are enforced here, centrally: `Scope` makes the
/// dirs-only/files-only exclusion unrepresentable, and the
/// keep-extension/remove-extension coupling goes through setters.
#[derive(Debug, Clone)]
pub struct Options {
    // Enumeration
    pub hidden: bool,
    pub recursive: bool,
    pub depth: Depth,
    pub scope: Scope,
    pub include_names: BTreeSet<String>,
    pub exclude_names: BTreeSet<String>,
    /// Slash-separated filter patterns; names must match at least one.
    /// Empty disables the check.
    pub filter_pattern: String,
    /// Slash-separated exclude patterns; any match rejects. Empty disables.
    pub exclude_pattern: String,
    pub pattern_kind: PatternKind,
    pub ignore_case: bool,

    // Pipeline
    pub case_enabled: bool,
    pub case_mode: CaseMode,
    pub separator_enabled: bool,
    pub separator_mode: SeparatorMode,
    pub delete_enabled: bool,
    pub delete_start: usize,
    pub delete_end: usize,
    pub remove_enabled: bool,
    pub remove_duplicates: bool,
    pub remove_symbols: bool,
    pub remove_nonwords: bool,
    pub remove_ext: bool,
    pub insert_enabled: bool,
    pub insert_pos: usize,
    pub insert_text: String,
    pub match_enabled: bool,
    pub counter_enabled: bool,
    pub counter_base: i64,
    pub counter_step: i64,
    pub counter_fill: bool,
    pub counter_pos: usize,
    pub counter_prefix: String,
    pub counter_suffix: String,

    // Execution
    pub simulate: bool,
    pub no_clobber: bool,
    pub auto_stop: bool,
    pub keep_ext: bool,
    pub media_mode: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hidden: false,
            recursive: false,
            depth: Depth::Levels(1),
            scope: Scope::Both,
            include_names: BTreeSet::new(),
            exclude_names: BTreeSet::new(),
            filter_pattern: String::new(),
            exclude_pattern: String::new(),
            pattern_kind: PatternKind::Glob,
            ignore_case: false,
            case_enabled: false,
            case_mode: CaseMode::Lower,
            separator_enabled: false,
            separator_mode: SeparatorMode::SpaceToUnderscore,
            delete_enabled: false,
            delete_start: 0,
            delete_end: 1,
            remove_enabled: false,
            remove_duplicates: false,
            remove_symbols: false,
            remove_nonwords: false,
            remove_ext: false,
            insert_enabled: false,
            insert_pos: 0,
            insert_text: String::new(),
            match_enabled: true,
            counter_enabled: false,
            counter_base: 1,
            counter_step: 1,
            counter_fill: true,
            counter_pos: 0,
            counter_prefix: String::new(),
            counter_suffix: String::new(),
            simulate: false,
            no_clobber: false,
            auto_stop: false,
            keep_ext: false,
            media_mode: false,
        }
    }
}

impl Options {
    /// Restrict the working set to directories. Passing `false` widens the
    /// scope back to both kinds, mirroring a checkbox toggle.
    pub fn set_dirs_only(&mut self, enabled: bool) {
        self.scope = if enabled { Scope::Dirs } else { Scope::Both };
    }

    /// Restrict the working set to files. Passing `false` widens the scope
    /// back to both kinds.
    pub fn set_files_only(&mut self, enabled: bool) {
        self.scope = if enabled { Scope::Files } else { Scope::Both };
    }

    /// Keep extensions out of the pipeline and re-attach them at the end.
    /// Mutually exclusive with `remove_ext`.
    pub fn set_keep_ext(&mut self, enabled: bool) {
        self.keep_ext = enabled;
        if enabled {
            self.remove_ext = false;
        }
    }

    /// Drop extensions entirely. Mutually exclusive with `keep_ext`.
    pub fn set_remove_ext(&mut self, enabled: bool) {
        self.remove_ext = enabled;
        if enabled {
            self.keep_ext = false;
        }
    }

    /// Effective recursion depth for an enumeration.
    pub fn effective_depth(&self) -> Depth {
        if self.recursive {
            self.depth
        } else {
            Depth::Levels(0)
        }
    }

    /// Force the media preset bundle onto this record: lowercase, dot and
    /// whitespace to underscore, collapse duplicate separators, normalize
    /// symbols, keep extensions.
    pub fn apply_media_preset(&mut self) {
        self.case_enabled = true;
        self.case_mode = CaseMode::Lower;
        self.separator_enabled = true;
        self.separator_mode = SeparatorMode::DotAndSpaceToUnderscore;
        self.remove_enabled = true;
        self.remove_duplicates = true;
        self.remove_symbols = true;
        self.set_keep_ext(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_mutual_exclusion() {
        let mut options = Options::default();
        options.set_dirs_only(true);
        assert_eq!(options.scope, Scope::Dirs);
        assert!(!options.scope.wants_files());

        options.set_files_only(true);
        assert_eq!(options.scope, Scope::Files);
        assert!(!options.scope.wants_dirs());

        options.set_files_only(false);
        assert_eq!(options.scope, Scope::Both);
    }

    #[test]
    fn test_extension_mutual_exclusion() {
        let mut options = Options::default();
        options.set_remove_ext(true);
        options.set_keep_ext(true);
        assert!(options.keep_ext);
        assert!(!options.remove_ext);

        options.set_remove_ext(true);
        assert!(options.remove_ext);
        assert!(!options.keep_ext);
    }

    #[test]
    fn test_effective_depth() {
        let mut options = Options::default();
        options.depth = Depth::Unlimited;
        assert_eq!(options.effective_depth(), Depth::Levels(0));

        options.recursive = true;
        assert_eq!(options.effective_depth(), Depth::Unlimited);

        options.depth = Depth::Levels(3);
        assert_eq!(options.effective_depth(), Depth::Levels(3));
    }

    #[test]
    fn test_media_preset() {
        let mut options = Options::default();
        options.set_remove_ext(true);
        options.apply_media_preset();

        assert!(options.case_enabled);
        assert_eq!(options.case_mode, CaseMode::Lower);
        assert_eq!(
            options.separator_mode,
            SeparatorMode::DotAndSpaceToUnderscore
        );
        assert!(options.remove_duplicates);
        assert!(options.remove_symbols);
        assert!(options.keep_ext);
        assert!(!options.remove_ext);
    }

    #[test]
    fn test_mode_index_round_trip() {
        for i in 0..=3 {
            assert_eq!(CaseMode::from_index(i).unwrap().index(), i);
        }
        assert!(CaseMode::from_index(4).is_none());

        for i in 0..=6 {
            assert_eq!(SeparatorMode::from_index(i).unwrap().index(), i);
        }
        assert!(SeparatorMode::from_index(7).is_none());
    }
}
