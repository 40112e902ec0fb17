use crate::options::{CaseMode, Depth, Options, PatternKind, Scope, SeparatorMode};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted key/value form of [`Options`], grouped into the named
/// sections the surrounding application relies on. Every key has a
/// documented default so a missing or partially-populated store loads
/// cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub checks: Checks,
    #[serde(default)]
    pub combos: Combos,
    #[serde(default)]
    pub edits: Edits,
    #[serde(default)]
    pub radios: Radios,
    #[serde(default)]
    pub spins: Spins,
}

/// Boolean toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checks {
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub keep_ext: bool,
    #[serde(default)]
    pub remove_ext: bool,
    #[serde(default)]
    pub simulate: bool,
    #[serde(default)]
    pub no_clobber: bool,
    #[serde(default)]
    pub auto_stop: bool,
    #[serde(default)]
    pub ignore_case: bool,
    #[serde(default)]
    pub case_enabled: bool,
    #[serde(default)]
    pub separator_enabled: bool,
    #[serde(default)]
    pub delete_enabled: bool,
    #[serde(default)]
    pub remove_enabled: bool,
    #[serde(default)]
    pub remove_duplicates: bool,
    #[serde(default)]
    pub remove_symbols: bool,
    #[serde(default)]
    pub remove_nonwords: bool,
    #[serde(default)]
    pub insert_enabled: bool,
    #[serde(default = "default_true")]
    pub match_enabled: bool,
    #[serde(default)]
    pub counter_enabled: bool,
    #[serde(default = "default_true")]
    pub counter_fill: bool,
    #[serde(default)]
    pub media_mode: bool,
}

impl Default for Checks {
    fn default() -> Self {
        Self {
            hidden: false,
            recursive: false,
            keep_ext: false,
            remove_ext: false,
            simulate: false,
            no_clobber: false,
            auto_stop: false,
            ignore_case: false,
            case_enabled: false,
            separator_enabled: false,
            delete_enabled: false,
            remove_enabled: false,
            remove_duplicates: false,
            remove_symbols: false,
            remove_nonwords: false,
            insert_enabled: false,
            match_enabled: true,
            counter_enabled: false,
            counter_fill: true,
            media_mode: false,
        }
    }
}

/// Selectable-mode integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combos {
    #[serde(default)]
    pub case_mode: u8,
    #[serde(default)]
    pub separator_mode: u8,
}

impl Default for Combos {
    fn default() -> Self {
        Self {
            case_mode: 0,
            separator_mode: 0,
        }
    }
}

/// Free-text pattern and string fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Edits {
    #[serde(default)]
    pub insert_text: String,
    #[serde(default)]
    pub counter_prefix: String,
    #[serde(default)]
    pub counter_suffix: String,
    #[serde(default)]
    pub match_pattern: String,
    #[serde(default)]
    pub replace_pattern: String,
    #[serde(default)]
    pub filter_pattern: String,
    #[serde(default)]
    pub exclude_pattern: String,
}

/// Mutually-exclusive mode selections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Radios {
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub pattern: PatternKind,
}

/// Numeric parameters. A negative `depth` means unlimited recursion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spins {
    #[serde(default)]
    pub delete_start: u32,
    #[serde(default = "default_one_u32")]
    pub delete_end: u32,
    #[serde(default)]
    pub insert_pos: u32,
    #[serde(default)]
    pub counter_pos: u32,
    #[serde(default = "default_one")]
    pub counter_base: i64,
    #[serde(default = "default_one")]
    pub counter_step: i64,
    #[serde(default = "default_one")]
    pub depth: i64,
}

impl Default for Spins {
    fn default() -> Self {
        Self {
            delete_start: 0,
            delete_end: 1,
            insert_pos: 0,
            counter_pos: 0,
            counter_base: 1,
            counter_step: 1,
            depth: 1,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_one() -> i64 {
    1
}

fn default_one_u32() -> u32 {
    1
}

impl Settings {
    /// Load settings from `path`. A missing file, or one that fails to
    /// parse, falls back to defaults — configuration problems are never
    /// fatal to startup.
    pub fn load_or_default(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("no settings at {}: {e}", path.display());
                return Self::default();
            },
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "failed to parse settings {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            },
        }
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Explicit field-by-field mapping from the persisted form to the
    /// engine's option record. Out-of-range combo indices fall back to
    /// their defaults with a debug log.
    pub fn into_options(self) -> Options {
        let case_mode = CaseMode::from_index(self.combos.case_mode).unwrap_or_else(|| {
            log::debug!("case mode {} out of range, using 0", self.combos.case_mode);
            CaseMode::Lower
        });
        let separator_mode = SeparatorMode::from_index(self.combos.separator_mode)
            .unwrap_or_else(|| {
                log::debug!(
                    "separator mode {} out of range, using 0",
                    self.combos.separator_mode
                );
                SeparatorMode::SpaceToUnderscore
            });

        let mut options = Options {
            hidden: self.checks.hidden,
            recursive: self.checks.recursive,
            depth: if self.spins.depth < 0 {
                Depth::Unlimited
            } else {
                Depth::Levels(self.spins.depth as usize)
            },
            scope: self.radios.scope,
            filter_pattern: self.edits.filter_pattern,
            exclude_pattern: self.edits.exclude_pattern,
            pattern_kind: self.radios.pattern,
            ignore_case: self.checks.ignore_case,
            case_enabled: self.checks.case_enabled,
            case_mode,
            separator_enabled: self.checks.separator_enabled,
            separator_mode,
            delete_enabled: self.checks.delete_enabled,
            delete_start: self.spins.delete_start as usize,
            delete_end: self.spins.delete_end as usize,
            remove_enabled: self.checks.remove_enabled,
            remove_duplicates: self.checks.remove_duplicates,
            remove_symbols: self.checks.remove_symbols,
            remove_nonwords: self.checks.remove_nonwords,
            insert_enabled: self.checks.insert_enabled,
            insert_pos: self.spins.insert_pos as usize,
            insert_text: self.edits.insert_text,
            match_enabled: self.checks.match_enabled,
            counter_enabled: self.checks.counter_enabled,
            counter_base: self.spins.counter_base,
            counter_step: self.spins.counter_step,
            counter_fill: self.checks.counter_fill,
            counter_pos: self.spins.counter_pos as usize,
            counter_prefix: self.edits.counter_prefix,
            counter_suffix: self.edits.counter_suffix,
            simulate: self.checks.simulate,
            no_clobber: self.checks.no_clobber,
            auto_stop: self.checks.auto_stop,
            media_mode: self.checks.media_mode,
            ..Options::default()
        };
        // Route the coupled toggles through the invariant-enforcing
        // setters; keep-extension wins over a contradictory store.
        options.set_remove_ext(self.checks.remove_ext);
        if self.checks.keep_ext {
            options.set_keep_ext(true);
        }
        options
    }

    /// Explicit field-by-field mapping from an option record to the
    /// persisted form. The match/replace patterns are passed separately
    /// since the engine does not store them on `Options`.
    pub fn from_options(options: &Options, match_pattern: &str, replace_pattern: &str) -> Self {
        Self {
            checks: Checks {
                hidden: options.hidden,
                recursive: options.recursive,
                keep_ext: options.keep_ext,
                remove_ext: options.remove_ext,
                simulate: options.simulate,
                no_clobber: options.no_clobber,
                auto_stop: options.auto_stop,
                ignore_case: options.ignore_case,
                case_enabled: options.case_enabled,
                separator_enabled: options.separator_enabled,
                delete_enabled: options.delete_enabled,
                remove_enabled: options.remove_enabled,
                remove_duplicates: options.remove_duplicates,
                remove_symbols: options.remove_symbols,
                remove_nonwords: options.remove_nonwords,
                insert_enabled: options.insert_enabled,
                match_enabled: options.match_enabled,
                counter_enabled: options.counter_enabled,
                counter_fill: options.counter_fill,
                media_mode: options.media_mode,
            },
            combos: Combos {
                case_mode: options.case_mode.index(),
                separator_mode: options.separator_mode.index(),
            },
            edits: Edits {
                insert_text: options.insert_text.clone(),
                counter_prefix: options.counter_prefix.clone(),
                counter_suffix: options.counter_suffix.clone(),
                match_pattern: match_pattern.to_string(),
                replace_pattern: replace_pattern.to_string(),
                filter_pattern: options.filter_pattern.clone(),
                exclude_pattern: options.exclude_pattern.clone(),
            },
            radios: Radios {
                scope: options.scope,
                pattern: options.pattern_kind,
            },
            spins: Spins {
                delete_start: options.delete_start as u32,
                delete_end: options.delete_end as u32,
                insert_pos: options.insert_pos as u32,
                counter_pos: options.counter_pos as u32,
                counter_base: options.counter_base,
                counter_step: options.counter_step,
                depth: match options.depth {
                    Depth::Unlimited => -1,
                    Depth::Levels(n) => n as i64,
                },
            },
        }
    }
}

/// Default location of the settings store: `~/.config/bulkmv/bulkmv.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("bulkmv").join("bulkmv.toml"))
}
