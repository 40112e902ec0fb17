use crate::options::{Options, PatternKind};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Decides whether a single name belongs to the working set.
///
/// Precedence: explicit include/exclude name sets, then pattern-based
/// exclude and filter checks, then the hidden-entry default. Malformed
/// patterns are non-matching (fail open), never fatal.
#[derive(Debug)]
pub struct Matcher {
    hidden: bool,
    include: BTreeSet<String>,
    exclude: BTreeSet<String>,
    filter: Option<PatternSet>,
    exclude_patterns: Option<PatternSet>,
}

#[derive(Debug)]
enum PatternSet {
    Globs(GlobSet),
    Regexes(Vec<Regex>),
}

impl PatternSet {
    /// Compile a slash-separated pattern list; the patterns are OR'd.
    /// Patterns that do not compile are dropped with a debug log.
    fn compile(patterns: &str, kind: PatternKind, ignore_case: bool) -> Self {
        match kind {
            PatternKind::Glob => {
                let mut builder = GlobSetBuilder::new();
                for pattern in patterns.split('/') {
                    match GlobBuilder::new(pattern).case_insensitive(ignore_case).build() {
                        Ok(glob) => {
                            builder.add(glob);
                        },
                        Err(e) => log::debug!("dropping malformed glob {pattern:?}: {e}"),
                    }
                }
                let set = builder.build().unwrap_or_else(|e| {
                    log::debug!("glob set failed to build: {e}");
                    GlobSet::empty()
                });
                Self::Globs(set)
            },
            PatternKind::Regex => {
                let mut regexes = Vec::new();
                for pattern in patterns.split('/') {
                    match RegexBuilder::new(pattern).case_insensitive(ignore_case).build() {
                        Ok(re) => regexes.push(re),
                        Err(e) => log::debug!("dropping malformed regex {pattern:?}: {e}"),
                    }
                }
                Self::Regexes(regexes)
            },
        }
    }

    fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Globs(set) => set.is_match(name),
            Self::Regexes(regexes) => regexes.iter().any(|re| re.is_match(name)),
        }
    }
}

impl Matcher {
    pub fn new(options: &Options) -> Self {
        let compile = |patterns: &str| {
            if patterns.is_empty() {
                None
            } else {
                Some(PatternSet::compile(
                    patterns,
                    options.pattern_kind,
                    options.ignore_case,
                ))
            }
        };

        Self {
            hidden: options.hidden,
            include: options.include_names.clone(),
            exclude: options.exclude_names.clone(),
            filter: compile(&options.filter_pattern),
            exclude_patterns: compile(&options.exclude_pattern),
        }
    }

    /// Whether `name` is included in the working set.
    pub fn is_match(&self, name: &str) -> bool {
        if self.exclude.contains(name) {
            return false;
        }
        if self.include.contains(name) {
            return true;
        }
        if let Some(ref patterns) = self.exclude_patterns {
            if patterns.is_match(name) {
                return false;
            }
        }
        if let Some(ref patterns) = self.filter {
            if !patterns.is_match(name) {
                return false;
            }
        }
        if !self.hidden && name.starts_with('.') {
            return false;
        }
        true
    }
}

/// One-shot form of [`Matcher::is_match`] for callers without a compiled
/// matcher at hand.
pub fn matches(name: &str, options: &Options) -> bool {
    Matcher::new(options).is_match(name)
}
