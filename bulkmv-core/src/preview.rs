use crate::options::{Options, PatternKind};
use crate::pattern::build_substitution;
use crate::pipeline::apply_stages;
use crate::walk::Target;
use serde::Serialize;
use std::path::PathBuf;

/// The computed new name for a target before any filesystem mutation.
/// Recomputed whenever options or patterns change; discarded after commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Original full path of the entry.
    pub path: PathBuf,
    pub new_name: String,
}

/// Run every target through the transform pipeline and pair it with its
/// new name.
///
/// Media mode forces the preset stage bundle onto a scratch copy of the
/// options first. When the counter stage is enabled, targets are
/// pre-sorted lexicographically by name so counter assignment is
/// deterministic across runs; the sequence is generated only once the full
/// target count is known. Operates on a snapshot and never mutates
/// enumerator state.
pub fn build_previews(
    targets: &[Target],
    match_pattern: &str,
    replace_pattern: Option<&str>,
    options: &Options,
) -> Vec<Preview> {
    let mut options = options.clone();
    if options.media_mode {
        options.apply_media_preset();
    }

    let mut ordered: Vec<&Target> = targets.iter().collect();
    if options.counter_enabled {
        ordered.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    let match_pattern = if match_pattern.is_empty() {
        match options.pattern_kind {
            PatternKind::Glob => "*",
            PatternKind::Regex => ".*",
        }
    } else {
        match_pattern
    };
    let substitution = replace_pattern.and_then(|replace| {
        build_substitution(
            match_pattern,
            replace,
            options.pattern_kind,
            options.ignore_case,
        )
    });

    let counters = if options.counter_enabled {
        counter_values(ordered.len(), &options)
    } else {
        Vec::new()
    };

    ordered
        .iter()
        .enumerate()
        .map(|(i, target)| Preview {
            path: target.path(),
            new_name: apply_stages(
                target,
                counters.get(i).map(String::as_str),
                substitution.as_ref(),
                &options,
            ),
        })
        .collect()
}

/// Generate the counter strings for a batch of `n` previews: the sequence
/// `base, base+step, …`, zero-padded to the width of the widest value when
/// fill is on, wrapped in the configured prefix and suffix.
fn counter_values(n: usize, options: &Options) -> Vec<String> {
    let step = if options.counter_step == 0 {
        log::debug!("counter step 0 treated as 1");
        1
    } else {
        options.counter_step
    };

    let values: Vec<i64> = (0..n as i64)
        .map(|i| options.counter_base + i * step)
        .collect();
    let width = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    values
        .into_iter()
        .map(|v| {
            let digits = if options.counter_fill {
                format!("{:0>width$}", v.to_string())
            } else {
                v.to_string()
            };
            format!("{}{}{}", options.counter_prefix, digits, options.counter_suffix)
        })
        .collect()
}
