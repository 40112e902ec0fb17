use crate::options::{CaseMode, Options, SeparatorMode};
use crate::pattern::Substitution;
use crate::walk::Target;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Run a target's name through the fixed-order transform pipeline.
///
/// Pure function of the target, the options, the optional pre-assigned
/// counter string and the optional compiled substitution. Disabled stages
/// pass the name through; no stage ever fails hard.
///
/// Stage order: extension handling, case, separator, delete-range, removal
/// bundle, insertion, pattern substitution, counter, extension
/// re-attachment.
pub fn apply_stages(
    target: &Target,
    counter: Option<&str>,
    substitution: Option<&Substitution>,
    options: &Options,
) -> String {
    let mut name = if options.remove_ext || options.keep_ext {
        target.stem.clone()
    } else {
        format!("{}{}", target.stem, target.ext)
    };

    if options.case_enabled {
        name = apply_case(&name, options.case_mode);
    }
    if options.separator_enabled {
        name = apply_separator(&name, options.separator_mode);
    }
    if options.delete_enabled {
        name = delete_range(&name, options.delete_start, options.delete_end);
    }
    if options.remove_enabled {
        name = apply_remove(&name, options);
    }
    if options.insert_enabled && !options.insert_text.is_empty() {
        name = insert_at(&name, options.insert_pos, &options.insert_text);
    }
    if options.match_enabled {
        if let Some(sub) = substitution {
            name = sub.apply(&name);
        }
    }
    if options.counter_enabled {
        if let Some(count) = counter {
            name = insert_at(&name, options.counter_pos, count);
        }
    }
    if options.keep_ext {
        name.push_str(&target.ext);
    }

    name
}

pub(crate) fn apply_case(s: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Lower => s.to_lowercase(),
        CaseMode::Upper => s.to_uppercase(),
        CaseMode::CapitalizeFirst => capitalize(s),
        CaseMode::CapitalizeWords => s
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// First character uppercased, the rest lowered.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

pub(crate) fn apply_separator(s: &str, mode: SeparatorMode) -> String {
    match mode {
        SeparatorMode::SpaceToUnderscore => s.replace(' ', "_"),
        SeparatorMode::SpaceToHyphen => s.replace(' ', "-"),
        SeparatorMode::SpaceToDot => s.replace(' ', "."),
        SeparatorMode::DotToSpace => s.replace('.', " "),
        SeparatorMode::HyphenToSpace => s.replace('-', " "),
        SeparatorMode::UnderscoreToSpace => s.replace('_', " "),
        SeparatorMode::DotAndSpaceToUnderscore => s
            .chars()
            .map(|c| if c == '.' || c.is_whitespace() { '_' } else { c })
            .collect(),
    }
}

/// Remove the character range `start..end`. Slice semantics: `end` is
/// exclusive and out-of-range indices clamp instead of erroring.
pub(crate) fn delete_range(s: &str, start: usize, end: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());
    chars[..start].iter().chain(chars[end..].iter()).collect()
}

/// The removal bundle, sub-toggles applied in a fixed sub-order: collapse
/// duplicate separators, normalize symbols, strip non-word characters.
fn apply_remove(s: &str, options: &Options) -> String {
    let mut out = s.to_string();
    if options.remove_duplicates {
        out = collapse_duplicates(&out);
    }
    if options.remove_symbols {
        out = normalize_symbols(&out);
    }
    if options.remove_nonwords {
        out.retain(|c| c.is_alphanumeric() || c == '_');
    }
    out
}

/// Collapse runs of the same separator character (`-`, `_`, space, `.`)
/// down to a single occurrence.
fn collapse_duplicates(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if matches!(c, '-' | '_' | ' ' | '.') && prev == Some(c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Strip diacritics via NFD decomposition and restrict the result to the
/// allowed set: ASCII letters, digits, space, `.`, `-`, `_`, `+`.
fn normalize_symbols(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '-' | '_' | '+'))
        .collect()
}

/// Insert `text` at character index `pos`; an index beyond the end appends.
pub(crate) fn insert_at(s: &str, pos: usize, text: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let pos = pos.min(chars.len());
    let mut out: String = chars[..pos].iter().collect();
    out.push_str(text);
    out.extend(chars[pos..].iter());
    out
}
