use crate::options::PatternKind;
use regex::{Regex, RegexBuilder};

/// Translate a glob pattern into an anchored regex pattern string.
///
/// Each `*` becomes the capture group `(.*)` and each `?` becomes `(.)`,
/// so the wildcard positions are available to a replacement pattern as
/// numbered groups. Bracket classes are preserved (`[!seq]` becomes
/// `[^seq]`); an unterminated `[` is treated as a literal.
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push('^');

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str("(.*)"),
            '?' => out.push_str("(.)"),
            '[' => {
                if let Some(end) = find_class_end(&chars, i) {
                    out.push('[');
                    let mut j = i + 1;
                    if chars[j] == '!' {
                        out.push('^');
                        j += 1;
                    }
                    while j < end {
                        // The regex class syntax gives `\`, `[` and `]`
                        // meanings fnmatch classes do not have.
                        if matches!(chars[j], '\\' | '[' | ']') {
                            out.push('\\');
                        }
                        out.push(chars[j]);
                        j += 1;
                    }
                    out.push(']');
                    i = end;
                } else {
                    out.push_str("\\[");
                }
            },
            c => push_literal(&mut out, c),
        }
        i += 1;
    }

    out.push('$');
    out
}

/// Find the index of the `]` closing the bracket class opened at `start`.
/// A `]` in the first member position (after an optional `!`) is a literal.
fn find_class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if j < chars.len() && chars[j] == '!' {
        j += 1;
    }
    if j < chars.len() && chars[j] == ']' {
        j += 1;
    }
    while j < chars.len() {
        if chars[j] == ']' {
            return Some(j);
        }
        j += 1;
    }
    None
}

fn push_literal(out: &mut String, c: char) {
    if matches!(
        c,
        '.' | '^' | '$' | '+' | '(' | ')' | '{' | '}' | '|' | '\\'
    ) {
        out.push('\\');
    }
    out.push(c);
}

/// Map the wildcard positions of a glob replacement pattern to numbered
/// capture groups: `*.md` becomes `${1}.md`, `?-?` becomes `${1}-${2}`.
/// Literal `$` is escaped for the regex replacement syntax.
pub fn glob_to_replacement(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut group = 0;
    for c in pattern.chars() {
        match c {
            '*' | '?' => {
                group += 1;
                out.push_str(&format!("${{{group}}}"));
            },
            '$' => out.push_str("$$"),
            c => out.push(c),
        }
    }
    out
}

/// A compiled match/replace pair ready to run against names.
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
    replacement: String,
}

impl Substitution {
    /// Replace the leftmost match in `name`, or return it unchanged when
    /// nothing matches. Glob-mode patterns are anchored, so a match there
    /// always spans the whole name.
    pub fn apply(&self, name: &str) -> String {
        self.regex.replace(name, self.replacement.as_str()).into_owned()
    }
}

/// Compile a match/replace pattern pair under the configured mode.
///
/// Returns `None` when the pattern does not compile; the substitution
/// stage then passes names through untouched.
pub fn build_substitution(
    match_pattern: &str,
    replace_pattern: &str,
    kind: PatternKind,
    ignore_case: bool,
) -> Option<Substitution> {
    let (pattern, replacement) = match kind {
        PatternKind::Glob => (
            glob_to_regex(match_pattern),
            glob_to_replacement(replace_pattern),
        ),
        PatternKind::Regex => (match_pattern.to_string(), replace_pattern.to_string()),
    };

    match RegexBuilder::new(&pattern).case_insensitive(ignore_case).build() {
        Ok(regex) => Some(Substitution { regex, replacement }),
        Err(e) => {
            log::debug!("invalid match pattern {match_pattern:?}: {e}");
            None
        },
    }
}
