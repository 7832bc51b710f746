use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// A lazily compiled pattern whose compile error is kept instead of panicking.
pub type Pattern = LazyLock<Result<Regex, regex::Error>>;

/// Resolve a pattern, logging and yielding `None` if it failed to compile.
/// Callers treat `None` exactly like "no match".
pub fn resolve<'a>(name: &str, pattern: &'a Pattern) -> Option<&'a Regex> {
    match &**pattern {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(pattern = name, error = %err, "pattern unavailable; field treated as not found");
            None
        }
    }
}

/// `Regex::replace_all` through a fallible pattern; an unavailable pattern leaves the text as is.
pub fn replace_all(name: &str, pattern: &Pattern, text: &str, rep: &str) -> String {
    match resolve(name, pattern) {
        Some(re) => re.replace_all(text, rep).into_owned(),
        None => text.to_string(),
    }
}

/// Title-case every alphabetic run, lowercasing the rest ("PRIMEIRA TURMA" -> "Primeira Turma").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Collapse every whitespace run to one space and trim.
pub fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
