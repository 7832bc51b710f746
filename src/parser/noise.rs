use std::sync::LazyLock;

use regex::{Regex, RegexSet};

use super::patterns::{replace_all, Pattern};

/// Whole-line boilerplate left behind by the vLex export. Order matters only
/// for readability; a line matching any entry is dropped.
const NOISE_PATTERNS: &[&str] = &[
    r"^\s*Baixado do vLex.*$",
    r"^\s*©\s*Copyright.*$",
    r"^\s*C[oó]pia exclusiva.*$",
    r"^\s*vLex Document Id:.*$",
    r"^\s*(?:Link:\s*)?https?://\S+.*$",
    r"^\s*\d{1,2}\s+de\s+[a-zçãõéíóú]+\s+de\s+\d{4}\s+\d{2}:\d{2}\s*$",
    r"^\s*\d+\s*/\s*\d+\s*$",
    r"^\s*P[aá]gina\s*\d+\s*de\s*\d+\s*$",
    r"^\s*vLex\s*$",
    r"^\s*Resumo\s*$",
    r"^\s*[-_.]{3,}\s*$",
];

static NOISE_SET: LazyLock<Option<RegexSet>> = LazyLock::new(|| {
    let patterns = NOISE_PATTERNS.iter().map(|p| format!("(?i){p}"));
    match RegexSet::new(patterns) {
        Ok(set) => Some(set),
        Err(err) => {
            tracing::warn!(error = %err, "noise patterns failed to compile; no lines will be dropped");
            None
        }
    }
});

static HSPACE_RE: Pattern = LazyLock::new(|| Regex::new(r"[ \t]+"));
static LEADING_HSPACE_RE: Pattern = LazyLock::new(|| Regex::new(r"\n[ \t]+"));
static BLANK_RUN_RE: Pattern = LazyLock::new(|| Regex::new(r"\n{3,}"));

pub fn is_noise_line(line: &str) -> bool {
    NOISE_SET.as_ref().is_some_and(|set| set.is_match(line))
}

/// Drop stray one- and two-character artifacts; blank lines are paragraph breaks and stay.
fn is_fragment(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= 2
}

/// Remove boilerplate lines and normalize whitespace.
pub fn clean(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let kept: Vec<&str> = unified
        .split('\n')
        .filter(|line| !is_noise_line(line) && !is_fragment(line))
        .collect();
    let joined = kept.join("\n");

    let text = joined.replace('\u{a0}', " ");
    let text = replace_all("hspace", &HSPACE_RE, &text, " ");
    let text = replace_all("leading_hspace", &LEADING_HSPACE_RE, &text, "\n");
    let text = replace_all("blank_run", &BLANK_RUN_RE, &text, "\n\n");

    text.trim().to_string()
}

// ── Tests ──
