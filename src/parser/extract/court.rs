use std::sync::LazyLock;

use regex::Regex;

use crate::parser::patterns::{resolve, title_case, Pattern};

static STJ_RE: Pattern =
    LazyLock::new(|| Regex::new(r"(?i)\bSuperior Tribunal de Justi[cç]a\b|\bSTJ\b"));
static STF_RE: Pattern =
    LazyLock::new(|| Regex::new(r"(?i)\bSupremo Tribunal Federal\b|\bSTF\b"));
static REGIONAL_RE: Pattern =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:TJ-?([A-Z]{2})|TRF-?(\d))\b"));

static PANEL_RE: Pattern = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Primeira|Segunda|Terceira|Quarta|Quinta|Sexta)\s+Turma\b")
});
static SECTION_RE: Pattern =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:Terceira\s+Se[cç][aã]o|Plen[aá]rio)\b"));

/// Court acronym. Higher courts win outright; a state or regional court is
/// only considered when neither is mentioned.
pub fn court(text: &str) -> Option<String> {
    if resolve("court_stj", &STJ_RE).is_some_and(|re| re.is_match(text)) {
        return Some("STJ".into());
    }
    if resolve("court_stf", &STF_RE).is_some_and(|re| re.is_match(text)) {
        return Some("STF".into());
    }
    let caps = resolve("court_regional", &REGIONAL_RE)?.captures(text)?;
    if let Some(state) = caps.get(1) {
        Some(format!("TJ-{}", state.as_str().to_uppercase()))
    } else {
        caps.get(2).map(|region| format!("TRF{}", region.as_str()))
    }
}

/// Panel ("Quinta Turma"), falling back to the Third Section or the Plenary.
pub fn judging_body(text: &str) -> Option<String> {
    resolve("judging_body", &PANEL_RE)
        .and_then(|re| re.find(text))
        .or_else(|| resolve("judging_section", &SECTION_RE).and_then(|re| re.find(text)))
        .map(|m| title_case(m.as_str()))
}
