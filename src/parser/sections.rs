use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use super::patterns::{resolve, squash_whitespace, Pattern};

const MIN_SUMMARY_CHARS: usize = 20;
const MIN_DECISION_CHARS: usize = 10;
const MAX_REASONING: usize = 10;

// The summary runs until a blank line or the first heading that opens the next part of the ruling.
static SUMMARY_RE: Pattern = LazyLock::new(|| {
    Regex::new(
        r"(?is)(?:Ementa|Resumo)\s*:?\s*(.*?)(?:\n{2,}|Ac[óo]rd[ãa]o|Vistos|Relat[óo]rio|Decidem|Acordam)",
    )
});

static DECISION_RE: Pattern = LazyLock::new(|| {
    Regex::new(r"(?is)(?:Ac[óo]rd[ãa]o|Acordam|Decidem)\s*:?\s*(.*?)(?:\n{2,}|\z)")
});

static REASONING_RE: Pattern =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-–—][ \t]+([^.\n]{30,400}\.)"));

/// The holding ("ementa"). Label-only or near-empty captures are discarded.
pub fn summary(text: &str) -> Option<String> {
    let re = resolve("summary", &SUMMARY_RE)?;
    let caps = re.captures(text)?;
    let s = squash_whitespace(&caps[1]);
    (s.chars().count() > MIN_SUMMARY_CHARS).then_some(s)
}

/// The dispositive part, from the judgment keyword to the end of its paragraph.
pub fn decision(text: &str) -> Option<String> {
    let re = resolve("decision", &DECISION_RE)?;
    let caps = re.captures(text)?;
    let s = squash_whitespace(&caps[1]);
    (s.chars().count() > MIN_DECISION_CHARS).then_some(s)
}

/// Dash-led sentences, deduplicated in order of appearance, at most ten.
pub fn reasoning(text: &str) -> Vec<String> {
    let Some(re) = resolve("reasoning", &REASONING_RE) else {
        return Vec::new();
    };
    re.captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| {
            let n = s.chars().count();
            n > 20 && n < 400
        })
        .unique()
        .take(MAX_REASONING)
        .collect()
}

// ── Tests ──
