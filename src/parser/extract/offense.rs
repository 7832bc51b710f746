use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Offense categories and the keywords that vote for them. Declaration order
/// breaks ties: the first category reaching the top score wins.
pub const OFFENSE_TABLE: &[(&str, &[&str])] = &[
    ("Estelionato", &["estelionato", "fraude", "engano"]),
    (
        "Tráfico",
        &["tráfico", "narcotráfico", "entorpecente", "droga", "lei 11.343", "lei de drogas"],
    ),
    ("Furto", &["furto", "subtração"]),
    ("Lesão Corporal", &["lesão corporal", "lesões corporais", "agressão física"]),
    ("Porte/Consumo", &["porte", "consumo", "uso de droga", "usuário"]),
    (
        "Embriaguez",
        &["embriaguez", "embriagado", "alcoolizado", "direção sob efeito", "art. 306 do ctb"],
    ),
    ("Homicídio", &["homicídio", "homicidio", "morte", "latrocínio"]),
    ("Roubo", &["roubo", "assalto"]),
    ("Receptação", &["receptação", "receptacao", "produto de crime"]),
];

struct Category {
    label: &'static str,
    keywords: Vec<Regex>,
}

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| compile(OFFENSE_TABLE));

fn compile(table: &[(&'static str, &[&str])]) -> Vec<Category> {
    table
        .iter()
        .map(|&(label, words)| Category {
            label,
            keywords: words
                .iter()
                .filter_map(|w| match Regex::new(&format!(r"\b{}\b", regex::escape(w))) {
                    Ok(re) => Some(re),
                    Err(err) => {
                        warn!(keyword = *w, error = %err, "skipping offense keyword");
                        None
                    }
                })
                .collect(),
        })
        .collect()
}

fn score(category: &Category, lowered: &str) -> usize {
    category
        .keywords
        .iter()
        .map(|re| re.find_iter(lowered).count())
        .sum()
}

fn classify_with(categories: &[Category], text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    let mut best: Option<(&'static str, usize)> = None;
    for category in categories {
        let s = score(category, &lowered);
        if s > 0 && best.map_or(true, |(_, top)| s > top) {
            best = Some((category.label, s));
        }
    }
    best.map(|(label, _)| label)
}

/// Most-mentioned offense category, or `None` when no keyword occurs.
pub fn classify(text: &str) -> Option<String> {
    classify_with(&CATEGORIES, text).map(str::to_string)
}
