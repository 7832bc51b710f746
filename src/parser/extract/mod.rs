pub mod case;
pub mod court;
pub mod offense;

/// Header fields recognized in a cleaned ruling. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub source_url: Option<String>,
    pub court: Option<String>,
    pub judging_body: Option<String>,
    pub case_number: Option<String>,
    pub date: Option<String>,
    pub rapporteur: Option<String>,
    pub offense: Option<String>,
}

pub fn extract_all(text: &str) -> Metadata {
    Metadata {
        source_url: case::source_url(text),
        court: court::court(text),
        judging_body: court::judging_body(text),
        case_number: case::case_number(text),
        date: case::date(text),
        rapporteur: case::rapporteur(text),
        offense: offense::classify(text),
    }
}

// ── Tests ──
