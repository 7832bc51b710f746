use std::sync::LazyLock;

use regex::Regex;

use crate::parser::patterns::{resolve, Pattern};

static SOURCE_RE: Pattern = LazyLock::new(|| Regex::new(r"(?i)https?://\S*vlex\.com\S*"));

// The token must carry a digit so a following word ("Processo: REsp ...") is not taken as the number.
static CASE_RE: Pattern = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Processo|REsp|HC|RHC|AREsp)\s*[:\-]?\s*([A-Z0-9./\-]*\d[A-Z0-9./\-]*)\b")
});
static VLEX_ID_RE: Pattern = LazyLock::new(|| Regex::new(r"(?i)\bVLEX-(\d+)\b"));

static DATE_RE: Pattern = LazyLock::new(|| {
    Regex::new(r"(?i)Data\s*:\s*([0-3]?\d\s+(?:de\s+)?[a-zçãõéíóú]+(?:\s+de)?\s+\d{4})")
});

static RAPPORTEUR_RE: Pattern = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:Relator(?:a)?|Ministro Relator|Desembargador(?:a)? Relator(?:a)?)\s*[:\-]?\s*([A-ZÁÉÍÓÚÂÊÔÃÕÇ][\w\s.\-ÁÉÍÓÚÂÊÔÃÕÇ]+?)(?:\n|\z)",
    )
});

pub fn source_url(text: &str) -> Option<String> {
    resolve("source_url", &SOURCE_RE)?
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Case number after a case-type keyword, else the platform's numeric document id.
pub fn case_number(text: &str) -> Option<String> {
    resolve("case_number", &CASE_RE)
        .and_then(|re| re.captures(text))
        .or_else(|| resolve("vlex_id", &VLEX_ID_RE).and_then(|re| re.captures(text)))
        .map(|caps| caps[1].to_string())
}

/// Free-form date after a "Data:" label, e.g. "05 de Dezembro de 2017" or "14 Março 2022".
pub fn date(text: &str) -> Option<String> {
    resolve("date", &DATE_RE)?
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Name after a rapporteur label, up to the end of the line.
pub fn rapporteur(text: &str) -> Option<String> {
    resolve("rapporteur", &RAPPORTEUR_RE)?
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_url_requires_platform_domain() {
        let text = "Ver https://www.stj.jus.br/x e https://jurisprudencia.vlex.com.br/vid/abc-123 depois";
        assert_eq!(
            source_url(text).as_deref(),
            Some("https://jurisprudencia.vlex.com.br/vid/abc-123")
        );
        assert_eq!(source_url("https://www.stj.jus.br/x"), None);
    }

    #[test]
    fn case_number_after_keyword() {
        assert_eq!(case_number("HC 412.345/SP").as_deref(), Some("412.345/SP"));
        assert_eq!(case_number("REsp: 1.234.567").as_deref(), Some("1.234.567"));
        assert_eq!(case_number("Processo - AREsp2001").as_deref(), Some("AREsp2001"));
    }

    #[test]
    fn case_number_skips_keyword_without_number() {
        assert_eq!(
            case_number("Processo: REsp 1.800.100/RS").as_deref(),
            Some("1.800.100/RS")
        );
    }

    #[test]
    fn case_number_ignores_word_continuations() {
        // "processos" must not yield "s"
        assert_eq!(case_number("os processos foram reunidos"), None);
    }

    #[test]
    fn case_number_falls_back_to_platform_id() {
        assert_eq!(
            case_number("Referência VLEX-889900112 sem classe processual").as_deref(),
            Some("889900112")
        );
    }

    #[test]
    fn keyword_match_wins_over_platform_id() {
        let text = "VLEX-55501 ... HC 99.001/MG";
        assert_eq!(case_number(text).as_deref(), Some("99.001/MG"));
    }

    #[test]
    fn unrelated_number_after_keyword_still_wins() {
        // A keyword followed by any digit-bearing token is taken as the case number,
        // even when the platform id is also present.
        let text = "Habeas corpus (HC 2) citado; VLEX-77777";
        assert_eq!(case_number(text).as_deref(), Some("2"));
    }

    #[test]
    fn date_formats() {
        assert_eq!(date("Data: 05 Dezembro 2017").as_deref(), Some("05 Dezembro 2017"));
        assert_eq!(
            date("Data : 5 de março de 2021").as_deref(),
            Some("5 de março de 2021")
        );
        assert_eq!(date("data:14 Março de 2022").as_deref(), Some("14 Março de 2022"));
        assert_eq!(date("Data: ontem"), None);
    }

    #[test]
    fn rapporteur_until_end_of_line() {
        assert_eq!(
            rapporteur("Relator: Ministro Reynaldo Soares da Fonseca\nÓrgão").as_deref(),
            Some("Ministro Reynaldo Soares da Fonseca")
        );
        assert_eq!(
            rapporteur("Relatora - Ivana David").as_deref(),
            Some("Ivana David")
        );
        assert_eq!(
            rapporteur("Desembargador Relator: Álvaro Castro\n").as_deref(),
            Some("Álvaro Castro")
        );
        assert_eq!(rapporteur("sem relator"), None);
    }
}
