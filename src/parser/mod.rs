pub mod extract;
pub mod noise;
pub mod patterns;
pub mod sections;

use std::path::Path;

use crate::error::{Result, SanitizeError};
use crate::model::Document;

/// Raw page text → cleaned text → metadata + sections → document.
///
/// Text that is empty before or after cleaning is an extraction failure.
pub fn build_document(raw: &str, path: &Path) -> Result<Document> {
    let full_text = noise::clean(raw);
    if full_text.is_empty() {
        return Err(SanitizeError::EmptyText {
            path: path.to_path_buf(),
        });
    }

    let meta = extract::extract_all(&full_text);

    Ok(Document {
        court: meta.court,
        judging_body: meta.judging_body,
        case_number: meta.case_number,
        rapporteur: meta.rapporteur,
        date: meta.date,
        offense: meta.offense,
        summary: sections::summary(&full_text),
        reasoning: sections::reasoning(&full_text),
        decision: sections::decision(&full_text),
        source_url: meta.source_url,
        file_path: path.display().to_string(),
        full_text,
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tjsp_document() {
        let raw = std::fs::read_to_string("tests/fixtures/tjsp_trafico.txt").unwrap();
        let doc = build_document(&raw, Path::new("pdfs/tjsp/apelacao.pdf")).unwrap();
        assert_eq!(doc.court.as_deref(), Some("TJ-SP"));
        assert_eq!(doc.offense.as_deref(), Some("Tráfico"));
        assert_eq!(
            doc.summary.as_deref(),
            Some("Tráfico de drogas. Apreensão de entorpecente em quantidade expressiva. Materialidade e autoria comprovadas. Recurso desprovido.")
        );
        assert!(doc.decision.as_deref().unwrap().ends_with("negar provimento ao recurso."));
        assert_eq!(doc.reasoning.len(), 1);
        assert_eq!(doc.file_path, "pdfs/tjsp/apelacao.pdf");
        assert!(!doc.full_text.contains("Baixado do vLex"));
    }

    #[test]
    fn noise_only_input_is_a_failure() {
        let raw = "Baixado do vLex em 01/01/2024\nvLex\n1/1\n";
        let err = build_document(raw, Path::new("x.pdf")).unwrap_err();
        assert!(matches!(err, SanitizeError::EmptyText { .. }));
    }

    #[test]
    fn empty_input_is_a_failure() {
        assert!(build_document("", Path::new("x.pdf")).is_err());
    }
}
