use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{Result, SanitizeError};
use crate::model::{Chunk, Document};

pub const DOCUMENTS_DIR: &str = "acordaos";
pub const CHUNKS_DIR: &str = "chunks";

/// Output layout under a run's output directory.
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub documents: PathBuf,
    pub chunks: Option<PathBuf>,
}

impl OutputDirs {
    /// Create `<root>/acordaos` and, when chunking, `<root>/chunks`.
    pub fn create(root: &Path, with_chunks: bool) -> Result<Self> {
        let documents = root.join(DOCUMENTS_DIR);
        fs::create_dir_all(&documents).map_err(|e| SanitizeError::io(&documents, e))?;

        let chunks = if with_chunks {
            let dir = root.join(CHUNKS_DIR);
            fs::create_dir_all(&dir).map_err(|e| SanitizeError::io(&dir, e))?;
            Some(dir)
        } else {
            None
        };

        Ok(Self {
            documents,
            chunks,
        })
    }

    pub fn document_path(&self, stem: &str) -> PathBuf {
        self.documents.join(format!("{stem}.json"))
    }

    pub fn chunks_path(&self, stem: &str) -> Option<PathBuf> {
        self.chunks
            .as_ref()
            .map(|dir| dir.join(format!("{stem}_chunks.json")))
    }
}

/// Pretty-printed UTF-8 JSON; non-ASCII text is written as-is.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value).map_err(|e| SanitizeError::json(path, e))?;
    fs::write(path, body).map_err(|e| SanitizeError::io(path, e))
}

pub fn save_document(path: &Path, doc: &Document) -> Result<()> {
    write_json(path, doc)
}

pub fn save_chunks(path: &Path, chunks: &[Chunk]) -> Result<()> {
    write_json(path, chunks)
}

/// Parse a JSON file, reporting why it is not well formed.
pub fn check_json(path: &Path) -> Result<()> {
    let body = fs::read_to_string(path).map_err(|e| SanitizeError::io(path, e))?;
    serde_json::from_str::<serde_json::Value>(&body)
        .map(|_| ())
        .map_err(|e| SanitizeError::json(path, e))
}

/// Whether the file at `path` parses as JSON. Failures are logged.
pub fn validate_json(path: &Path) -> bool {
    match check_json(path) {
        Ok(()) => true,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "invalid JSON artifact");
            false
        }
    }
}

/// Validation summary for a file or a directory of artifacts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checked: usize,
    pub invalid: Vec<PathBuf>,
}

/// Validate one JSON file, or every `*.json` below a directory.
pub fn validate_path(path: &Path) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();
    if path.is_file() {
        report.checked = 1;
        if !validate_json(path) {
            report.invalid.push(path.to_path_buf());
        }
        return Ok(report);
    }

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        let p = entry.path();
        if !entry.file_type().is_file() || p.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        report.checked += 1;
        if !validate_json(p) {
            report.invalid.push(p.to_path_buf());
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_without_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputDirs::create(&dir.path().join("saida"), false).unwrap();
        assert!(out.documents.is_dir());
        assert!(!dir.path().join("saida").join(CHUNKS_DIR).exists());
        assert_eq!(out.chunks_path("a"), None);
        assert!(out.document_path("a").ends_with("acordaos/a.json"));
    }

    #[test]
    fn document_is_written_with_literal_accents() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputDirs::create(dir.path(), true).unwrap();
        let doc = Document {
            offense: Some("Receptação".into()),
            full_text: "Acórdão".into(),
            file_path: "x.pdf".into(),
            ..Default::default()
        };
        let path = out.document_path("x");
        save_document(&path, &doc).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("\"crime\": \"Receptação\""));
        assert!(body.contains("\n  \"texto_integral\": \"Acórdão\""));
        assert!(validate_json(&path));
        let back: Document = serde_json::from_str(&body).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn malformed_json_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quebrado.json");
        std::fs::write(&path, "{\"chunk_id\": ").unwrap();
        assert!(!validate_json(&path));
        assert!(matches!(check_json(&path), Err(SanitizeError::Json { .. })));
        assert!(!validate_json(&dir.path().join("ausente.json")));
    }

    #[test]
    fn directory_validation_counts_json_only() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join(CHUNKS_DIR);
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("ok.json"), "[]").unwrap();
        std::fs::write(nested.join("bad.json"), "[1,").unwrap();
        std::fs::write(nested.join("notes.txt"), "{").unwrap();

        let report = validate_path(dir.path()).unwrap();
        assert_eq!(report.checked, 2);
        assert_eq!(report.invalid, vec![nested.join("bad.json")]);
    }
}
