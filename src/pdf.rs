use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

/// Produces the raw text of an input file. An empty string means the file
/// could not be read at all.
pub trait TextSource: Sync {
    fn extract(&self, path: &Path) -> String;
}

/// Page-by-page PDF text extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfText;

impl TextSource for PdfText {
    fn extract(&self, path: &Path) -> String {
        extract_text(path)
    }
}

/// Concatenate every page's text with newlines. A page that fails to decode
/// contributes an empty string; a file that fails to load yields `""`.
pub fn extract_text(path: &Path) -> String {
    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "failed to read PDF");
            return String::new();
        }
    };

    let pages: Vec<String> = doc
        .get_pages()
        .into_keys()
        .map(|number| match doc.extract_text(&[number]) {
            Ok(text) => text,
            Err(e) => {
                debug!(file = %path.display(), page = number, error = %e, "page text unavailable");
                String::new()
            }
        })
        .collect();

    pages.join("\n")
}
