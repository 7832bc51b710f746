use std::path::Path;

use crate::model::{Chunk, Document};

pub const DEFAULT_MAX_TOKENS: usize = 1000;

/// Approximate Portuguese words per model token.
const WORDS_PER_TOKEN: f64 = 0.75;

/// Words per chunk for a token budget, never less than one.
pub fn words_per_chunk(max_tokens: usize) -> usize {
    ((max_tokens as f64 * WORDS_PER_TOKEN).floor() as usize).max(1)
}

/// Chunk ids are prefixed with the case number, or the file stem when the case number is unknown.
fn id_prefix(doc: &Document) -> String {
    match doc.case_number.as_deref() {
        Some(number) if !number.is_empty() => number.to_string(),
        _ => Path::new(&doc.file_path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Split the document text into consecutive, non-overlapping word windows.
pub fn chunk_document(doc: &Document, max_tokens: usize) -> Vec<Chunk> {
    let words: Vec<&str> = doc.full_text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let prefix = id_prefix(doc);
    words
        .chunks(words_per_chunk(max_tokens))
        .enumerate()
        .map(|(i, window)| {
            let sequence = i + 1;
            Chunk {
                chunk_id: format!("{prefix}-{sequence}"),
                sequence,
                offense: doc.offense.clone(),
                court: doc.court.clone(),
                judging_body: doc.judging_body.clone(),
                date: doc.date.clone(),
                summary: doc.summary.clone(),
                text: window.join(" "),
                source_url: doc.source_url.clone(),
                origin_file: doc.file_path.clone(),
            }
        })
        .collect()
}
