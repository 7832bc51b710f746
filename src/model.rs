use serde::{Deserialize, Serialize};

/// One processed court ruling. Field names on disk follow the indexer's schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "tribunal")]
    pub court: Option<String>,
    #[serde(rename = "orgao_julgador")]
    pub judging_body: Option<String>,
    #[serde(rename = "processo")]
    pub case_number: Option<String>,
    #[serde(rename = "relator")]
    pub rapporteur: Option<String>,
    #[serde(rename = "data")]
    pub date: Option<String>,
    #[serde(rename = "crime")]
    pub offense: Option<String>,
    #[serde(rename = "ementa")]
    pub summary: Option<String>,
    #[serde(rename = "fundamentos")]
    pub reasoning: Vec<String>,
    #[serde(rename = "decisao")]
    pub decision: Option<String>,
    #[serde(rename = "texto_integral")]
    pub full_text: String,
    #[serde(rename = "fonte")]
    pub source_url: Option<String>,
    #[serde(rename = "caminho_arquivo")]
    pub file_path: String,
}

/// A word window of a document's text plus the document-level fields the
/// indexer filters on. Chunks are copies; they never point back at the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub chunk_id: String,
    #[serde(skip)]
    pub sequence: usize,
    #[serde(rename = "crime")]
    pub offense: Option<String>,
    #[serde(rename = "tribunal")]
    pub court: Option<String>,
    #[serde(rename = "orgao_julgador")]
    pub judging_body: Option<String>,
    #[serde(rename = "data")]
    pub date: Option<String>,
    #[serde(rename = "ementa")]
    pub summary: Option<String>,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "fonte")]
    pub source_url: Option<String>,
    #[serde(rename = "arquivo_origem")]
    pub origin_file: String,
}

/// Counters for a single batch run. Owned by the orchestrator, folded from
/// per-file outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub failed: usize,
    pub chunks: usize,
}

impl RunStats {
    pub fn print(&self, output_dir: &std::path::Path) {
        println!("\n{}", "=".repeat(60));
        println!("PROCESSING REPORT");
        println!("{}", "=".repeat(60));
        println!("Processed:        {}", self.processed);
        println!("Failed:           {}", self.failed);
        println!("Chunks generated: {}", self.chunks);
        println!("Output:           {}", output_dir.display());
        println!("{}", "=".repeat(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_serializes_with_indexer_keys() {
        let doc = Document {
            court: Some("STJ".into()),
            reasoning: vec!["fundamento".into()],
            full_text: "Decisão sobre furto".into(),
            file_path: "in/a.pdf".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["tribunal"], "STJ");
        assert_eq!(value["texto_integral"], "Decisão sobre furto");
        assert_eq!(value["caminho_arquivo"], "in/a.pdf");
        assert!(value["processo"].is_null());
        assert_eq!(value["fundamentos"][0], "fundamento");
    }

    #[test]
    fn chunk_omits_sequence_field() {
        let chunk = Chunk {
            chunk_id: "HC-1".into(),
            sequence: 1,
            offense: None,
            court: None,
            judging_body: None,
            date: None,
            summary: None,
            text: "texto".into(),
            source_url: None,
            origin_file: "a.pdf".into(),
        };
        let value = serde_json::to_value(&chunk).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 9);
        assert!(!keys.contains(&"sequence"));
        assert_eq!(value["texto"], "texto");
        assert_eq!(value["arquivo_origem"], "a.pdf");
    }
}
