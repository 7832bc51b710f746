use std::any::Any;
use std::collections::HashSet;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Component, Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::chunker;
use crate::error::{Result, SanitizeError};
use crate::model::RunStats;
use crate::parser;
use crate::pdf::TextSource;
use crate::store::{self, OutputDirs};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub max_tokens: usize,
    pub generate_chunks: bool,
    pub parallel: bool,
}

/// Result of one input file. Folded into [`RunStats`] by the caller's thread.
#[derive(Debug)]
pub enum FileOutcome {
    Saved { chunks: usize },
    Failed(SanitizeError),
}

/// Every `*.pdf` below `dir`, sorted.
pub fn find_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pdfs = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let is_pdf = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if entry.file_type().is_file() && is_pdf {
            pdfs.push(entry.into_path());
        }
    }
    pdfs.sort();
    Ok(pdfs)
}

/// Output name for every input, in input order. A stem shared by several
/// inputs is qualified with its path relative to `root`, and any remaining
/// clash gets a numeric suffix, so no two inputs write the same artifact.
pub fn output_stems(root: &Path, pdfs: &[PathBuf]) -> Vec<String> {
    let plain: Vec<String> = pdfs.iter().map(|p| file_stem(p)).collect();
    let counts = plain.iter().map(|s| s.to_lowercase()).counts();

    let mut taken = HashSet::new();
    pdfs.iter()
        .zip(plain)
        .map(|(path, stem)| {
            let base = if counts[&stem.to_lowercase()] > 1 {
                qualified_stem(root, path)
            } else {
                stem
            };
            let mut name = base.clone();
            let mut n = 2;
            while !taken.insert(name.to_lowercase()) {
                name = format!("{base}_{n}");
                n += 1;
            }
            name
        })
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "documento".to_string())
}

/// `a/b/decisao.pdf` under `root` becomes `a_b_decisao`.
fn qualified_stem(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .join("_")
}

/// Extract, clean, structure and persist one file. Either both artifacts
/// are left on disk or neither is.
fn process_file<S: TextSource>(
    source: &S,
    path: &Path,
    stem: &str,
    out: &OutputDirs,
    opts: &BatchOptions,
) -> Result<usize> {
    let raw = source.extract(path);
    if raw.is_empty() {
        return Err(SanitizeError::EmptyText {
            path: path.to_path_buf(),
        });
    }

    let doc = parser::build_document(&raw, path)?;
    let chunks = match out.chunks_path(stem) {
        Some(chunks_path) if opts.generate_chunks => {
            Some((chunks_path, chunker::chunk_document(&doc, opts.max_tokens)))
        }
        _ => None,
    };

    let doc_path = out.document_path(stem);
    store::save_document(&doc_path, &doc)?;

    let Some((chunks_path, chunks)) = chunks else {
        return Ok(0);
    };
    if let Err(e) = store::save_chunks(&chunks_path, &chunks) {
        if let Err(rm) = fs::remove_file(&doc_path) {
            warn!(file = %doc_path.display(), error = %rm, "could not remove orphaned document");
        }
        return Err(e);
    }
    Ok(chunks.len())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn run_one<S: TextSource>(
    source: &S,
    path: &Path,
    stem: &str,
    out: &OutputDirs,
    opts: &BatchOptions,
    pb: &ProgressBar,
) -> FileOutcome {
    // a panic inside the PDF decoder must only cost this file
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        process_file(source, path, stem, out, opts)
    }))
    .unwrap_or_else(|payload| {
        Err(SanitizeError::Panicked {
            path: path.to_path_buf(),
            message: panic_message(payload.as_ref()),
        })
    });

    let outcome = match result {
        Ok(chunks) => {
            info!(file = %path.display(), chunks, "processed");
            FileOutcome::Saved { chunks }
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "failed");
            FileOutcome::Failed(e)
        }
    };
    pb.inc(1);
    outcome
}

/// Fold per-file outcomes into run counters.
pub fn tally<'a>(outcomes: impl IntoIterator<Item = &'a FileOutcome>) -> RunStats {
    outcomes
        .into_iter()
        .fold(RunStats::default(), |mut stats, outcome| {
            match outcome {
                FileOutcome::Saved { chunks } => {
                    stats.processed += 1;
                    stats.chunks += chunks;
                }
                FileOutcome::Failed(_) => stats.failed += 1,
            }
            stats
        })
}

/// Process every PDF under `input` into `output`. Only failing to enumerate
/// the input or to create the output directories aborts the run.
pub fn run<S: TextSource>(
    source: &S,
    input: &Path,
    output: &Path,
    opts: &BatchOptions,
) -> Result<RunStats> {
    let out = OutputDirs::create(output, opts.generate_chunks)?;
    let pdfs = find_pdfs(input)?;
    let stems = output_stems(input, &pdfs);
    println!("Found {} PDFs in {}", pdfs.len(), input.display());

    let pb = ProgressBar::new(pdfs.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let outcomes: Vec<FileOutcome> = if opts.parallel {
        pdfs.par_iter()
            .zip(stems.par_iter())
            .map(|(path, stem)| run_one(source, path, stem, &out, opts, &pb))
            .collect()
    } else {
        pdfs.iter()
            .zip(&stems)
            .map(|(path, stem)| run_one(source, path, stem, &out, opts, &pb))
            .collect()
    };
    pb.finish_and_clear();

    Ok(tally(&outcomes))
}

// ── Tests ──
