mod batch;
mod chunker;
mod config;
mod error;
mod model;
mod parser;
mod pdf;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::batch::BatchOptions;
use crate::config::Settings;
use crate::pdf::PdfText;

#[derive(Parser)]
#[command(name = "acordao_sanitizer", about = "Court ruling PDF sanitizer for RAG indexing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, clean, structure and chunk every PDF in a directory
    Run {
        /// Directory scanned recursively for PDFs
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Directory receiving acordaos/ and chunks/
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Token budget per chunk
        #[arg(short = 't', long)]
        max_tokens: Option<usize>,
        /// Skip chunk generation
        #[arg(long)]
        no_chunks: bool,
        /// Process files one at a time
        #[arg(long)]
        sequential: bool,
        /// TOML settings file (default: sanitizer.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check that a JSON artifact, or every JSON file below a directory, parses
    Validate {
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Run {
            input,
            output,
            max_tokens,
            no_chunks,
            sequential,
            config,
        } => {
            let mut settings =
                Settings::load(config.as_deref()).context("failed to load settings")?;
            if let Some(input) = input {
                settings.input_dir = input;
            }
            if let Some(output) = output {
                settings.output_dir = output;
            }
            if let Some(max_tokens) = max_tokens {
                settings.max_tokens = max_tokens;
            }
            if no_chunks {
                settings.generate_chunks = false;
            }
            if sequential {
                settings.parallel = false;
            }

            let opts = BatchOptions {
                max_tokens: settings.max_tokens,
                generate_chunks: settings.generate_chunks,
                parallel: settings.parallel,
            };
            let stats = batch::run(&PdfText, &settings.input_dir, &settings.output_dir, &opts)
                .with_context(|| {
                    format!("batch over {} failed", settings.input_dir.display())
                })?;
            stats.print(&settings.output_dir);
            ExitCode::SUCCESS
        }
        Commands::Validate { path } => {
            let report = store::validate_path(&path)
                .with_context(|| format!("failed to scan {}", path.display()))?;
            for bad in &report.invalid {
                println!("INVALID  {}", bad.display());
            }
            println!(
                "{} JSON files checked, {} invalid",
                report.checked,
                report.invalid.len()
            );
            if report.invalid.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(code)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
