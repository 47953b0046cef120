//! Command-line interface.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use dossier_core::{filter_chips, Category};
use dossier_ingest::file::extract_text;
use dossier_ingest::{summarize, SummaryOutcome};

#[derive(Parser, Debug)]
#[command(name = "dossier", version, about = "Contract text summarizer and API server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve {
        /// Port to listen on (overrides DOSSIER_PORT / PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Address to bind (overrides DOSSIER_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Summarize OCR output files (.txt or OCR.space .json)
    Summarize {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print one JSON object per file
        #[arg(long)]
        json: bool,
    },
    /// List categories with their keywords
    Categories,
}

/// Summarize each file and write the results to `out`.
pub fn summarize_files(files: &[PathBuf], json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    for path in files {
        let outcome = summarize_file(path)?;
        if json {
            let mut value = serde_json::to_value(&outcome)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("file".into(), path.display().to_string().into());
            }
            writeln!(out, "{}", value)?;
        } else {
            writeln!(out, "{}", path.display())?;
            write!(out, "{}", render_outcome(&outcome))?;
        }
    }
    Ok(())
}

fn summarize_file(path: &Path) -> anyhow::Result<SummaryOutcome> {
    let text = extract_text(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .unwrap_or_default();
    Ok(SummaryOutcome::from(summarize(&text)))
}

/// Human-readable rendering: the four fields, or the insufficient-text message.
pub fn render_outcome(outcome: &SummaryOutcome) -> String {
    match outcome {
        SummaryOutcome::Summary(s) => format!(
            "  Catégorie : {}\n  Date      : {}\n  Montant   : {}\n  Résumé    : {}\n",
            s.category, s.detected_date, s.detected_amount, s.summary_text
        ),
        SummaryOutcome::InsufficientText { message, .. } => format!("  {}\n", message),
    }
}

pub fn print_categories(out: &mut impl Write) -> anyhow::Result<()> {
    for category in Category::ALL {
        let keywords = category.keywords();
        if keywords.is_empty() {
            writeln!(out, "{}", category)?;
        } else {
            writeln!(out, "{}: {}", category, keywords.join(", "))?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Filters: {}", filter_chips().join(" | "))?;
    Ok(())
}
