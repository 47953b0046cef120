//! OCR document processing: text → summary → document update.
//!
//! The OCR call and the database write stay with the caller; this builds the
//! row update the storage layer applies.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::summarize::{summarize, TextSummary};
use dossier_core::{Error, Result, UNCLASSIFIED_LABEL};

/// Status stored once a document went through OCR processing.
pub const ANALYZED_STATUS: &str = "analysé";

/// Characters of OCR text quoted in the processing log.
const LOG_EXCERPT_CHARS: usize = 120;

/// A document row carrying OCR output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrRecord {
    pub id: String,
    #[serde(default)]
    pub ocr_text: String,
}

/// Column updates for a processed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpdate {
    pub document_id: String,
    pub ocr_text: String,
    /// Category label, or `"Non classé"` when the text was too short.
    pub category: String,
    pub signature_date: Option<NaiveDate>,
    pub processing_log: String,
    pub status: String,
    /// Summary fields stored as optional metadata columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TextSummary>,
}

/// Summarize a record's OCR text and build its document update.
///
/// `ocr_duration` is how long the upstream OCR took; it is only logged.
pub fn process_ocr_record(
    record: &OcrRecord,
    processed_at: DateTime<Utc>,
    ocr_duration: Duration,
) -> Result<DocumentUpdate> {
    let document_id = record.id.trim();
    if document_id.is_empty() {
        return Err(Error::InvalidInput("missing document id".into()));
    }

    let summary = summarize(&record.ocr_text).ok();
    let category = summary
        .as_ref()
        .map(|s| s.category.label())
        .unwrap_or(UNCLASSIFIED_LABEL);

    let processing_log = format!(
        "[{}] OCR {:.1}s\nCatégorie : {}\nExtrait : {}...",
        processed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ocr_duration.as_secs_f64(),
        summary
            .as_ref()
            .map(|s| s.category.label())
            .unwrap_or("non détectée"),
        excerpt(&record.ocr_text, LOG_EXCERPT_CHARS),
    );

    info!(
        "Processed document {}: {} chars, category {}",
        document_id,
        record.ocr_text.chars().count(),
        category
    );

    Ok(DocumentUpdate {
        document_id: document_id.to_string(),
        ocr_text: record.ocr_text.clone(),
        category: category.to_string(),
        signature_date: summary.as_ref().and_then(|s| s.signature_date()),
        processing_log,
        status: ANALYZED_STATUS.to_string(),
        summary,
    })
}

fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
