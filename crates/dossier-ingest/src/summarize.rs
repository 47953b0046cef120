//! Heuristic contract summary: category, date, amount and a short excerpt.
//!
//! A fast, explainable fallback next to the AI analysis. Deterministic and
//! free of I/O, so it can run from any thread or task without coordination.

use chrono::NaiveDate;
use dossier_core::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::extract::{classify, find_amount, find_date, leading_excerpt};

/// Texts shorter than this (in characters) are not summarized.
pub const MIN_TEXT_CHARS: usize = 50;

pub const DATE_NOT_DETECTED: &str = "Non détectée";
pub const AMOUNT_NOT_INDICATED: &str = "Non indiqué";
pub const INSUFFICIENT_TEXT_MESSAGE: &str = "Texte insuffisant pour générer un résumé.";

pub use crate::extract::passages::{ELLIPSIS, MAX_SUMMARY_CHARS, SUMMARY_SENTENCES};

/// Structured summary of a contract text.
///
/// Every field is always populated; extraction misses carry the sentinel
/// strings above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSummary {
    pub category: Category,
    /// `D/M/YYYY` or `D-M-YYYY` as found in the text, or `DATE_NOT_DETECTED`.
    pub detected_date: String,
    /// Amount with its currency token as found, or `AMOUNT_NOT_INDICATED`.
    pub detected_amount: String,
    pub summary_text: String,
}

impl TextSummary {
    /// Detected date, `None` when the sentinel is set.
    pub fn date(&self) -> Option<&str> {
        Some(self.detected_date.as_str()).filter(|d| *d != DATE_NOT_DETECTED)
    }

    /// Detected amount, `None` when the sentinel is set.
    pub fn amount(&self) -> Option<&str> {
        Some(self.detected_amount.as_str()).filter(|a| *a != AMOUNT_NOT_INDICATED)
    }

    /// The detected date read day-first, if it is a real calendar date.
    pub fn signature_date(&self) -> Option<NaiveDate> {
        let mut parts = self.date()?.split(['/', '-']);
        let day: u32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        let year: i32 = parts.next()?.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// The text was empty or too short to summarize.
///
/// This is an expected outcome (blank scan, failed OCR) rather than a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Texte insuffisant pour générer un résumé.")]
pub struct InsufficientText {
    /// Length of the rejected text in characters.
    pub length: usize,
}

/// Summarize OCR-extracted contract text.
pub fn summarize(text: &str) -> Result<TextSummary, InsufficientText> {
    let length = text.chars().count();
    if length < MIN_TEXT_CHARS {
        debug!("Text too short to summarize ({} chars)", length);
        return Err(InsufficientText { length });
    }

    let summary = TextSummary {
        category: classify(text),
        detected_date: find_date(text).unwrap_or(DATE_NOT_DETECTED).to_string(),
        detected_amount: find_amount(text)
            .unwrap_or(AMOUNT_NOT_INDICATED)
            .to_string(),
        summary_text: leading_excerpt(text),
    };

    debug!(
        category = %summary.category,
        date = %summary.detected_date,
        amount = %summary.detected_amount,
        "Summarized {} chars",
        length
    );
    Ok(summary)
}

/// Serializable form of a summarization result, for rendering layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryOutcome {
    Summary(TextSummary),
    InsufficientText { message: String, length: usize },
}

impl From<Result<TextSummary, InsufficientText>> for SummaryOutcome {
    fn from(result: Result<TextSummary, InsufficientText>) -> Self {
        match result {
            Ok(summary) => Self::Summary(summary),
            Err(e) => Self::InsufficientText {
                message: e.to_string(),
                length: e.length,
            },
        }
    }
}
