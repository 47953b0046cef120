//! Dossier Ingest — heuristic summaries of OCR contract text.
//!
//! OCR itself happens upstream; this crate starts from the extracted text.

pub mod extract;
pub mod file;
pub mod processor;
pub mod summarize;

pub use processor::{process_ocr_record, DocumentUpdate, OcrRecord};
pub use summarize::{summarize, InsufficientText, SummaryOutcome, TextSummary};
