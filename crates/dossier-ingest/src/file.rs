//! Loading OCR output from disk.

use std::path::Path;

use dossier_core::{Error, Result};

/// Supported OCR output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    /// OCR.space `parse/image` JSON response.
    OcrResponse,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" | "md" => Self::PlainText,
            "json" => Self::OcrResponse,
            _ => Self::Unknown,
        }
    }
}

/// Extract OCR text from a file. `Ok(None)` means nothing usable was found.
pub fn extract_text(path: &Path) -> Result<Option<String>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match FileType::from_extension(ext) {
        FileType::PlainText => Ok(Some(std::fs::read_to_string(path)?)),
        FileType::OcrResponse => extract_ocr_json(path),
        FileType::Unknown => match std::fs::read_to_string(path) {
            Ok(content) if looks_binary(&content) => {
                tracing::warn!("Skipping binary-looking file: {}", path.display());
                Ok(None)
            }
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                Err(Error::UnsupportedFile(path.display().to_string()))
            }
            Err(e) => Err(Error::Io(e)),
        },
    }
}

/// Read an OCR.space response, falling back to the raw JSON when it has no
/// parsed text.
fn extract_ocr_json(path: &Path) -> Result<Option<String>> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    if let Some(text) = parsed_text_from_ocr_response(&value) {
        return Ok(Some(text));
    }
    if value.get("ParsedResults").is_some() {
        // OCR ran but produced nothing.
        tracing::warn!("OCR response without text: {}", path.display());
        return Ok(Some(String::new()));
    }
    Ok(Some(content))
}

/// `ParsedResults[0].ParsedText` from an OCR.space response.
pub fn parsed_text_from_ocr_response(value: &serde_json::Value) -> Option<String> {
    value
        .get("ParsedResults")?
        .as_array()?
        .first()?
        .get("ParsedText")?
        .as_str()
        .map(|s| s.to_string())
}

fn looks_binary(content: &str) -> bool {
    content
        .chars()
        .filter(|c| c.is_control() && *c != '\n' && *c != '\r' && *c != '\t')
        .count()
        > content.len() / 10
}
