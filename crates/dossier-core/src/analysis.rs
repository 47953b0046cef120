//! AI contract-analysis payloads.
//!
//! The analysis model is asked for JSON but does not always comply, so a
//! response is either structured fields or the raw text it returned.

use serde::{Deserialize, Serialize};

/// Shown when an analysis carries no summary.
pub const ANALYSIS_UNAVAILABLE: &str = "Analyse non disponible.";

/// Structured fields of a contract analysis. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractAnalysis {
    /// Plain-language summary (three sentences at most).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    /// Clarity / confidence score out of 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(
        default,
        rename = "type",
        alias = "contract_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub contract_type: Option<String>,
    /// Key clauses: duration, renewal, termination, guarantees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clauses: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, alias = "clauses_risque", skip_serializing_if = "Vec::is_empty")]
    pub risky_clauses: Vec<String>,
}

/// An AI analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum AnalysisPayload {
    Structured(ContractAnalysis),
    RawText(String),
}

impl AnalysisPayload {
    /// Parse a model response. A JSON object becomes `Structured`; anything
    /// else, including malformed JSON, is kept as `RawText`.
    pub fn parse(content: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(content.trim()) {
            Ok(value @ serde_json::Value::Object(_)) => {
                match serde_json::from_value::<ContractAnalysis>(value) {
                    Ok(analysis) => Self::Structured(analysis),
                    Err(e) => {
                        tracing::debug!("Analysis JSON has unexpected shape: {}", e);
                        Self::RawText(content.to_string())
                    }
                }
            }
            _ => Self::RawText(content.to_string()),
        }
    }

    /// Summary to display. Raw text is its own summary.
    pub fn resume(&self) -> &str {
        match self {
            Self::Structured(a) => a
                .resume
                .as_deref()
                .filter(|r| !r.trim().is_empty())
                .unwrap_or(ANALYSIS_UNAVAILABLE),
            Self::RawText(text) if !text.trim().is_empty() => text.as_str(),
            Self::RawText(_) => ANALYSIS_UNAVAILABLE,
        }
    }

    /// Score clamped to 0..=100, if the model gave one.
    pub fn score(&self) -> Option<u8> {
        match self {
            Self::Structured(ContractAnalysis {
                score: Some(s), ..
            }) if s.is_finite() => Some(s.round().clamp(0.0, 100.0) as u8),
            _ => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_response() {
        let payload = AnalysisPayload::parse(
            r#"{"type": "Assurance", "resume": "Contrat annuel.", "score": 87,
                "clauses": {"durée": "12 mois"}, "clauses_risque": ["Résiliation tardive"]}"#,
        );
        assert!(payload.is_structured());
        assert_eq!(payload.resume(), "Contrat annuel.");
        assert_eq!(payload.score(), Some(87));
        match payload {
            AnalysisPayload::Structured(a) => {
                assert_eq!(a.contract_type.as_deref(), Some("Assurance"));
                assert_eq!(a.risky_clauses, vec!["Résiliation tardive".to_string()]);
                assert_eq!(a.clauses.unwrap()["durée"], "12 mois");
            }
            AnalysisPayload::RawText(_) => unreachable!(),
        }
    }

    #[test]
    fn test_prose_falls_back_to_raw_text() {
        let payload = AnalysisPayload::parse("Ce contrat semble équilibré.");
        assert_eq!(
            payload,
            AnalysisPayload::RawText("Ce contrat semble équilibré.".into())
        );
        assert_eq!(payload.resume(), "Ce contrat semble équilibré.");
        assert_eq!(payload.score(), None);
    }

    #[test]
    fn test_non_object_json_is_raw_text() {
        assert!(!AnalysisPayload::parse("[1, 2, 3]").is_structured());
        assert!(!AnalysisPayload::parse("{\"resume\": ").is_structured());
    }

    #[test]
    fn test_missing_resume_and_clamped_score() {
        let payload = AnalysisPayload::parse(r#"{"score": 140.2}"#);
        assert_eq!(payload.resume(), ANALYSIS_UNAVAILABLE);
        assert_eq!(payload.score(), Some(100));
        assert_eq!(AnalysisPayload::parse("  ").resume(), ANALYSIS_UNAVAILABLE);
    }
}
