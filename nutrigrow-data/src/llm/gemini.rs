//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields the provider reads are modelled; everything else in the
//! response is ignored.

use serde::{Deserialize, Serialize};

/// Request body carrying a single user prompt.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

/// Response body from `generateContent`.
///
/// `candidates` is absent when the prompt was blocked.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, trimmed.
    ///
    /// Returns `None` when there is no candidate or it holds only
    /// whitespace.
    pub fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn request_serialises_single_text_part() {
        let body = serde_json::to_value(GenerateRequest::from_prompt("hello"))
            .expect("should serialise");
        assert_eq!(
            body,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[rstest]
    fn joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": " crop_" }, { "text": "recommendation\n" }], "role": "model" } },
                { "content": { "parts": [{ "text": "general" }] } }
            ],
            "usageMetadata": { "totalTokenCount": 12 }
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).expect("should deserialise");
        assert_eq!(response.into_text().as_deref(), Some("crop_recommendation"));
    }

    #[rstest]
    #[case::blocked_prompt(r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#)]
    #[case::whitespace_only(r#"{ "candidates": [{ "content": { "parts": [{ "text": "  \n" }] } }] }"#)]
    fn responses_without_usable_text_yield_nothing(#[case] json: &str) {
        let response: GenerateResponse = serde_json::from_str(json).expect("should deserialise");
        assert!(response.into_text().is_none());
    }
}
