//! Data model for the `generateContent` wire format.
//!
//! These types serialize/deserialize directly to/from the JSON payloads the
//! structured endpoint expects: a request carrying the prompt nested under
//! `contents[].parts[].text`, and a response navigated through
//! `candidates[0].content.parts[0].text`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request body
// ---------------------------------------------------------------------------

/// One text fragment inside a content block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

/// A content block holding one or more parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Request body for a `generateContent` POST.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    /// Wrap a free-text prompt in the fixed contents/parts/text schema.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// Response body
// ---------------------------------------------------------------------------

/// One generation candidate in the response.
///
/// `content` is optional on the wire; extraction treats its absence as a
/// malformed response rather than defaulting to empty output.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Response body of a `generateContent` POST.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}
