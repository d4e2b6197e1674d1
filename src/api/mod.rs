//! Single-shot HTTP exchange layer.
//!
//! Split into cohesive modules:
//! - `client`: generic request construction and dispatch
//! - `generate`: structured JSON POST in the `generateContent` wire format
//! - `lookup`: URL-template GET with a form-encoded parameter substituted in

mod client;
mod generate;
mod lookup;

pub use client::{ApiClient, AuthScheme, RequestSpec};
pub use generate::{extract_candidate_text, generate};
pub use lookup::{encode_query_param, expand_template, lookup};

/// Longest raw-body excerpt embedded in diagnostics.
const BODY_SNIPPET_MAX_BYTES: usize = 2048;

/// UTF-8-safe excerpt of a response body for error messages.
///
/// Bodies can be arbitrarily large; diagnostics carry at most a bounded,
/// char-boundary-aligned prefix.
pub(crate) fn body_snippet(body: &str) -> &str {
    if body.len() <= BODY_SNIPPET_MAX_BYTES {
        return body;
    }
    let mut end = BODY_SNIPPET_MAX_BYTES;
    while end > 0 && !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
