//! Structured `generateContent` exchange: JSON POST, fixed extraction path.

use super::client::{ApiClient, AuthScheme, RequestSpec};
use super::body_snippet;
use crate::error::ApiError;
use crate::types::{GenerateRequest, GenerateResponse};

/// Send `prompt` to a `generateContent` endpoint and return the model text.
///
/// The credential is passed explicitly by the caller; it travels as a `?key=`
/// query parameter the way the provider expects. The body is read to a string
/// before parsing so every failure path after the read can include the raw
/// response, and no path before it references unread data.
pub async fn generate(
    client: &ApiClient,
    endpoint: &str,
    api_key: &str,
    prompt: &str,
) -> Result<String, ApiError> {
    let spec = RequestSpec::post_json(endpoint, &GenerateRequest::from_prompt(prompt))?
        .with_auth(AuthScheme::QueryKey(api_key.to_string()));

    let raw = client.execute(&spec).await?;
    let response: GenerateResponse = serde_json::from_str(&raw).map_err(|err| {
        ApiError::InvalidResponse(format!(
            "could not parse response JSON ({err}); response was: {}",
            body_snippet(&raw)
        ))
    })?;

    extract_candidate_text(&response)
        .map(str::to_string)
        .map_err(|err| match err {
            ApiError::InvalidResponse(msg) => ApiError::InvalidResponse(format!(
                "{msg}; response was: {}",
                body_snippet(&raw)
            )),
            other => other,
        })
}

/// Navigate `candidates[0].content.parts[0].text` in a parsed response.
///
/// Extraction fails closed: each missing level is reported by name, and no
/// partial or default output is ever produced. Alternate providers can be
/// supported by swapping this function.
pub fn extract_candidate_text(response: &GenerateResponse) -> Result<&str, ApiError> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| ApiError::InvalidResponse("response contained no candidates".into()))?;
    let content = candidate
        .content
        .as_ref()
        .ok_or_else(|| ApiError::InvalidResponse("first candidate has no content".into()))?;
    let part = content
        .parts
        .first()
        .ok_or_else(|| ApiError::InvalidResponse("candidate content has no parts".into()))?;
    Ok(&part.text)
}
