//! URL-template exchange: substitute a form-encoded parameter, GET, return
//! the body verbatim.

use super::client::{ApiClient, RequestSpec};
use crate::error::ApiError;

/// Placeholder replaced by the encoded parameter.
pub const MARKER: &str = "{}";

/// Form-encode one query component. Query strings use `+` for spaces.
pub fn encode_query_param(param: &str) -> String {
    urlencoding::encode(param).replace("%20", "+")
}

/// Substitute the encoded parameter at the template's first `{}` marker.
///
/// A template with no marker is rejected rather than fetched as-is. Only the
/// marker changes; every other template character passes through untouched.
pub fn expand_template(template: &str, param: &str) -> Result<String, ApiError> {
    if !template.contains(MARKER) {
        return Err(ApiError::InvalidTemplate(format!(
            "no `{MARKER}` marker in `{template}`"
        )));
    }
    Ok(template.replacen(MARKER, &encode_query_param(param), 1))
}

/// Expand the template with `param` and GET it, returning the raw body.
///
/// The response is opaque text; no JSON interpretation happens here.
pub async fn lookup(client: &ApiClient, template: &str, param: &str) -> Result<String, ApiError> {
    let url = expand_template(template, param)?;
    client.execute(&RequestSpec::get(url)).await
}
