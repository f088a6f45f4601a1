use axum::extract::Multipart;
use axum::http::{HeaderMap, header::CONTENT_TYPE};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

use crate::errors::SummarizeError;

/// Name of the textarea in the page form.
pub const TEXT_FIELD: &str = "text";

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// `+` is turned into a space before percent-decoding so that an encoded
/// `%2B` survives as a literal plus sign.
///
/// # Examples
///
/// ```
/// use textsum::web::form::decode_url_component;
///
/// assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("1%2B1%3D2").unwrap(), "1+1=2");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| format!("Failed to decode URL component: {e}"))
}

/// Parses a urlencoded body into a field map. When a key repeats, the first
/// value wins. A pair without `=` is a key with an empty value.
pub fn parse_form_data(form_data: &str) -> Result<HashMap<String, String>, String> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = match pair.find('=') {
            Some(idx) => (&pair[..idx], &pair[idx + 1..]),
            None => (pair, ""),
        };

        let key = decode_url_component(raw_key).map_err(|e| format!("Failed to decode key: {e}"))?;
        let value =
            decode_url_component(raw_value).map_err(|e| format!("Failed to decode value: {e}"))?;

        map.entry(key).or_insert(value);
    }

    Ok(map)
}

/// Extracts the submitted text from a form body.
///
/// # Errors
///
/// `ParseError` if the body cannot be decoded, `MissingField` if it has no
/// `text` field. An empty `text` field is not an error.
pub fn extract_text(form_data: &str) -> Result<String, SummarizeError> {
    let mut fields = parse_form_data(form_data).map_err(SummarizeError::ParseError)?;
    fields
        .remove(TEXT_FIELD)
        .ok_or_else(|| SummarizeError::MissingField(TEXT_FIELD.to_string()))
}

/// True when the request declares a `multipart/form-data` body.
#[must_use]
pub fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("multipart/form-data"))
}

/// Extracts the submitted text from a multipart body.
///
/// File parts are skipped: an upload named `text` is not the form field.
///
/// # Errors
///
/// `ParseError` if the body is not valid multipart, `MissingField` if no
/// plain `text` part is present.
pub async fn extract_multipart_text(mut multipart: Multipart) -> Result<String, SummarizeError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SummarizeError::ParseError(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some(TEXT_FIELD) && field.file_name().is_none() {
            return field.text().await.map_err(|e| {
                SummarizeError::ParseError(format!("Failed to read multipart field: {e}"))
            });
        }
    }

    Err(SummarizeError::MissingField(TEXT_FIELD.to_string()))
}
