use gloo_net::http::Request;
use serde_json::Value;

use super::FetchError;

/// GET `url` and return the JSON body.
///
/// Every failure mode (transport, non-2xx status, empty or unparsable body)
/// comes back as a [`FetchError`].
pub async fn fetch_json(url: &str) -> Result<Value, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    parse_payload(&text)
}

/// Parse a response body, treating blank bodies and `null` as empty.
pub fn parse_payload(text: &str) -> Result<Value, FetchError> {
    if text.trim().is_empty() {
        return Err(FetchError::Empty);
    }
    let value: Value =
        serde_json::from_str(text).map_err(|e| FetchError::Malformed(e.to_string()))?;
    if value.is_null() {
        return Err(FetchError::Empty);
    }
    Ok(value)
}
