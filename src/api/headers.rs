//! HTTP header plumbing between axum and the scheduler.

use crate::scheduling::LlmRequest;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Response header carrying the address of the selected pod.
pub const DESTINATION_ENDPOINT_HEADER: HeaderName =
    HeaderName::from_static("x-gateway-destination-endpoint");

/// Request header used as the request ID when present.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Build a scheduler request from HTTP headers.
///
/// Header names arrive lower-cased. Values that are not visible ASCII are
/// skipped; for repeated headers the first value wins.
pub fn request_from_headers(headers: &HeaderMap) -> LlmRequest {
    let mut map = HashMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            map.entry(name.as_str().to_string())
                .or_insert_with(|| value.to_string());
        }
    }

    match headers
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        Some(id) => LlmRequest::with_id(id, map),
        None => LlmRequest::new(map),
    }
}

/// Attach the destination header for `address`.
///
/// Addresses that are not valid header values are left out.
pub fn inject_destination(headers: &mut HeaderMap, address: &str) {
    match HeaderValue::from_str(address) {
        Ok(value) => {
            headers.insert(DESTINATION_ENDPOINT_HEADER, value);
        }
        Err(_) => {
            tracing::warn!(address, "Selected address is not a valid header value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ENDPOINT_SELECTION_HEADER;

    #[test]
    fn test_request_from_headers_copies_directive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(ENDPOINT_SELECTION_HEADER),
            HeaderValue::from_static("10.0.0.1:8000"),
        );

        let request = request_from_headers(&headers);
        assert_eq!(request.endpoint_directive(), Some("10.0.0.1:8000"));
        assert_eq!(request.request_id.len(), 36);
    }

    #[test]
    fn test_request_from_headers_uses_request_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-42"));

        let request = request_from_headers(&headers);
        assert_eq!(request.request_id, "req-42");
    }

    #[test]
    fn test_request_from_headers_first_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append(
            HeaderName::from_static(ENDPOINT_SELECTION_HEADER),
            HeaderValue::from_static("first"),
        );
        headers.append(
            HeaderName::from_static(ENDPOINT_SELECTION_HEADER),
            HeaderValue::from_static("second"),
        );

        let request = request_from_headers(&headers);
        assert_eq!(request.endpoint_directive(), Some("first"));
    }

    #[test]
    fn test_request_from_headers_skips_opaque_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-binary"),
            HeaderValue::from_bytes(&[0xfa, 0xfb]).unwrap(),
        );

        let request = request_from_headers(&headers);
        assert!(request.header("x-binary").is_none());
    }

    #[test]
    fn test_inject_destination() {
        let mut headers = HeaderMap::new();
        inject_destination(&mut headers, "10.0.0.1:8000");
        assert_eq!(
            headers.get(DESTINATION_ENDPOINT_HEADER).unwrap(),
            "10.0.0.1:8000"
        );
    }
}
