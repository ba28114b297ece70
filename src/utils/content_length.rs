//! Content length extraction.

use reqwest::header::{HeaderMap, CONTENT_LENGTH};

/// Read the declared body length from a header map.
///
/// Returns `None` when the `Content-Length` header is missing or its value is
/// not an u64, in which case the transfer size is unknown.
///
/// # Example
///
/// ```rust
/// use kgutils::utils::content_length_from_headers;
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2048"));
/// assert_eq!(content_length_from_headers(&headers), Some(2048));
/// ```
pub fn content_length_from_headers(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_missing_header() {
        assert_eq!(content_length_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_header_values() {
        let cases = [
            ("0", Some(0)),
            ("10", Some(10)),
            (" 999999999999 ", Some(999_999_999_999)),
            ("-1", None),
            ("ten", None),
            ("", None),
        ];
        for (raw, expected) in cases {
            let mut headers = HeaderMap::new();
            headers.insert(CONTENT_LENGTH, HeaderValue::from_static(raw));
            assert_eq!(content_length_from_headers(&headers), expected, "{:?}", raw);
        }
    }
}
