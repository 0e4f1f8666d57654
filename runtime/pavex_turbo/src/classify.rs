//! Tell Turbo requests and asynchronous requests apart from regular page loads.
//!
//! Both checks only look at the request headers. A missing header is never an error,
//! the request is simply not classified as such.
use pavex::http::HeaderMap;

use crate::headers::{TURBO_REFERRER, X_REQUESTED_WITH, XML_HTTP_REQUEST};

/// Returns `true` if the request was issued by the Turbo client.
///
/// The `Turbo-Referrer` header is checked for presence only, its value is ignored.
///
/// ```rust
/// use pavex::http::{HeaderMap, HeaderValue};
/// use pavex_turbo::{classify::is_turbo_request, headers::TURBO_REFERRER};
///
/// let mut headers = HeaderMap::new();
/// assert!(!is_turbo_request(&headers));
///
/// headers.insert(TURBO_REFERRER, HeaderValue::from_static(""));
/// assert!(is_turbo_request(&headers));
/// ```
pub fn is_turbo_request(headers: &HeaderMap) -> bool {
    headers.contains_key(TURBO_REFERRER)
}

/// Returns `true` if the request was issued in the background by a script.
///
/// It checks that `X-Requested-With` is set to exactly `XMLHttpRequest`.
/// If the header appears more than once, only the first value is considered.
pub fn is_xhr_request(headers: &HeaderMap) -> bool {
    headers
        .get(X_REQUESTED_WITH)
        .is_some_and(|value| value.as_bytes() == XML_HTTP_REQUEST.as_bytes())
}
