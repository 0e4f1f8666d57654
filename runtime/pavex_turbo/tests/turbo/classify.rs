use pavex::http::{HeaderMap, HeaderValue};
use pavex_turbo::classify::{is_turbo_request, is_xhr_request};
use pavex_turbo::headers::{TURBO_REFERRER, X_REQUESTED_WITH};

#[test]
fn requests_without_markers_are_not_classified() {
    let headers = HeaderMap::new();
    assert!(!is_turbo_request(&headers));
    assert!(!is_xhr_request(&headers));
}

#[test]
fn turbo_referrer_is_checked_for_presence_only() {
    for value in ["", "http://example.com/", "whatever"] {
        let mut headers = HeaderMap::new();
        headers.insert(TURBO_REFERRER, HeaderValue::from_static(value));
        assert!(is_turbo_request(&headers), "value: {value:?}");
        // A Turbo request is not necessarily asynchronous.
        assert!(!is_xhr_request(&headers));
    }
}

#[test]
fn xhr_marker_must_match_exactly() {
    for (value, expected) in [
        ("XMLHttpRequest", true),
        ("xmlhttprequest", false),
        ("XMLHttpRequest ", false),
        ("fetch", false),
        ("", false),
    ] {
        let mut headers = HeaderMap::new();
        headers.insert(X_REQUESTED_WITH, HeaderValue::from_static(value));
        assert_eq!(is_xhr_request(&headers), expected, "value: {value:?}");
    }
}

#[test]
fn only_the_first_xhr_marker_counts() {
    let mut headers = HeaderMap::new();
    headers.append(X_REQUESTED_WITH, HeaderValue::from_static("fetch"));
    headers.append(X_REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
    assert!(!is_xhr_request(&headers));
}
