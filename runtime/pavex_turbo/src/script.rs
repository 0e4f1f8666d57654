//! The JavaScript snippets sent back to Turbo in place of a redirect.
use bytes::Bytes;
use http_body_util::Full;
use mime::TEXT_JAVASCRIPT;
use pavex::http::HeaderValue;
use pavex::response::body::TypedBody;

use crate::TurboAction;

/// A [`Response`](pavex::Response) body with `Content-Type` set to
/// `text/javascript`.
///
/// # Example
///
/// ```rust
/// use pavex::Response;
/// use pavex::http::header::CONTENT_TYPE;
/// use pavex_turbo::script::{JavaScript, visit};
///
/// let response = Response::ok().set_typed_body(JavaScript::new(visit("/privacy")));
///
/// assert_eq!(response.headers()[CONTENT_TYPE], "text/javascript");
/// ```
pub struct JavaScript(Bytes);

impl JavaScript {
    /// Wrap a script into a typed body.
    pub fn new(script: impl Into<String>) -> Self {
        Self(Bytes::from(script.into()))
    }
}

impl TypedBody for JavaScript {
    type Body = Full<Bytes>;

    fn content_type(&self) -> HeaderValue {
        HeaderValue::from_static(TEXT_JAVASCRIPT.as_ref())
    }

    fn body(self) -> Self::Body {
        Full::new(self.0)
    }
}

/// Ask Turbo to navigate to `url`.
///
/// ```rust
/// use pavex_turbo::script::visit;
///
/// assert_eq!(visit("/privacy"), "Turbo.visit('/privacy');");
/// ```
pub fn visit(url: &str) -> String {
    format!("Turbo.visit('{}');", escape(url))
}

/// Ask Turbo to drop its page cache, then navigate to `url` using `action`.
///
/// Used after a state-changing request, the cached pages may be stale.
///
/// ```rust
/// use pavex_turbo::{TurboAction, script::clear_cache_and_visit};
///
/// assert_eq!(
///     clear_cache_and_visit("/privacy", TurboAction::Replace),
///     "Turbo.clearCache();\nTurbo.visit('/privacy', { action: \"replace\" });"
/// );
/// ```
pub fn clear_cache_and_visit(url: &str, action: TurboAction) -> String {
    format!(
        "Turbo.clearCache();\nTurbo.visit('{}', {{ action: \"{}\" }});",
        escape(url),
        action
    )
}

/// Escape `url` for a single-quoted JavaScript string literal.
///
/// `<` is escaped too: the snippet may end up inlined in a `<script>` element.
fn escape(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '<' => escaped.push_str("\\x3C"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}
