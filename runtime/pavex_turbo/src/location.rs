use pavex::Response;
use pavex::http::header::HOST;
use pavex::http::{HeaderMap, HeaderName, HeaderValue};
use pavex::post_process;
use pavex::request::RequestHead;
use tracing_log_error::log_error;

use crate::TurboConfig;
use crate::classify::is_turbo_request;
use crate::headers::{TURBO_LOCATION, X_FORWARDED_HOST, X_FORWARDED_PROTO};

/// A post-processing middleware to tell Turbo where a request actually ended up.
///
/// If the request was issued by Turbo (see [`is_turbo_request`]), the
/// `Turbo-Location` header is set to its [canonical URL](canonical_url).
/// Other requests are left untouched.
///
/// The header is inserted, never appended: running the middleware more
/// than once produces a single header value.
///
/// # Limitations
///
/// The annotation is best-effort. If the canonical URL can't be determined
/// (e.g. there is no `Host` header) the response is returned as-is.
#[post_process]
pub fn annotate_turbo_location(
    response: Response,
    request_head: &RequestHead,
    config: &TurboConfig,
) -> Response {
    if !is_turbo_request(&request_head.headers) {
        return response;
    }
    let Some(url) = canonical_url(request_head, config) else {
        tracing::debug!("Can't determine the canonical URL of a Turbo request, skipping annotation");
        return response;
    };
    match HeaderValue::from_str(&url) {
        Ok(value) => {
            tracing::trace!(turbo.location = %url, "Annotating Turbo response");
            response.insert_header(TURBO_LOCATION, value)
        }
        Err(e) => {
            log_error!(
                e,
                level: tracing::Level::WARN,
                turbo.location = %url,
                "The canonical URL of a Turbo request is not a valid header value"
            );
            response
        }
    }
}

/// The fully-qualified URL of the current request: scheme, host, path and query.
///
/// - The scheme is taken from the request target, if it's in absolute form.
///   Otherwise `X-Forwarded-Proto` is used, if [trusted](TurboConfig::trust_forwarded_headers),
///   falling back to [`TurboConfig::default_scheme`].
/// - The host is taken from the request target, if present.
///   Otherwise `X-Forwarded-Host` is used, if trusted, falling back to the `Host` header.
///
/// It returns `None` if no host can be determined.
///
/// ```rust
/// use pavex::request::RequestHead;
/// use pavex_turbo::{TurboConfig, canonical_url};
///
/// let (parts, _) = http::Request::get("/search?q=rust")
///     .header("host", "example.com")
///     .body(())
///     .unwrap()
///     .into_parts();
/// let request_head: RequestHead = parts.into();
///
/// assert_eq!(
///     canonical_url(&request_head, &TurboConfig::default()).as_deref(),
///     Some("http://example.com/search?q=rust")
/// );
/// ```
pub fn canonical_url(request_head: &RequestHead, config: &TurboConfig) -> Option<String> {
    let target = &request_head.target;
    let headers = &request_head.headers;

    let scheme = match target.scheme_str() {
        Some(scheme) => scheme,
        None => config
            .trust_forwarded_headers
            .then(|| forwarded(headers, X_FORWARDED_PROTO))
            .flatten()
            .unwrap_or(config.default_scheme.as_str()),
    };
    let host = match target.authority() {
        // Credentials must never end up in a response header.
        Some(authority) => authority.as_str().rsplit('@').next()?,
        None => config
            .trust_forwarded_headers
            .then(|| forwarded(headers, X_FORWARDED_HOST))
            .flatten()
            .or_else(|| header_str(headers, HOST))?,
    };
    let path_and_query = target.path_and_query().map_or("/", |p| p.as_str());

    Some(format!("{scheme}://{host}{path_and_query}"))
}

/// The value closest to the client in a proxy header, e.g. `a` in `a, b`.
fn forwarded(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
    let value = header_str(headers, name)?;
    let first = value.split(',').next()?.trim();
    (!first.is_empty()).then_some(first)
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
    let value = headers.get(name)?.to_str().ok()?.trim();
    (!value.is_empty()).then_some(value)
}
