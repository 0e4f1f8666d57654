//! Errors that can occur while building a Turbo redirect.
use pavex::Response;
use pavex::http::header::InvalidHeaderValue;
use pavex::methods;
use tracing_log_error::log_error;

#[derive(Debug, thiserror::Error)]
#[error("`{url}` can't be used as a redirect target, it is not a valid header value")]
/// The error returned by [`RedirectLocation::new`] when the target URL
/// contains characters that are not allowed in the `Location` header.
///
/// [`RedirectLocation::new`]: crate::RedirectLocation::new
pub struct InvalidRedirectLocation {
    pub(crate) url: String,
    #[source]
    pub(crate) source: InvalidHeaderValue,
}

impl InvalidRedirectLocation {
    /// The URL that was rejected.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[methods]
impl InvalidRedirectLocation {
    /// Convert an [`InvalidRedirectLocation`] into an HTTP response.
    ///
    /// It always returns a `500 Internal Server Error`.
    #[error_handler]
    pub fn into_response(&self) -> Response {
        log_error!(self, "Failed to build a Turbo redirect");
        Response::internal_server_error()
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// The error returned by the helpers in [`navigate`](crate::navigate).
pub enum NavigationError {
    #[error("No URL could be generated for {target}")]
    /// The [`UrlBuilder`](crate::navigate::UrlBuilder) didn't know how to reach the target.
    Unresolved {
        /// A human-readable description of the navigation target.
        target: String,
    },
    #[error(transparent)]
    /// The generated URL can't be used as a redirect target.
    InvalidLocation(#[from] InvalidRedirectLocation),
}

#[methods]
impl NavigationError {
    /// Convert a [`NavigationError`] into an HTTP response.
    ///
    /// It always returns a `500 Internal Server Error`.
    #[error_handler]
    pub fn into_response(&self) -> Response {
        log_error!(self, "Failed to build a Turbo redirect");
        Response::internal_server_error()
    }
}
