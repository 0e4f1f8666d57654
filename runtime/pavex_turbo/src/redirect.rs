use pavex::http::{HeaderValue, Method, header::LOCATION};
use pavex::request::RequestHead;
use pavex::{IntoResponse, Response};

use crate::TurboAction;
use crate::classify::is_xhr_request;
use crate::errors::InvalidRedirectLocation;
use crate::script::{JavaScript, clear_cache_and_visit, visit};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The target of a redirect.
///
/// It's guaranteed to be a valid `Location` header value.
/// No other constraint is imposed: relative paths, absolute URLs
/// and anything in between are accepted as-is.
pub struct RedirectLocation {
    url: String,
    header: HeaderValue,
}

impl RedirectLocation {
    /// Validate `url` as a redirect target.
    ///
    /// It fails if `url` contains characters that can't appear in a header value,
    /// e.g. control characters.
    pub fn new(url: impl Into<String>) -> Result<Self, InvalidRedirectLocation> {
        let url = url.into();
        match HeaderValue::from_str(&url) {
            Ok(header) => Ok(Self { url, header }),
            Err(source) => Err(InvalidRedirectLocation { url, source }),
        }
    }

    /// The target URL.
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How a redirect must be delivered to the client.
///
/// Build it with [`RedirectOutcome::new`] (or [`turbo_redirect`]), then return it
/// from your request handler: it implements [`IntoResponse`].
pub enum RedirectOutcome {
    /// A regular HTTP redirect, for requests issued by the browser itself.
    Standard {
        /// Where the client should go.
        location: RedirectLocation,
    },
    /// A script asking Turbo to navigate, for requests issued in the background.
    ScriptNavigation {
        /// Where the client should go.
        location: RedirectLocation,
        /// How the navigation should affect the browser history.
        action: TurboAction,
        /// Whether the originating request used any method other than `GET`
        /// (e.g. `POST` from a form submission).
        has_body: bool,
    },
}

impl RedirectOutcome {
    /// Decide how to redirect the current request to `location`.
    ///
    /// Requests carrying `X-Requested-With: XMLHttpRequest` get a
    /// [`ScriptNavigation`](Self::ScriptNavigation), all others
    /// a [`Standard`](Self::Standard) redirect.
    pub fn new(
        location: RedirectLocation,
        action: TurboAction,
        request_head: &RequestHead,
    ) -> Self {
        if !is_xhr_request(&request_head.headers) {
            return Self::Standard { location };
        }
        let has_body = request_head.method != Method::GET;
        Self::ScriptNavigation {
            location,
            action,
            has_body,
        }
    }

    /// The redirect target.
    pub fn location(&self) -> &RedirectLocation {
        match self {
            Self::Standard { location } | Self::ScriptNavigation { location, .. } => location,
        }
    }

    /// The script that will be sent to the client.
    ///
    /// It returns `None` for a [`Standard`](Self::Standard) redirect.
    pub fn script(&self) -> Option<String> {
        match self {
            Self::Standard { .. } => None,
            Self::ScriptNavigation {
                location,
                has_body: false,
                ..
            } => Some(visit(location.as_str())),
            Self::ScriptNavigation {
                location,
                action,
                has_body: true,
            } => Some(clear_cache_and_visit(location.as_str(), *action)),
        }
    }

    /// Render the outcome into an HTTP response.
    ///
    /// - [`Standard`](Self::Standard): `302 Found`, with the `Location` header set.
    /// - [`ScriptNavigation`](Self::ScriptNavigation): `200 OK`, with a `text/javascript` body.
    pub fn render(self) -> Response {
        match self.script() {
            Some(script) => Response::ok().set_typed_body(JavaScript::new(script)),
            None => Response::found().insert_header(LOCATION, self.location().header.clone()),
        }
    }
}

impl IntoResponse for RedirectOutcome {
    fn into_response(self) -> Response {
        self.render()
    }
}

/// Redirect the current request to `url`, the Turbo way.
///
/// It's a shorthand for [`RedirectLocation::new`] followed by [`RedirectOutcome::new`].
pub fn turbo_redirect(
    url: impl Into<String>,
    action: TurboAction,
    request_head: &RequestHead,
) -> Result<RedirectOutcome, InvalidRedirectLocation> {
    let location = RedirectLocation::new(url)?;
    let outcome = RedirectOutcome::new(location, action, request_head);
    tracing::debug!(
        turbo.location = outcome.location().as_str(),
        turbo.script = matches!(outcome, RedirectOutcome::ScriptNavigation { .. }),
        "Redirecting"
    );
    Ok(outcome)
}
