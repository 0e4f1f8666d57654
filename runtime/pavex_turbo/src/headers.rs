//! The header names and values exchanged with the Turbo client.
use pavex::http::HeaderName;

/// Sent by Turbo on every navigation it initiates.
///
/// Its value is the URL of the page that issued the navigation, but only its
/// presence is meaningful to the server.
pub const TURBO_REFERRER: HeaderName = HeaderName::from_static("turbo-referrer");

/// Set on responses to Turbo requests, carrying the fully-qualified URL
/// that was served.
pub const TURBO_LOCATION: HeaderName = HeaderName::from_static("turbo-location");

/// The conventional header used to mark a request as issued by a script.
pub const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// The value of [`X_REQUESTED_WITH`] for asynchronous background requests.
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// The scheme used by the client to reach a reverse proxy.
pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// The host requested by the client before going through a reverse proxy.
pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");
