/*!
Turbo navigation support for Pavex.

# What is Turbo?

[Turbo](https://turbo.hotwired.dev/) (and its predecessor, Turbolinks) is a client-side
script that makes a server-rendered application feel like a single-page app.
It intercepts link clicks and form submissions, fetches the next page in the
background and swaps it in without a full reload.

For that to work, the server has to cooperate in two places:

- **Redirects**. A redirect issued in response to a background request would be followed
  transparently by the browser, leaving the client unaware that it should update the address
  bar. Instead, the server replies with a small `text/javascript` snippet which asks Turbo
  to perform the navigation. See [`RedirectOutcome`].
- **Final location**. When the server internally rewrites or redirects a request,
  Turbo needs to know where it actually ended up. The server attaches the fully-qualified
  URL it served via the `Turbo-Location` response header.
  See [`annotate_turbo_location`].

# Installation

```rust
use pavex::Blueprint;

let mut bp = Blueprint::new();
pavex_turbo::register(&mut bp);
```

# Redirecting

```rust
use pavex::request::RequestHead;
use pavex_turbo::{turbo_redirect, InvalidRedirectLocation, RedirectOutcome, TurboAction};

pub fn submit(request_head: &RequestHead) -> Result<RedirectOutcome, InvalidRedirectLocation> {
    turbo_redirect("/privacy", TurboAction::Active, request_head)
}
```
*/
mod action;
pub mod classify;
mod config;
pub mod errors;
pub mod headers;
mod location;
pub mod navigate;
mod redirect;
pub mod script;

pub use action::TurboAction;
pub use config::TurboConfig;
pub use errors::InvalidRedirectLocation;
pub use location::{annotate_turbo_location, canonical_url};
pub use redirect::{RedirectLocation, RedirectOutcome, turbo_redirect};

pub use config::TURBO_CONFIG;
pub use errors::{INVALID_REDIRECT_LOCATION_INTO_RESPONSE, NAVIGATION_ERROR_INTO_RESPONSE};
pub use location::ANNOTATE_TURBO_LOCATION;

/// Register every component bundled with this crate with a [`Blueprint`]:
///
/// - [`TurboConfig`], under the `turbo` key;
/// - the [`annotate_turbo_location`] post-processing middleware;
/// - the error handlers for [`InvalidRedirectLocation`] and
///   [`NavigationError`](errors::NavigationError).
///
/// Call it once, while assembling your application blueprint.
/// There is no need to [`import`](pavex::Blueprint::import) this crate on top of it.
///
/// [`Blueprint`]: pavex::Blueprint
pub fn register(bp: &mut pavex::Blueprint) {
    bp.config(TURBO_CONFIG);
    bp.post_process(ANNOTATE_TURBO_LOCATION);
    bp.error_handler(INVALID_REDIRECT_LOCATION_INTO_RESPONSE);
    bp.error_handler(NAVIGATION_ERROR_INTO_RESPONSE);
}
