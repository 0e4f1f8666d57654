//! Redirect to a page or an action, resolving its URL along the way.
//!
//! Pavex doesn't generate URLs for you: bring your own [`UrlBuilder`] and
//! the helpers in this module will turn its output into a [`RedirectOutcome`].
//!
//! ```rust
//! use pavex::request::RequestHead;
//! use pavex_turbo::navigate::{redirect_to_page, PageTarget, RouteValues, UrlBuilder};
//! use pavex_turbo::{errors::NavigationError, RedirectOutcome, TurboAction};
//!
//! pub struct Pages;
//!
//! impl UrlBuilder for Pages {
//!     fn page(
//!         &self,
//!         page: &str,
//!         _handler: Option<&str>,
//!         _values: &RouteValues,
//!         _protocol: Option<&str>,
//!     ) -> Option<String> {
//!         Some(page.to_lowercase())
//!     }
//!
//!     fn action(
//!         &self,
//!         _action: &str,
//!         _controller: Option<&str>,
//!         _values: &RouteValues,
//!     ) -> Option<String> {
//!         None
//!     }
//! }
//!
//! pub fn submit(request_head: &RequestHead) -> Result<RedirectOutcome, NavigationError> {
//!     redirect_to_page(&Pages, request_head, PageTarget::new("/Privacy"), TurboAction::Active)
//! }
//! ```
use std::collections::BTreeMap;

use pavex::request::RequestHead;

use crate::errors::NavigationError;
use crate::{RedirectOutcome, TurboAction, turbo_redirect};

/// Route parameters used to fill in a generated URL.
pub type RouteValues = BTreeMap<String, String>;

/// Generates the URL of a page or of an action.
///
/// Implementations own the routing knowledge of the application. The
/// returned URL is used verbatim as redirect target.
pub trait UrlBuilder {
    /// The URL of `page`, optionally targeting one of its `handler`s.
    ///
    /// If `protocol` is set, an absolute URL using that scheme is expected.
    /// Returns `None` if the page is unknown.
    fn page(
        &self,
        page: &str,
        handler: Option<&str>,
        values: &RouteValues,
        protocol: Option<&str>,
    ) -> Option<String>;

    /// The URL of `action`, optionally qualified by its `controller`.
    ///
    /// Returns `None` if the action is unknown.
    fn action(
        &self,
        action: &str,
        controller: Option<&str>,
        values: &RouteValues,
    ) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The page to redirect to.
pub struct PageTarget {
    /// The name of the page, e.g. `/Privacy`.
    pub page: String,
    /// The page handler to invoke, if any.
    pub handler: Option<String>,
    /// Route parameters.
    pub values: RouteValues,
    /// The scheme of the generated URL, if it must be absolute.
    pub protocol: Option<String>,
}

impl PageTarget {
    /// Target `page`, without handler, route values or protocol.
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            ..Default::default()
        }
    }

    /// Set the page handler.
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    /// Add a route parameter.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Ask for an absolute URL using `protocol`.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The action to redirect to.
pub struct ActionTarget {
    /// The name of the action.
    pub action: String,
    /// The controller that owns the action.
    ///
    /// When `None`, the [`UrlBuilder`] decides (usually, the current controller).
    pub controller: Option<String>,
    /// Route parameters.
    pub values: RouteValues,
}

impl ActionTarget {
    /// Target `action`, without controller or route values.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    /// Qualify the action with its controller.
    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    /// Add a route parameter.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

/// Redirect the current request to a page.
pub fn redirect_to_page<U: UrlBuilder + ?Sized>(
    urls: &U,
    request_head: &RequestHead,
    target: PageTarget,
    action: TurboAction,
) -> Result<RedirectOutcome, NavigationError> {
    let url = urls
        .page(
            &target.page,
            target.handler.as_deref(),
            &target.values,
            target.protocol.as_deref(),
        )
        .ok_or_else(|| NavigationError::Unresolved {
            target: format!("page `{}`", target.page),
        })?;
    Ok(turbo_redirect(url, action, request_head)?)
}

/// Redirect the current request to an action.
///
/// `action` is honored whether or not the target is qualified by a controller.
pub fn redirect_to_action<U: UrlBuilder + ?Sized>(
    urls: &U,
    request_head: &RequestHead,
    target: ActionTarget,
    action: TurboAction,
) -> Result<RedirectOutcome, NavigationError> {
    let url = urls
        .action(&target.action, target.controller.as_deref(), &target.values)
        .ok_or_else(|| NavigationError::Unresolved {
            target: match &target.controller {
                Some(controller) => format!("action `{}` on `{controller}`", target.action),
                None => format!("action `{}`", target.action),
            },
        })?;
    Ok(turbo_redirect(url, action, request_head)?)
}
