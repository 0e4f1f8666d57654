use std::cell::RefCell;

use pavex::Response;
use pavex::http::header::LOCATION;
use pavex::http::{Method, StatusCode};
use pavex_turbo::errors::NavigationError;
use pavex_turbo::navigate::{
    ActionTarget, PageTarget, RouteValues, UrlBuilder, redirect_to_action, redirect_to_page,
};
use pavex_turbo::{RedirectOutcome, TurboAction};

use crate::helpers::{request_head, turbo_xhr};

/// A [`UrlBuilder`] that knows a fixed set of routes and records what it was asked for.
#[derive(Default)]
struct SpyUrlBuilder {
    calls: RefCell<Vec<String>>,
}

impl UrlBuilder for SpyUrlBuilder {
    fn page(
        &self,
        page: &str,
        handler: Option<&str>,
        values: &RouteValues,
        protocol: Option<&str>,
    ) -> Option<String> {
        self.calls.borrow_mut().push(format!(
            "page {page} {handler:?} {values:?} {protocol:?}"
        ));
        match page {
            "/Privacy" => Some("/privacy".into()),
            "/Article" => {
                let id = values.get("id")?;
                let prefix = protocol.map(|p| format!("{p}://example.com")).unwrap_or_default();
                Some(format!("{prefix}/articles/{id}"))
            }
            _ => None,
        }
    }

    fn action(
        &self,
        action: &str,
        controller: Option<&str>,
        values: &RouteValues,
    ) -> Option<String> {
        self.calls
            .borrow_mut()
            .push(format!("action {action} {controller:?} {values:?}"));
        match (controller.unwrap_or("Values"), action) {
            ("Values", "Index") => Some("/values".into()),
            ("Home", "Index") => Some("/".into()),
            _ => None,
        }
    }
}

fn script_of(outcome: RedirectOutcome) -> String {
    outcome.script().expect("Expected a script navigation")
}

#[test]
fn pages_are_resolved_through_the_url_builder() {
    let urls = SpyUrlBuilder::default();
    let head = request_head(Method::POST, "/values", &turbo_xhr());

    let outcome = redirect_to_page(
        &urls,
        &head,
        PageTarget::new("/Privacy"),
        TurboAction::Replace,
    )
    .unwrap();

    assert_eq!(
        script_of(outcome),
        "Turbo.clearCache();\nTurbo.visit('/privacy', { action: \"replace\" });"
    );
    assert_eq!(
        urls.calls.borrow().as_slice(),
        ["page /Privacy None {} None"]
    );
}

#[test]
fn page_targets_forward_every_parameter() {
    let urls = SpyUrlBuilder::default();
    let head = request_head(Method::GET, "/", &[]);

    let target = PageTarget::new("/Article")
        .handler("Edit")
        .value("id", "42")
        .protocol("https");
    let response: Response = redirect_to_page(&urls, &head, target, TurboAction::Active)
        .unwrap()
        .render();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "https://example.com/articles/42");
    assert_eq!(
        urls.calls.borrow().as_slice(),
        [r#"page /Article Some("Edit") {"id": "42"} Some("https")"#]
    );
}

#[test]
fn actions_can_be_qualified_by_controller() {
    let urls = SpyUrlBuilder::default();
    let head = request_head(Method::GET, "/", &[]);

    let unqualified =
        redirect_to_action(&urls, &head, ActionTarget::new("Index"), TurboAction::Active).unwrap();
    assert_eq!(unqualified.location().as_str(), "/values");

    let qualified = redirect_to_action(
        &urls,
        &head,
        ActionTarget::new("Index").controller("Home"),
        TurboAction::Active,
    )
    .unwrap();
    assert_eq!(qualified.location().as_str(), "/");
}

#[test]
fn the_requested_action_is_honored_for_controller_actions() {
    let urls = SpyUrlBuilder::default();
    let head = request_head(Method::POST, "/values", &turbo_xhr());

    let outcome = redirect_to_action(
        &urls,
        &head,
        ActionTarget::new("Index").controller("Home"),
        TurboAction::Replace,
    )
    .unwrap();

    assert_eq!(
        script_of(outcome),
        "Turbo.clearCache();\nTurbo.visit('/', { action: \"replace\" });"
    );
}

#[test]
fn unknown_targets_are_reported() {
    let urls = SpyUrlBuilder::default();
    let head = request_head(Method::GET, "/", &[]);

    let err = redirect_to_page(&urls, &head, PageTarget::new("/Nope"), TurboAction::Active)
        .unwrap_err();
    assert!(matches!(err, NavigationError::Unresolved { .. }));
    assert_eq!(err.to_string(), "No URL could be generated for page `/Nope`");

    let err = redirect_to_action(
        &urls,
        &head,
        ActionTarget::new("Delete").controller("Home"),
        TurboAction::Active,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "No URL could be generated for action `Delete` on `Home`"
    );
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}
