use dioxus::prelude::*;

use crate::context::site_config;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The landing page; sections are reached by scrolling, not routing
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, site config context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(site_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
