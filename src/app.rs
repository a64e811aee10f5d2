use dioxus::prelude::*;

use crate::context::LandingAssets;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The landing page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, launch assets, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(LandingAssets::from_launch);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
