//! Home page - the Rillic "coming soon" landing.
//!
//! A dark gradient with floating icons behind the tilt card and headline.

use dioxus::prelude::*;
use rillic_ui::{FloatingIcons, TiltCard};

use crate::context::use_landing_assets;

/// Landing page component.
#[component]
pub fn Home() -> Element {
    let assets = use_landing_assets();

    rsx! {
        main { class: "home",
            // Floating icon background
            div { class: "home-backdrop",
                FloatingIcons {
                    image_src: assets.icon_src.clone(),
                    seed: assets.backdrop_seed,
                }
            }

            div { class: "home-content",
                div { class: "home-stack",
                    div { class: "home-card",
                        TiltCard { image_src: assets.icon_src.clone() }
                    }

                    // Leaves room for the card caption
                    div { class: "home-gap" }

                    div { class: "home-copy",
                        h1 { class: "headline gradient-text floating",
                            "Turn Rive Skills"
                            br {}
                            "Into Revenue."
                        }
                        p { class: "subline",
                            "Sell your Rive work with one of a kind,"
                            br {}
                            "Growing Rive community."
                        }
                    }
                }
            }
        }
    }
}
