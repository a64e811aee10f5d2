//! Floating Icons Background
//!
//! Scatters faint copies of an icon across the page as an ambient
//! background layer.

use dioxus::prelude::*;
use rillic_core::{seeded_backdrop, BackdropConfig, BACKDROP_CONFIG};

/// Renders the floating icon field.
///
/// The layout is generated once when the component mounts and stays fixed
/// for its lifetime. A seed makes the layout reproducible.
#[component]
pub fn FloatingIcons(
    /// Icon image (URL or data URI)
    image_src: String,
    /// RNG seed, `None` for a fresh layout each launch
    #[props(!optional)]
    seed: Option<u64>,
    /// Number of icons (default: 25)
    #[props(default = BACKDROP_CONFIG.count)]
    count: usize,
) -> Element {
    let icons = use_hook(move || {
        let config = BackdropConfig {
            count,
            ..BACKDROP_CONFIG
        };
        seeded_backdrop(seed, &config)
    });
    let styles: Vec<String> = icons.iter().map(|icon| icon.style()).collect();

    rsx! {
        div { class: "floating-icons", "aria-hidden": "true",
            for (i, style) in styles.into_iter().enumerate() {
                div { key: "{i}", class: "floating-icon", style: "{style}",
                    img {
                        src: "{image_src}",
                        alt: "",
                        draggable: "false",
                    }
                }
            }
        }
    }
}
