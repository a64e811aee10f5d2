//! Launch-time assets shared with the page components.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(LandingAssets::from_launch);
//!
//! // In child components
//! let assets = use_landing_assets();
//! ```

use dioxus::prelude::*;

/// Values resolved from the command line before the window opens.
#[derive(Clone, Debug, PartialEq)]
pub struct LandingAssets {
    /// Data URI of the card and backdrop icon
    pub icon_src: String,
    /// Seed for the floating icon layout
    pub backdrop_seed: Option<u64>,
}

impl LandingAssets {
    pub fn from_launch() -> Self {
        Self {
            icon_src: crate::get_icon_src(),
            backdrop_seed: crate::get_backdrop_seed(),
        }
    }
}

/// Hook to access the launch assets from context.
pub fn use_landing_assets() -> LandingAssets {
    use_context::<LandingAssets>()
}
