//! Rillic Landing UI Components
//!
//! Dioxus components for the Rillic landing page. The interaction logic
//! lives in `rillic-core`; these components wire DOM events to it and turn
//! its output into inline styles.
//!
//! - [`TiltCard`]: the pointer-tracking 3D card
//! - [`FloatingIcons`]: the randomly scattered background icons

pub mod components;

pub use components::*;
