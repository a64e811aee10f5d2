//! Reusable landing page components

mod floating_icons;
mod tilt_card;

pub use floating_icons::*;
pub use tilt_card::*;
