//! Visual theme for the Rillic landing.

mod styles;

pub use styles::GLOBAL_STYLES;
