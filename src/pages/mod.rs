//! Page components for the Rillic landing.

mod home;

pub use home::Home;
