//! Rillic Landing Core Library
//!
//! Toolkit-independent logic behind the Rillic landing page.
//!
//! ## Overview
//!
//! The page has exactly one interactive element: a card that tilts in 3D
//! toward the pointer. Everything that can be computed without a renderer
//! lives here:
//!
//! - **Geometry**: validated bounding boxes and coordinate normalization
//! - **Tilt**: the `Idle`/`Engaged` state machine and the derived presentation
//! - **Tracking**: latest-wins application of moves against fresh geometry
//! - **Backdrop**: random placement of the floating background icons
//!
//! ## Quick Start
//!
//! ```
//! use rillic_core::{BoundingBox, TiltState, CARD_CONFIG};
//!
//! let bounds = BoundingBox::new(0.0, 0.0, 400.0, 400.0).unwrap();
//! let mut state = TiltState::new();
//!
//! state.engage();
//! state.update_position(400.0, 400.0, Some(&bounds));
//!
//! let view = state.presentation(&CARD_CONFIG);
//! assert_eq!(view.rotate_x, -7.5);
//! assert_eq!(view.rotate_y, 7.5);
//! ```

pub mod backdrop;
pub mod config;
pub mod error;
pub mod geometry;
pub mod tilt;
pub mod tracking;

// Re-exports
pub use backdrop::{generate_backdrop, seeded_backdrop, BackdropConfig, FloatingIcon, BACKDROP_CONFIG};
pub use config::{Easing, TiltConfig, CARD_CONFIG};
pub use error::{GeometryError, RillicError, RillicResult};
pub use geometry::{BoundingBox, PointerState};
pub use tilt::{MoveOutcome, Phase, Presentation, Shadow, TiltState};
pub use tracking::{apply_measured_move, MoveSequencer, MoveTicket};
