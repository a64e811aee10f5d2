//! Tilt card state machine and derived presentation.
//!
//! ## States
//!
//! ```text
//!            engage()                update_position()
//!   Idle ──────────────▶ Engaged ◀──────────────────┐
//!    ▲                     │  └─────────────────────┘
//!    └─────────────────────┘
//!           disengage()  (pointer reset to center)
//! ```
//!
//! The state is a small `Copy` value. Event handlers compute the next state
//! and hand it to the view; [`TiltState::presentation`] is a pure function of
//! the state and the config, recomputed on every render.

use crate::config::{Easing, TiltConfig};
use crate::geometry::{BoundingBox, PointerState};

/// Engagement phase of the card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    /// No pointer or touch on the card
    #[default]
    Idle,
    /// A pointer hovers or a finger touches the card
    Engaged,
}

/// Result of feeding a move event to the card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// The pointer now reflects the move
    Applied,
    /// No usable rect for the card
    Unmeasured,
    /// NaN or infinite client coordinates
    InvalidPoint,
    /// A newer move or a release already superseded this one
    Stale,
}

/// Pointer tracking state owned by a single card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    engaged: bool,
    pointer: PointerState,
}

impl TiltState {
    /// A card at rest: idle and centered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.engaged {
            Phase::Engaged
        } else {
            Phase::Idle
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Pointer entered or touch started.
    pub fn engage(&mut self) {
        self.engaged = true;
    }

    /// Pointer left or touch ended. Always recenters the pointer.
    pub fn disengage(&mut self) {
        self.engaged = false;
        self.pointer = PointerState::CENTER;
    }

    /// Track a move event at client coordinates `(raw_x, raw_y)`.
    ///
    /// Without a measured rect, or for non-finite coordinates, nothing
    /// changes. Returns whether the pointer was updated.
    pub fn update_position(&mut self, raw_x: f64, raw_y: f64, bounds: Option<&BoundingBox>) -> bool {
        self.track(raw_x, raw_y, bounds) == MoveOutcome::Applied
    }

    /// Like [`update_position`](Self::update_position), reporting why a
    /// move was dropped.
    pub fn track(&mut self, raw_x: f64, raw_y: f64, bounds: Option<&BoundingBox>) -> MoveOutcome {
        let Some(bounds) = bounds else {
            return MoveOutcome::Unmeasured;
        };
        let Some(pointer) = bounds.normalize(raw_x, raw_y) else {
            return MoveOutcome::InvalidPoint;
        };
        self.pointer = pointer;
        MoveOutcome::Applied
    }

    /// Derive rotation, scale and shadow for the current state.
    pub fn presentation(&self, config: &TiltConfig) -> Presentation {
        if !self.engaged {
            return Presentation::REST;
        }
        Presentation {
            rotate_x: unsigned_zero((self.pointer.y - 0.5) * -config.tilt),
            rotate_y: unsigned_zero((self.pointer.x - 0.5) * config.tilt),
            scale: config.scale,
            shadow: Shadow::Lifted {
                intensity: config.shadow_intensity,
            },
        }
    }
}

// Keeps "-0" out of the generated CSS when the pointer sits on the center line.
fn unsigned_zero(v: f64) -> f64 {
    v + 0.0
}

/// Card shadow variants
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Shadow {
    /// Soft shadow of a card lying flat
    Resting,
    /// Larger, darker shadow of a raised card
    Lifted { intensity: f64 },
}

impl Shadow {
    /// Returns the CSS `box-shadow` value
    pub fn css(&self) -> String {
        match self {
            Shadow::Resting => "0 8px 32px rgba(0,0,0,0.12)".to_string(),
            Shadow::Lifted { intensity } => format!(
                "0 20px 60px rgba(0,0,0,{}), 0 8px 24px rgba(0,0,0,0.15)",
                intensity
            ),
        }
    }
}

/// Visual output of the card, in degrees and scale factor.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Presentation {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub shadow: Shadow,
}

impl Presentation {
    /// Untilted, unscaled, resting shadow.
    pub const REST: Presentation = Presentation {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        shadow: Shadow::Resting,
    };

    /// CSS `transform` value for the card's inner layer.
    pub fn transform_css(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            config.perspective, self.rotate_x, self.rotate_y, self.scale
        )
    }

    /// CSS `transition` for the transform.
    pub fn transform_transition(config: &TiltConfig) -> String {
        format!("transform {}s {}", config.transition, Easing::SoftOut.css())
    }

    /// CSS `transition` for the shadow.
    pub fn shadow_transition(config: &TiltConfig) -> String {
        format!("box-shadow {}s {}", config.transition, Easing::EaseOut.css())
    }
}
