//! Compile-time configuration for the tilt card.
//!
//! Values are fixed at build time. [`TiltConfig::validate`] checks them
//! against the ranges the card layout was designed for.

use crate::error::{RillicError, RillicResult};

/// Card appearance and motion settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Card edge length in pixels (100-800)
    pub size: u32,
    /// Scale factor while engaged (1.0-1.15)
    pub scale: f64,
    /// Rotation at the card edge, in degrees (0-30)
    pub tilt: f64,
    /// Transition duration in seconds (0.2-1.5)
    pub transition: f64,
    /// Shadow opacity while engaged (0.1-0.5)
    pub shadow_intensity: f64,
    /// CSS perspective distance in pixels
    pub perspective: f64,
}

/// The configuration the landing page ships with.
pub const CARD_CONFIG: TiltConfig = TiltConfig {
    size: 400,
    scale: 1.05,
    tilt: 15.0,
    transition: 0.6,
    shadow_intensity: 0.25,
    perspective: 1000.0,
};

impl Default for TiltConfig {
    fn default() -> Self {
        CARD_CONFIG
    }
}

impl TiltConfig {
    /// Check every field against its supported range.
    pub fn validate(&self) -> RillicResult<()> {
        check("size", self.size as f64, 100.0, 800.0)?;
        check("scale", self.scale, 1.0, 1.15)?;
        check("tilt", self.tilt, 0.0, 30.0)?;
        check("transition", self.transition, 0.2, 1.5)?;
        check("shadow_intensity", self.shadow_intensity, 0.1, 0.5)?;
        if !(self.perspective.is_finite() && self.perspective > 0.0) {
            return Err(RillicError::ConfigOutOfRange {
                field: "perspective",
                value: self.perspective,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            });
        }
        Ok(())
    }
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> RillicResult<()> {
    // NaN fails the range test as well
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RillicError::ConfigOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Timing curves used by the card transitions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Easing {
    /// Fast start, long soft landing; used for the transform
    #[default]
    SoftOut,
    /// Plain CSS `ease-out`; used for the shadow
    EaseOut,
}

impl Easing {
    /// Returns the CSS timing function for this curve
    pub fn css(&self) -> &'static str {
        match self {
            Easing::SoftOut => "cubic-bezier(0.25, 0.8, 0.25, 1)",
            Easing::EaseOut => "ease-out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_is_valid() {
        assert!(CARD_CONFIG.validate().is_ok());
        assert_eq!(TiltConfig::default(), CARD_CONFIG);
    }

    #[test]
    fn tilt_out_of_range_is_rejected() {
        let config = TiltConfig {
            tilt: 45.0,
            ..CARD_CONFIG
        };
        match config.validate() {
            Err(RillicError::ConfigOutOfRange { field, .. }) => assert_eq!(field, "tilt"),
            other => panic!("expected ConfigOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn nan_scale_is_rejected() {
        let config = TiltConfig {
            scale: f64::NAN,
            ..CARD_CONFIG
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_perspective_is_rejected() {
        let config = TiltConfig {
            perspective: 0.0,
            ..CARD_CONFIG
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn easing_css() {
        assert_eq!(Easing::SoftOut.css(), "cubic-bezier(0.25, 0.8, 0.25, 1)");
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::default(), Easing::SoftOut);
    }
}
