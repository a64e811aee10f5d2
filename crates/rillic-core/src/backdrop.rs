//! Floating icon backdrop.
//!
//! The landing page background is a field of small, faint copies of the
//! Rillic icon scattered at random and bobbing on a staggered float
//! animation. Placement is generated once per mount.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One decorative icon in the background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingIcon {
    /// Horizontal position, percent of the page width
    pub left_pct: f64,
    /// Vertical position, percent of the page height
    pub top_pct: f64,
    /// Edge length in pixels
    pub size_px: f64,
    pub opacity: f64,
    /// Float animation delay in seconds
    pub delay_secs: f64,
}

impl FloatingIcon {
    /// Inline style for the icon wrapper.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {:.2}s; opacity: {:.3};",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.delay_secs, self.opacity
        )
    }
}

/// Ranges the backdrop generator draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropConfig {
    pub count: usize,
    pub size_px: Range<f64>,
    pub opacity: Range<f64>,
    pub delay_secs: Range<f64>,
}

/// The backdrop the landing page ships with.
pub const BACKDROP_CONFIG: BackdropConfig = BackdropConfig {
    count: 25,
    size_px: 20.0..60.0,
    opacity: 0.05..0.2,
    delay_secs: 0.0..6.0,
};

impl Default for BackdropConfig {
    fn default() -> Self {
        BACKDROP_CONFIG
    }
}

/// Scatter `config.count` icons using `rng`.
pub fn generate_backdrop<R: Rng>(rng: &mut R, config: &BackdropConfig) -> Vec<FloatingIcon> {
    (0..config.count)
        .map(|_| FloatingIcon {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            size_px: sample(rng, &config.size_px),
            opacity: sample(rng, &config.opacity),
            delay_secs: sample(rng, &config.delay_secs),
        })
        .collect()
}

/// Generate a backdrop from a fixed seed, or from thread-local entropy.
pub fn seeded_backdrop(seed: Option<u64>, config: &BackdropConfig) -> Vec<FloatingIcon> {
    let icons = match seed {
        Some(seed) => generate_backdrop(&mut StdRng::seed_from_u64(seed), config),
        None => generate_backdrop(&mut rand::rng(), config),
    };
    tracing::debug!(count = icons.len(), ?seed, "Generated backdrop");
    icons
}

// An empty range pins the value to its start instead of panicking.
fn sample<R: Rng>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.random_range(range.clone())
    }
}
