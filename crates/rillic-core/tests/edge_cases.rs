//! Scenario and boundary condition tests
//!
//! Walk the tilt card through concrete pointer sequences and check the
//! resulting presentation.

use rillic_core::{
    apply_measured_move, BoundingBox, GeometryError, MoveOutcome, MoveSequencer, Phase,
    PointerState, Presentation, Shadow, TiltConfig, TiltState, CARD_CONFIG,
};

fn square() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 400.0, 400.0).unwrap()
}

// ============================================================================
// Pointer Scenarios
// ============================================================================

/// Bottom-right corner tilts fully toward the viewer on both axes
#[test]
fn test_corner_move() {
    let mut state = TiltState::new();
    state.engage();
    state.update_position(400.0, 400.0, Some(&square()));

    assert_eq!(state.pointer(), PointerState { x: 1.0, y: 1.0 });
    let view = state.presentation(&CARD_CONFIG);
    assert_eq!(view.rotate_x, -7.5);
    assert_eq!(view.rotate_y, 7.5);
    assert_eq!(view.scale, 1.05);
}

/// A pointer left of the card clamps to the left edge
#[test]
fn test_move_left_of_card() {
    let mut state = TiltState::new();
    state.engage();
    state.update_position(-50.0, 200.0, Some(&square()));

    assert_eq!(state.pointer(), PointerState { x: 0.0, y: 0.5 });
    let view = state.presentation(&CARD_CONFIG);
    assert_eq!(view.rotate_y, -7.5);
    assert_eq!(view.rotate_x, 0.0);
}

/// Engage followed by disengage with no move returns to rest
#[test]
fn test_engage_disengage_without_move() {
    let mut state = TiltState::new();
    state.engage();
    assert_eq!(state.phase(), Phase::Engaged);
    state.disengage();

    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.pointer(), PointerState::CENTER);
    assert_eq!(state.presentation(&CARD_CONFIG), Presentation::REST);
}

/// Re-engaging after a disengage starts from the center, not the old pose
#[test]
fn test_reengage_starts_centered() {
    let mut state = TiltState::new();
    state.engage();
    state.update_position(0.0, 0.0, Some(&square()));
    state.disengage();
    state.engage();

    let view = state.presentation(&CARD_CONFIG);
    assert_eq!(view.rotate_x, 0.0);
    assert_eq!(view.rotate_y, 0.0);
    assert_eq!(view.shadow, Shadow::Lifted { intensity: 0.25 });
}

// ============================================================================
// Geometry Edge Cases
// ============================================================================

/// A card that has not been laid out yet reports zero size
#[test]
fn test_unmounted_card_is_unmeasurable() {
    let err = BoundingBox::new(0.0, 0.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, GeometryError::Degenerate { .. }));

    let mut state = TiltState::new();
    state.engage();
    let measured = BoundingBox::new(0.0, 0.0, 0.0, 0.0).ok();
    assert!(!state.update_position(10.0, 10.0, measured.as_ref()));
    assert_eq!(state.pointer(), PointerState::CENTER);
}

/// A failed update keeps the previously tracked pointer
#[test]
fn test_noop_keeps_last_position() {
    let mut state = TiltState::new();
    state.engage();
    state.update_position(100.0, 100.0, Some(&square()));

    assert!(!state.update_position(f64::NAN, 100.0, Some(&square())));
    assert!(!state.update_position(300.0, 300.0, None));
    assert_eq!(state.pointer(), PointerState { x: 0.25, y: 0.25 });
}

/// A card scrolled off the top of the viewport still normalizes correctly
#[test]
fn test_negative_origin() {
    let bounds = BoundingBox::new(-200.0, -400.0, 400.0, 400.0).unwrap();
    let p = bounds.normalize(0.0, -200.0).unwrap();
    assert_eq!(p, PointerState { x: 0.5, y: 0.5 });
}

// ============================================================================
// Moves Against Live Geometry
// ============================================================================

/// A card that shifted while hovered is tracked against where it is now
#[test]
fn test_layout_change_while_hovered() {
    let mut state = TiltState::new();
    let mut seq = MoveSequencer::new();
    state.engage();

    let ticket = seq.issue();
    apply_measured_move(&mut state, &mut seq, ticket, Some(&square()), 200.0, 200.0);

    // Window resized, card re-centered 300px further right
    let shifted = BoundingBox::new(300.0, 0.0, 400.0, 400.0).unwrap();
    let ticket = seq.issue();
    let outcome = apply_measured_move(&mut state, &mut seq, ticket, Some(&shifted), 500.0, 200.0);

    assert_eq!(outcome, MoveOutcome::Applied);
    assert_eq!(state.pointer(), PointerState::CENTER);
    assert_eq!(state.presentation(&CARD_CONFIG).rotate_y, 0.0);
}

/// A slow measurement for an older move cannot overwrite a newer one
#[test]
fn test_out_of_order_measurements() {
    let mut state = TiltState::new();
    let mut seq = MoveSequencer::new();
    state.engage();

    let first = seq.issue();
    let second = seq.issue();

    let outcome = apply_measured_move(&mut state, &mut seq, second, Some(&square()), 400.0, 400.0);
    assert_eq!(outcome, MoveOutcome::Applied);

    let outcome = apply_measured_move(&mut state, &mut seq, first, Some(&square()), 0.0, 0.0);
    assert_eq!(outcome, MoveOutcome::Stale);
    assert_eq!(state.pointer(), PointerState { x: 1.0, y: 1.0 });
}

/// A move still measuring when the pointer leaves does not un-center the card
#[test]
fn test_release_drops_in_flight_move() {
    let mut state = TiltState::new();
    let mut seq = MoveSequencer::new();
    state.engage();

    let ticket = seq.issue();
    seq.invalidate();
    state.disengage();

    let outcome = apply_measured_move(&mut state, &mut seq, ticket, Some(&square()), 0.0, 0.0);
    assert_eq!(outcome, MoveOutcome::Stale);
    assert_eq!(state.pointer(), PointerState::CENTER);
}

/// Measurement failure and bad coordinates are reported separately
#[test]
fn test_skip_reasons() {
    let mut state = TiltState::new();
    let mut seq = MoveSequencer::new();
    state.engage();

    let ticket = seq.issue();
    assert_eq!(
        apply_measured_move(&mut state, &mut seq, ticket, None, 10.0, 10.0),
        MoveOutcome::Unmeasured
    );
    let ticket = seq.issue();
    assert_eq!(
        apply_measured_move(&mut state, &mut seq, ticket, Some(&square()), f64::INFINITY, 10.0),
        MoveOutcome::InvalidPoint
    );
    assert_eq!(state.pointer(), PointerState::CENTER);
}

// ============================================================================
// Config Boundaries
// ============================================================================

/// Zero tilt keeps the card flat while still scaling and lifting it
#[test]
fn test_zero_tilt_config() {
    let config = TiltConfig {
        tilt: 0.0,
        ..CARD_CONFIG
    };
    assert!(config.validate().is_ok());

    let mut state = TiltState::new();
    state.engage();
    state.update_position(400.0, 0.0, Some(&square()));
    let view = state.presentation(&config);
    assert_eq!(view.rotate_x, 0.0);
    assert_eq!(view.rotate_y, 0.0);
    assert_eq!(view.scale, 1.05);
}

/// Range limits are inclusive
#[test]
fn test_config_range_limits() {
    let low = TiltConfig {
        size: 100,
        scale: 1.0,
        tilt: 0.0,
        transition: 0.2,
        shadow_intensity: 0.1,
        perspective: 1.0,
    };
    let high = TiltConfig {
        size: 800,
        scale: 1.15,
        tilt: 30.0,
        transition: 1.5,
        shadow_intensity: 0.5,
        perspective: 5000.0,
    };
    assert!(low.validate().is_ok());
    assert!(high.validate().is_ok());
    assert!(TiltConfig { size: 99, ..low }.validate().is_err());
    assert!(TiltConfig { transition: 1.6, ..high }.validate().is_err());
}
