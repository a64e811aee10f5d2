//! Tilt Card Component
//!
//! A square image card that leans toward the pointer in 3D, grows slightly
//! and casts a deeper shadow while hovered or touched.

use std::rc::Rc;

use dioxus::prelude::*;
use rillic_core::{
    apply_measured_move, BoundingBox, MoveOutcome, MoveSequencer, Presentation, TiltConfig,
    TiltState, CARD_CONFIG,
};

/// Properties for the TiltCard component
#[derive(Clone, PartialEq, Props)]
pub struct TiltCardProps {
    /// Image shown on the card (URL or data URI)
    pub image_src: String,
    /// Size, motion and shadow settings
    #[props(default = CARD_CONFIG)]
    pub config: TiltConfig,
    /// Caption rendered below the card
    #[props(default = "Rillic is coming soon".to_string())]
    pub caption: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Inline styles for the three card layers
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyles {
    /// Outer element receiving the events
    pub container: String,
    /// Inner element carrying the 3D transform
    pub inner: String,
    /// The image, carrying the shadow
    pub image: String,
}

/// Build the card's inline styles for a state.
pub fn card_styles(state: &TiltState, config: &TiltConfig) -> CardStyles {
    let view = state.presentation(config);
    CardStyles {
        container: format!(
            "width: {size}px; height: {size}px; max-width: 100%; max-height: 100%; perspective: {}px;",
            config.perspective,
            size = config.size
        ),
        inner: format!(
            "width: 100%; height: 100%; transform: {}; transition: {}; transform-origin: center center; will-change: transform;",
            view.transform_css(config),
            Presentation::transform_transition(config)
        ),
        image: format!(
            "width: 100%; height: 100%; object-fit: cover; border-radius: 24px; display: block; box-shadow: {}; transition: {};",
            view.shadow.css(),
            Presentation::shadow_transition(config)
        ),
    }
}

/// Interactive 3D tilt card
///
/// # Design Notes
///
/// - Mouse enter and touch start engage the card
/// - Mouse leave, touch end and touch cancel release it and recenter
/// - Every move re-reads the card's client rect before normalizing, so a
///   resize or reflow while hovered is picked up on the next move
/// - Measurements may resolve out of order; only the newest move lands, and
///   a release discards moves still being measured
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TiltCard { image_src: icon_uri.clone() }
/// }
/// ```
#[component]
pub fn TiltCard(props: TiltCardProps) -> Element {
    let state = use_signal(TiltState::new);
    let sequencer = use_signal(MoveSequencer::new);
    let mut card_node: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let engage = move || {
        let mut next = state();
        next.engage();
        commit(state, next);
    };

    let release = move || {
        discard_pending(sequencer);
        let mut next = state();
        next.disengage();
        commit(state, next);
    };

    let track = move |x: f64, y: f64| track_move(card_node, state, sequencer, x, y);

    let CardStyles {
        container,
        inner,
        image,
    } = card_styles(&state.read(), &props.config);
    let extra_class = props.class.as_deref().unwrap_or("");
    let image_src = &props.image_src;
    let caption = &props.caption;

    rsx! {
        div { class: "tilt-card-frame",
            div {
                class: "tilt-card {extra_class}",
                style: "{container}",
                tabindex: "0",
                "aria-label": "Interactive Rillic logo card",
                onmounted: move |evt: MountedEvent| card_node.set(Some(evt.data())),
                onmouseenter: move |_| engage(),
                onmouseleave: move |_| release(),
                onmousemove: move |evt: MouseEvent| {
                    let point = evt.client_coordinates();
                    track(point.x, point.y);
                },
                ontouchstart: move |_| engage(),
                ontouchend: move |_| release(),
                ontouchcancel: move |_| release(),
                ontouchmove: move |evt: TouchEvent| {
                    if let Some(touch) = evt.touches().first() {
                        let point = touch.client_coordinates();
                        track(point.x, point.y);
                    }
                },

                div { class: "tilt-card__inner", style: "{inner}",
                    img {
                        src: "{image_src}",
                        alt: "Rillic logo",
                        draggable: "false",
                        style: "{image}",
                    }
                }
            }
            div { class: "tilt-card__caption",
                span { "{caption}" }
            }
        }
    }
}

// Only notify the view when something observable changed.
fn commit(mut state: Signal<TiltState>, next: TiltState) {
    if *state.peek() != next {
        state.set(next);
    }
}

fn discard_pending(mut sequencer: Signal<MoveSequencer>) {
    sequencer.write().invalidate();
}

/// Measure the card and apply the move at `(x, y)` against that rect.
fn track_move(
    card_node: Signal<Option<Rc<MountedData>>>,
    state: Signal<TiltState>,
    mut sequencer: Signal<MoveSequencer>,
    x: f64,
    y: f64,
) {
    let Some(node) = card_node() else {
        tracing::trace!(x, y, "Move skipped, card not mounted");
        return;
    };
    let ticket = sequencer.write().issue();

    spawn(async move {
        let measured = match node.get_client_rect().await {
            Ok(rect) => {
                BoundingBox::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
                    .map_err(|e| tracing::debug!("Card not laid out yet: {}", e))
                    .ok()
            }
            Err(e) => {
                tracing::debug!("Card geometry unavailable: {:?}", e);
                None
            }
        };

        let mut next = state();
        let outcome = apply_measured_move(
            &mut next,
            &mut sequencer.write(),
            ticket,
            measured.as_ref(),
            x,
            y,
        );
        match outcome {
            MoveOutcome::Applied => commit(state, next),
            MoveOutcome::Unmeasured => tracing::trace!(x, y, "Move skipped, card has no usable rect"),
            MoveOutcome::InvalidPoint => tracing::trace!(x, y, "Move skipped, coordinates not finite"),
            MoveOutcome::Stale => tracing::trace!(x, y, "Move superseded"),
        }
    });
}
