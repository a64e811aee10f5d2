//! Applying moves against freshly measured geometry.
//!
//! Every move event measures the card's rect asynchronously and only then
//! normalizes the pointer, so a card that moved or resized while hovered is
//! never tracked against an old rect. Measurements can complete out of
//! order; the [`MoveSequencer`] drops any result older than one already
//! applied, and a release drops every move still in flight.

use crate::geometry::BoundingBox;
use crate::tilt::{MoveOutcome, TiltState};

/// Issue order of a move event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveTicket(u64);

/// Latest-wins ordering for moves whose geometry resolves asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSequencer {
    issued: u64,
    settled: u64,
}

impl MoveSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a slot for a move that was just received.
    pub fn issue(&mut self) -> MoveTicket {
        self.issued += 1;
        MoveTicket(self.issued)
    }

    /// Claim `ticket` once its geometry is known.
    ///
    /// Returns `false` when a later ticket was already settled or the
    /// ticket was invalidated.
    pub fn settle(&mut self, ticket: MoveTicket) -> bool {
        if ticket.0 <= self.settled {
            return false;
        }
        self.settled = ticket.0;
        true
    }

    /// Drop every ticket issued so far.
    pub fn invalidate(&mut self) {
        self.settled = self.issued;
    }
}

/// Apply a move whose rect was measured after the event arrived.
///
/// `measured` is the rect read for this move, `None` if the element could
/// not be measured.
pub fn apply_measured_move(
    state: &mut TiltState,
    sequencer: &mut MoveSequencer,
    ticket: MoveTicket,
    measured: Option<&BoundingBox>,
    raw_x: f64,
    raw_y: f64,
) -> MoveOutcome {
    if !sequencer.settle(ticket) {
        return MoveOutcome::Stale;
    }
    state.track(raw_x, raw_y, measured)
}
