use crate::error::Result;
use crate::types::{CanvasId, Phase};
use crate::visit::VisitStore;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// EmergenceState
// ---------------------------------------------------------------------------

/// Session-scoped UI state. Owned exclusively by [`Emergence`]; everything
/// else reads snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergenceState {
    pub phase: Phase,
    pub active_canvas: CanvasId,
    pub overture_visible: bool,
}

impl EmergenceState {
    fn first_visit() -> Self {
        Self {
            phase: Phase::Seed,
            active_canvas: CanvasId::Home,
            overture_visible: true,
        }
    }

    fn returning_visit() -> Self {
        Self {
            phase: Phase::Growth,
            active_canvas: CanvasId::Home,
            overture_visible: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Emergence
// ---------------------------------------------------------------------------

/// The single authority over phase, active canvas, and overture visibility.
///
/// All transitions are synchronous and forward-only: `seed -> growth ->
/// bloom`, with `bloom` terminal. The only durable side effect is the
/// returning-visitor flag written by [`Emergence::dismiss_overture`].
pub struct Emergence<S: VisitStore> {
    state: EmergenceState,
    visits: S,
}

impl<S: VisitStore> Emergence<S> {
    /// Build initial state from the persisted flag: first-time visitors get
    /// the overture at `seed`, returning visitors start at `growth` with the
    /// overture skipped. A flag read failure degrades to first visit.
    pub fn initialize(visits: S) -> Self {
        let returning = match visits.has_visited() {
            Ok(returning) => returning,
            Err(err) => {
                warn!(error = %err, "visit flag unreadable, treating as first visit");
                false
            }
        };
        let state = if returning {
            EmergenceState::returning_visit()
        } else {
            EmergenceState::first_visit()
        };
        debug!(phase = %state.phase, overture = state.overture_visible, "emergence initialized");
        Self { state, visits }
    }

    pub fn state(&self) -> EmergenceState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn active_canvas(&self) -> CanvasId {
        self.state.active_canvas
    }

    pub fn overture_visible(&self) -> bool {
        self.state.overture_visible
    }

    /// Hide the overture and persist the returning-visitor flag. Advances
    /// `seed` to `growth`; idempotent when called again. A flag write
    /// failure is logged and otherwise ignored.
    pub fn dismiss_overture(&mut self) {
        self.state.overture_visible = false;
        if self.state.phase == Phase::Seed {
            self.state.phase = Phase::Growth;
        }
        if let Err(err) = self.visits.mark_visited() {
            warn!(error = %err, "could not persist visit flag");
        }
    }

    /// Present `canvas`. Navigating to a different canvas advances the phase
    /// one step (saturating at `bloom`); re-navigating to the current canvas
    /// leaves the phase untouched. The phase rule is evaluated against the
    /// canvas that was active before this call.
    pub fn navigate(&mut self, canvas: CanvasId) {
        if self.state.active_canvas != canvas && !self.state.phase.is_terminal() {
            let from = self.state.phase;
            self.state.phase = from.advanced();
            debug!(%from, to = %self.state.phase, %canvas, "phase advanced on navigation");
        }
        self.state.active_canvas = canvas;
    }

    /// Parse-and-navigate for callers holding a raw identifier (the router).
    /// An unrecognized name is a caller bug: the error is surfaced and the
    /// state is left unchanged.
    pub fn navigate_by_name(&mut self, name: &str) -> Result<CanvasId> {
        let canvas = CanvasId::from_str(name)?;
        self.navigate(canvas);
        Ok(canvas)
    }

    /// Advance the phase one step independent of navigation, saturating at
    /// `bloom`. Touches neither the active canvas nor the overture.
    pub fn advance_phase(&mut self) {
        self.state.phase = self.state.phase.advanced();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
