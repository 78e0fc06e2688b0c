use crate::router;
use aethelframe_core::{CanvasId, EmergenceState};

// ---------------------------------------------------------------------------
// NavItem
// ---------------------------------------------------------------------------

/// One entry in the primary navigation, with the 1-based position used by
/// the position indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub canvas: CanvasId,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
    pub position: usize,
}

/// Build the navigation for the current state. Ordering follows
/// [`CanvasId::all`]; exactly one item is active.
pub fn nav_items(state: &EmergenceState) -> Vec<NavItem> {
    CanvasId::all()
        .iter()
        .enumerate()
        .map(|(i, &canvas)| NavItem {
            canvas,
            label: canvas.title(),
            path: router::path_for(canvas),
            active: state.active_canvas == canvas,
            position: i + 1,
        })
        .collect()
}

/// Position-indicator read model: (1-based position, total).
pub fn position(state: &EmergenceState) -> (usize, usize) {
    (state.active_canvas.index() + 1, CanvasId::all().len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
