use aethelframe_core::error::{AethelframeError, Result};
use aethelframe_core::CanvasId;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// A resolved URL path: the canvas to present, plus an optional detail
/// segment (e.g. `/journal/on-emergence` carries the entry slug).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub canvas: CanvasId,
    pub detail: Option<String>,
}

/// Resolve a URL path to a route. The first segment names the canvas;
/// an unknown segment is a router-wiring bug and is surfaced, not
/// defaulted. Query strings and fragments are ignored.
pub fn resolve(path: &str) -> Result<Route> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let canvas = match segments.next() {
        None => CanvasId::Home,
        Some(name) => CanvasId::from_str(name)?,
    };
    let detail = segments.next().map(str::to_string);

    if segments.next().is_some() {
        return Err(AethelframeError::InvalidCanvas(path.to_string()));
    }
    Ok(Route { canvas, detail })
}

/// The canonical path for a canvas.
pub fn path_for(canvas: CanvasId) -> &'static str {
    match canvas {
        CanvasId::Home => "/",
        CanvasId::Portfolio => "/portfolio",
        CanvasId::Services => "/services",
        CanvasId::Journal => "/journal",
        CanvasId::Contact => "/contact",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
