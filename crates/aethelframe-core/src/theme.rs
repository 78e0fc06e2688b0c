use crate::types::Phase;

// ---------------------------------------------------------------------------
// StyleTokens
// ---------------------------------------------------------------------------

/// The visual vocabulary a phase resolves to. Defined once here so view
/// code never switches on the phase string itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTokens {
    /// CSS class applied to the document body.
    pub body_class: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    /// 0.0 to 1.0, drives glow/particle intensity in decorative layers.
    pub glow: f32,
    /// Multiplier on transition durations; later phases move faster.
    pub motion_scale: f32,
}

/// Resolve the style tokens for a phase.
pub const fn style_for(phase: Phase) -> StyleTokens {
    match phase {
        Phase::Seed => StyleTokens {
            body_class: "phase-seed",
            accent: "#3d5a4c",
            background: "#0a0c0b",
            glow: 0.15,
            motion_scale: 1.0,
        },
        Phase::Growth => StyleTokens {
            body_class: "phase-growth",
            accent: "#5fa880",
            background: "#0d1410",
            glow: 0.45,
            motion_scale: 0.8,
        },
        Phase::Bloom => StyleTokens {
            body_class: "phase-bloom",
            accent: "#c9a66b",
            background: "#141018",
            glow: 0.9,
            motion_scale: 0.65,
        },
    }
}
