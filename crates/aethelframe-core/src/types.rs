use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Narrative/visual intensity level. Forward-only within a session:
/// `seed -> growth -> bloom`, with `bloom` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Seed,
    Growth,
    Bloom,
}

impl Phase {
    pub fn all() -> &'static [Phase] {
        &[Phase::Seed, Phase::Growth, Phase::Bloom]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The next phase, saturating at `Bloom`.
    pub fn advanced(self) -> Phase {
        match self {
            Phase::Seed => Phase::Growth,
            Phase::Growth | Phase::Bloom => Phase::Bloom,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Bloom
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Seed => "seed",
            Phase::Growth => "growth",
            Phase::Bloom => "bloom",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = crate::error::AethelframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seed" => Ok(Phase::Seed),
            "growth" => Ok(Phase::Growth),
            "bloom" => Ok(Phase::Bloom),
            _ => Err(crate::error::AethelframeError::InvalidPhase(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CanvasId
// ---------------------------------------------------------------------------

/// Identifier of a full-screen content view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasId {
    Home,
    Portfolio,
    Services,
    Journal,
    Contact,
}

impl CanvasId {
    /// All canvases in presentation order. Position indicators rely on
    /// this ordering.
    pub fn all() -> &'static [CanvasId] {
        &[
            CanvasId::Home,
            CanvasId::Portfolio,
            CanvasId::Services,
            CanvasId::Journal,
            CanvasId::Contact,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CanvasId::Home => "home",
            CanvasId::Portfolio => "portfolio",
            CanvasId::Services => "services",
            CanvasId::Journal => "journal",
            CanvasId::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CanvasId::Home => "Home",
            CanvasId::Portfolio => "Portfolio",
            CanvasId::Services => "Services",
            CanvasId::Journal => "Journal",
            CanvasId::Contact => "Contact",
        }
    }
}

impl fmt::Display for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CanvasId {
    type Err = crate::error::AethelframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(CanvasId::Home),
            "portfolio" => Ok(CanvasId::Portfolio),
            "services" => Ok(CanvasId::Services),
            "journal" => Ok(CanvasId::Journal),
            "contact" => Ok(CanvasId::Contact),
            _ => Err(crate::error::AethelframeError::InvalidCanvas(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
