pub mod emergence;
pub mod error;
pub mod io;
pub mod paths;
pub mod store;
pub mod theme;
pub mod types;
pub mod visit;

pub use emergence::{Emergence, EmergenceState};
pub use error::{AethelframeError, Result};
pub use store::EmergenceStore;
pub use types::{CanvasId, Phase};
