use crate::error::{AethelframeError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const AETHELFRAME_DIR: &str = ".aethelframe";
pub const VISIT_FILE: &str = "visit.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn aethelframe_dir(root: &Path) -> PathBuf {
    root.join(AETHELFRAME_DIR)
}

pub fn visit_path(root: &Path) -> PathBuf {
    aethelframe_dir(root).join(VISIT_FILE)
}

/// The per-user root for durable state, under the home directory.
pub fn default_root() -> Result<PathBuf> {
    home::home_dir().ok_or(AethelframeError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_path_lives_under_dot_dir() {
        let path = visit_path(Path::new("/tmp/u"));
        assert_eq!(path, PathBuf::from("/tmp/u/.aethelframe/visit.yaml"));
    }
}
