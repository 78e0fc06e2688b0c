use crate::error::Result;
use crate::io;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// VisitRecord
// ---------------------------------------------------------------------------

/// The durable record behind the returning-visitor flag. The flag is a
/// one-way ratchet: nothing in this crate ever writes `visited: false`
/// over a true value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRecord {
    pub visited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_visit: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// VisitStore
// ---------------------------------------------------------------------------

/// Durable storage for the returning-visitor flag.
///
/// Callers treat a read error as "flag absent" and a write error as a
/// no-op; implementations report failures and leave degradation policy
/// to the controller.
pub trait VisitStore {
    fn has_visited(&self) -> Result<bool>;

    /// Record that this visitor has been here. Never unsets.
    fn mark_visited(&mut self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileVisitStore
// ---------------------------------------------------------------------------

/// Flag storage as a YAML record under `<root>/.aethelframe/visit.yaml`,
/// written atomically.
#[derive(Debug, Clone)]
pub struct FileVisitStore {
    root: PathBuf,
}

impl FileVisitStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the user's home directory.
    pub fn for_current_user() -> Result<Self> {
        Ok(Self::new(paths::default_root()?))
    }

    fn load(&self) -> Result<Option<VisitRecord>> {
        let path = paths::visit_path(&self.root);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        let record: VisitRecord = serde_yaml::from_str(&data)?;
        Ok(Some(record))
    }

    fn save(&self, record: &VisitRecord) -> Result<()> {
        let path = paths::visit_path(&self.root);
        let data = serde_yaml::to_string(record)?;
        io::atomic_write(&path, data.as_bytes())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl VisitStore for FileVisitStore {
    fn has_visited(&self) -> Result<bool> {
        Ok(self.load()?.map(|r| r.visited).unwrap_or(false))
    }

    fn mark_visited(&mut self) -> Result<()> {
        let first_visit = self
            .load()
            .unwrap_or(None)
            .and_then(|r| r.first_visit)
            .or_else(|| Some(Utc::now()));
        self.save(&VisitRecord {
            visited: true,
            first_visit,
        })
    }
}

// ---------------------------------------------------------------------------
// MemoryVisitStore
// ---------------------------------------------------------------------------

/// In-memory flag storage. Nothing survives the session; useful for tests
/// and for environments where durable storage is unwanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryVisitStore {
    visited: bool,
}

impl MemoryVisitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning() -> Self {
        Self { visited: true }
    }
}

impl VisitStore for MemoryVisitStore {
    fn has_visited(&self) -> Result<bool> {
        Ok(self.visited)
    }

    fn mark_visited(&mut self) -> Result<()> {
        self.visited = true;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
