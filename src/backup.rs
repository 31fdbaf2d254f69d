//! Best-effort backup of the raw export.
//!
//! The analytics pipeline never depends on the backup: it is an audit copy
//! fired before analysis, and any failure is swallowed at this boundary so
//! the user still gets their results.

use std::fs;
use std::path::Path;

use crate::error::{ChatlensError, Result};

/// Outbound destination for a raw-export copy.
///
/// Implementations are opaque to the core; the provided [`DirectorySink`]
/// writes into a local folder, but any object-storage client fits behind
/// the same interface.
pub trait BackupSink: Send + Sync {
    /// Stores `bytes` under `name` in `destination`. No return value is
    /// consumed by the analytical path.
    fn store(&self, bytes: &[u8], name: &str, destination: &str) -> Result<()>;
}

/// Copies the raw export into a destination directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectorySink;

impl DirectorySink {
    /// Creates the directory sink.
    pub fn new() -> Self {
        Self
    }
}

impl BackupSink for DirectorySink {
    fn store(&self, bytes: &[u8], name: &str, destination: &str) -> Result<()> {
        let dir = Path::new(destination);
        fs::create_dir_all(dir).map_err(|e| ChatlensError::backup(dir, e))?;
        fs::write(dir.join(name), bytes).map_err(|e| ChatlensError::backup(dir, e))?;
        Ok(())
    }
}

/// Fires the backup and suppresses any failure.
///
/// Returns the suppressed error for optional reporting; the caller may
/// warn about it, but nothing downstream is allowed to depend on it.
pub fn backup_best_effort(
    sink: &dyn BackupSink,
    bytes: &[u8],
    name: &str,
    destination: &str,
) -> Option<ChatlensError> {
    sink.store(bytes, name, destination).err()
}
