//! Crash-safe file replacement
//!
//! Uses the write-fsync-rename pattern for atomic whole-file rewrites:
//!
//! 1. Write to a temporary file next to the target
//! 2. fsync the temporary file
//! 3. Atomic rename to the final path
//! 4. fsync the parent directory
//!
//! This ensures that either the complete new contents exist at the target
//! path or the prior contents remain untouched. A reader can never observe
//! a partially written file.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Temporary-file sibling for a target path (`main.json` → `main.json.tmp`)
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Atomically replace the contents of `path` with `bytes`
///
/// Writes to a temporary sibling, syncs it, renames it over the target,
/// then syncs the parent directory. A stale temporary file left by an
/// interrupted writer is removed first. On any failure the temporary file
/// is cleaned up and the target is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(path);

    debug!(
        final_path = %path.display(),
        temp_path = %temp_path.display(),
        len = bytes.len(),
        "Starting atomic write"
    );

    // Clean up stale temp file if exists (from a previous failed attempt)
    if temp_path.exists() {
        warn!(path = %temp_path.display(), "Removing stale temp file");
        let _ = std::fs::remove_file(&temp_path);
    }

    if let Err(e) = write_and_sync(&temp_path, bytes) {
        warn!(
            temp_path = %temp_path.display(),
            error = %e,
            "Write failed, cleaning up temp file"
        );
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        warn!(
            temp_path = %temp_path.display(),
            error = %e,
            "Rename failed, cleaning up temp file"
        );
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    sync_parent_dir(path)?;

    debug!(path = %path.display(), "Atomic write completed");
    Ok(())
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn sync_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let dir = File::open(parent)?;
            dir.sync_all()?;
        }
    }
    Ok(())
}
