//! File I/O for workspace snapshots
//!
//! Snapshots are stored in `~/.config/loredesk/workspace.yaml`. The
//! workspace core never calls these itself; the host application saves
//! (debounced) after every state change and loads once at startup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::WorkspaceSnapshot;

/// Get the path to the workspace snapshot file
pub fn snapshot_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("loredesk")
        .join("workspace.yaml")
}

/// Save a snapshot to the default location
pub fn save_snapshot(snapshot: &WorkspaceSnapshot) -> Result<()> {
    save_snapshot_to(snapshot, &snapshot_path())
}

/// Save a snapshot to a specific file
pub fn save_snapshot_to(snapshot: &WorkspaceSnapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {parent:?}"))?;
    }

    let contents =
        serde_yaml_ng::to_string(snapshot).context("Failed to serialize workspace snapshot")?;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write workspace snapshot to {path:?}"))?;

    log::info!("Saved workspace snapshot to {path:?}");
    Ok(())
}

/// Load a snapshot from the default location
///
/// Returns `Ok(None)` if the file doesn't exist or is empty.
/// Returns an error if the file exists but is corrupt; callers typically
/// fall back to `restore(None)` in that case.
pub fn load_snapshot() -> Result<Option<WorkspaceSnapshot>> {
    load_snapshot_from(&snapshot_path())
}

/// Load a snapshot from a specific file
pub fn load_snapshot_from(path: &Path) -> Result<Option<WorkspaceSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read workspace snapshot from {path:?}"))?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let snapshot: WorkspaceSnapshot = serde_yaml_ng::from_str(&contents)
        .with_context(|| format!("Failed to parse workspace snapshot from {path:?}"))?;

    log::info!("Loaded workspace snapshot from {path:?}");
    Ok(Some(snapshot))
}

/// Remove the snapshot file (e.g., when the user resets the workspace)
pub fn clear_snapshot() -> Result<()> {
    let path = snapshot_path();
    if path.exists() {
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to remove workspace snapshot {path:?}"))?;
    }
    Ok(())
}
