use crate::{Error, Result, UploadTask};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One line of a JSON upload manifest. `remote` falls back to the same
/// defaulting rule as a bare command-line path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub local: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

/// Load an ordered task list from a JSON manifest file
/// (`[{"local": "...", "remote": "..."}, ...]`).
pub fn load_manifest(path: &Path) -> Result<Vec<UploadTask>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        Error::ManifestError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let entries: Vec<ManifestEntry> = serde_json::from_str(&raw)?;
    let tasks: Vec<UploadTask> = entries
        .into_iter()
        .map(task_from_entry)
        .collect::<Result<_>>()?;

    tracing::debug!("loaded {} tasks from {}", tasks.len(), path.display());

    Ok(tasks)
}

/// Parse a positional `LOCAL[=REMOTE]` spec into a task.
pub fn parse_spec(spec: &str) -> Result<UploadTask> {
    let (local, remote) = match spec.split_once('=') {
        Some((local, remote)) => (local, Some(remote)),
        None => (spec, None),
    };

    if local.trim().is_empty() {
        return Err(Error::InvalidTask(format!("Empty local path in '{}'", spec)));
    }

    let task = match remote {
        Some(remote) => UploadTask::new(local, normalize_remote(remote)?),
        None => UploadTask::from_local(local),
    };

    ensure_remote(task)
}

fn task_from_entry(entry: ManifestEntry) -> Result<UploadTask> {
    if entry.local.as_os_str().is_empty() {
        return Err(Error::InvalidTask(
            "Manifest entry has an empty local path".to_string(),
        ));
    }

    let task = match entry.remote {
        Some(remote) => UploadTask::new(entry.local, normalize_remote(&remote)?),
        None => UploadTask::from_local(entry.local),
    };

    ensure_remote(task)
}

/// Contents API paths are repository-relative: leading slashes are dropped
/// and a path naming a directory is rejected.
fn normalize_remote(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidTask(format!("Empty remote path in '{}'", raw)));
    }
    if trimmed.ends_with('/') {
        return Err(Error::InvalidTask(format!(
            "Remote path '{}' names a directory, not a file",
            raw
        )));
    }
    Ok(trimmed.to_string())
}

fn ensure_remote(task: UploadTask) -> Result<UploadTask> {
    if task.remote_path.is_empty() {
        return Err(Error::InvalidTask(format!(
            "No remote path could be derived for {}",
            task.local_path.display()
        )));
    }
    Ok(task)
}
