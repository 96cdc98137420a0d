use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// One file to push: a local source and its slash-separated path inside the
/// target repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTask {
    pub local_path: PathBuf,
    pub remote_path: String,
}

impl UploadTask {
    pub fn new(local_path: impl Into<PathBuf>, remote_path: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
            remote_path: remote_path.into(),
        }
    }

    /// Build a task from a bare local path. Relative paths keep their shape
    /// on the remote side with `.` and `..` resolved away; absolute paths
    /// land at the repository root under their file name.
    pub fn from_local(local_path: impl Into<PathBuf>) -> Self {
        let local_path = local_path.into();
        let remote_path = default_remote_path(&local_path);
        Self {
            local_path,
            remote_path,
        }
    }

    /// Final segment of the remote path.
    pub fn file_name(&self) -> &str {
        self.remote_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.remote_path)
    }

    /// Commit message recorded for this file's upload.
    pub fn commit_message(&self) -> String {
        format!("Add {}", self.file_name())
    }
}

impl std::fmt::Display for UploadTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.local_path.display(), self.remote_path)
    }
}

fn default_remote_path(path: &Path) -> String {
    if path.is_relative() {
        // `.` is dropped and `..` unwinds the preceding component, so the
        // derived path names the file actually read.
        let mut parts: Vec<String> = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(p) => parts.push(p.to_string_lossy().into_owned()),
                Component::ParentDir => {
                    parts.pop();
                }
                _ => {}
            }
        }
        parts.join("/")
    } else {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
