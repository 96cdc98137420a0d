use serde::{Deserialize, Serialize};

/// Destination repository and branch, fixed for a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl Repository {
    pub fn new(owner: String, name: String) -> Self {
        Self {
            owner,
            name,
            branch: "main".to_string(),
        }
    }

    pub fn with_branch(mut self, branch: String) -> Self {
        self.branch = branch;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// API path of a file under this repository's contents endpoint.
    pub fn contents_path(&self, file_path: &str) -> String {
        format!("repos/{}/{}/contents/{}", self.owner, self.name, file_path)
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
