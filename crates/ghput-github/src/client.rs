use crate::{Error, Repository, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const DEFAULT_API_ROOT: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("ghput/", env!("CARGO_PKG_VERSION"));

/// Client for the repository contents endpoint. Holds the token for the
/// whole run; the API root is only overridden by tests.
#[derive(Clone)]
pub struct ContentsClient {
    http: Client,
    api_root: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct PutContentsBody<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileShaResponse {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct UpsertFileResponse {
    content: Option<UpsertedContent>,
}

#[derive(Debug, Deserialize)]
struct UpsertedContent {
    sha: String,
}

impl ContentsClient {
    pub fn new(token: String) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| Error::ApiError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_root: DEFAULT_API_ROOT.to_string(),
            token,
        })
    }

    /// Point the client at a different API root.
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into().trim_end_matches('/').to_string();
        self
    }

    fn contents_url(&self, repo: &Repository, file_path: &str) -> String {
        format!("{}/{}", self.api_root, repo.contents_path(file_path))
    }

    /// Blob sha of `file_path` on the target branch, `None` when the path
    /// does not exist there yet.
    pub async fn file_sha(&self, repo: &Repository, file_path: &str) -> Result<Option<String>> {
        let url = self.contents_url(repo, file_path);

        let response = self
            .http
            .get(&url)
            .query(&[("ref", repo.branch.as_str())])
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| Error::ApiError(format!("Failed to query {}: {}", url, e)))?;

        match response.status() {
            StatusCode::OK => {
                let body: FileShaResponse = response.json().await.map_err(|e| {
                    Error::ApiError(format!("Failed to parse contents response: {}", e))
                })?;
                Ok(Some(body.sha))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::Rejected {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Create or update one file on the target branch.
    ///
    /// The contents endpoint requires the current blob sha to overwrite an
    /// existing file, so the path is looked up first and the sha included
    /// when present.
    pub async fn upsert_file(
        &self,
        repo: &Repository,
        file_path: &str,
        content: &[u8],
        message: &str,
    ) -> Result<()> {
        let sha = self.file_sha(repo, file_path).await?;
        let url = self.contents_url(repo, file_path);

        let body = PutContentsBody {
            message,
            content: BASE64.encode(content),
            branch: &repo.branch,
            sha,
        };

        let response = self
            .http
            .put(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::ApiError(format!("Failed to reach {}: {}", url, e)))?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        if !matches!(status, 200 | 201) {
            return Err(Error::Rejected { status, body: text });
        }

        if let Some(stored) = serde_json::from_str::<UpsertFileResponse>(&text)
            .ok()
            .and_then(|r| r.content)
        {
            tracing::debug!("{} stored as blob {}", file_path, stored.sha);
        }

        Ok(())
    }
}
