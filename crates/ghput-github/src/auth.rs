use crate::{Error, Result};
use tokio::process::Command;

/// Resolve the API token for a run. An explicitly supplied token wins;
/// otherwise the locally installed GitHub CLI is asked for its session
/// token. Either way the result is trimmed and must be non-empty.
pub async fn resolve_token(explicit: Option<String>) -> Result<String> {
    match explicit {
        Some(token) => {
            let token = token.trim().to_string();
            if token.is_empty() {
                return Err(Error::AuthError("Supplied token is empty".to_string()));
            }
            Ok(token)
        }
        None => token_from_gh().await,
    }
}

async fn token_from_gh() -> Result<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .map_err(|e| Error::AuthError(format!("Failed to run `gh auth token`: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::AuthError(format!(
            "`gh auth token` exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(Error::AuthError(
            "`gh auth token` printed an empty token".to_string(),
        ));
    }

    tracing::debug!("token resolved via gh CLI");

    Ok(token)
}
