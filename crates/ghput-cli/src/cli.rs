use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ghput")]
#[command(about = "Upload local files to a GitHub repository", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Repository owner (user or organization)
    #[arg(long)]
    pub owner: String,

    /// Repository name
    #[arg(long)]
    pub repo: String,

    /// Branch to commit to
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// GitHub token; falls back to `gh auth token` when omitted
    #[arg(long, env = "GITHUB_TOKEN")]
    pub token: Option<String>,

    /// JSON manifest listing files to upload
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Files to upload, each as LOCAL or LOCAL=REMOTE
    #[arg(value_name = "LOCAL[=REMOTE]")]
    pub files: Vec<String>,
}
