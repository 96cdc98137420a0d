use anyhow::Result;
use ghput_core::{load_manifest, parse_spec, UploadOutcome, UploadReport, UploadTask};
use ghput_github::{resolve_token, ContentsClient, Repository};

use crate::cli::Cli;

/// Assemble the task list, resolve credentials and upload every file.
///
/// Per-file failures are recorded in the returned report rather than
/// propagated; only setup problems (no tasks, bad manifest, credential
/// resolution) abort the run.
pub async fn execute(cli: Cli) -> Result<UploadReport> {
    let tasks = assemble_tasks(&cli)?;
    if tasks.is_empty() {
        anyhow::bail!("Nothing to upload: pass files as arguments or use --manifest");
    }
    tracing::debug!("assembled {} upload tasks", tasks.len());

    let token = resolve_token(cli.token).await?;
    let repository = Repository::new(cli.owner, cli.repo).with_branch(cli.branch);
    let client = ContentsClient::new(token)?;

    println!(
        "Uploading {} files to {}...",
        tasks.len(),
        repository.full_name()
    );
    println!();

    let report = ghput_uploader::upload_all(&client, &repository, &tasks).await;

    for (task, outcome) in report.results() {
        match outcome {
            UploadOutcome::Uploaded => println!("✓ {}", task.remote_path),
            UploadOutcome::LocalMissing => println!(
                "✗ {}: file not found at {}",
                task.remote_path,
                task.local_path.display()
            ),
            UploadOutcome::Rejected {
                status,
                body_excerpt,
            } => println!("✗ {}: {} - {}", task.remote_path, status, body_excerpt),
            UploadOutcome::Failed { message } => {
                println!("✗ {}: {}", task.remote_path, message)
            }
        }
    }

    println!();
    println!("{}", report.summary_line());

    Ok(report)
}

/// Manifest entries first, then positional specs, in the order given.
fn assemble_tasks(cli: &Cli) -> Result<Vec<UploadTask>> {
    let mut tasks = Vec::new();

    if let Some(path) = &cli.manifest {
        tasks.extend(load_manifest(path)?);
    }

    for spec in &cli.files {
        tasks.push(parse_spec(spec)?);
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["ghput", "--owner", "acme", "--repo", "site"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_assemble_positional_specs() {
        let cli = parse(&["src/a.txt=docs/a.txt", "b.txt"]);
        let tasks = assemble_tasks(&cli).unwrap();
        assert_eq!(tasks[0], UploadTask::new("src/a.txt", "docs/a.txt"));
        assert_eq!(tasks[1], UploadTask::new("b.txt", "b.txt"));
    }

    #[test]
    fn test_assemble_manifest_entries_come_first() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("files.json");
        fs::write(
            &manifest,
            r#"[{"local": "a.txt"}, {"local": "b.txt", "remote": "docs/b.txt"}]"#,
        )
        .unwrap();

        let cli = parse(&["--manifest", manifest.to_str().unwrap(), "c.txt"]);
        let tasks = assemble_tasks(&cli).unwrap();

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].remote_path, "a.txt");
        assert_eq!(tasks[1].remote_path, "docs/b.txt");
        assert_eq!(tasks[2].remote_path, "c.txt");
    }

    #[test]
    fn test_assemble_rejects_bad_spec() {
        let cli = parse(&["=docs/a.txt"]);
        assert!(assemble_tasks(&cli).is_err());
    }

    #[test]
    fn test_assemble_empty_without_inputs() {
        let cli = parse(&[]);
        assert!(assemble_tasks(&cli).unwrap().is_empty());
    }
}
