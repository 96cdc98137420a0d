use ghput_core::{UploadOutcome, UploadReport, UploadTask};
use ghput_github::{ContentsClient, Repository};
use std::io::ErrorKind;
use tracing::{info, warn};

/// Upload one file to its remote path.
///
/// A missing local file is reported without touching the network; every
/// other failure is classified from the read or API error. Nothing here is
/// fatal to the surrounding run.
pub async fn upload_file(
    client: &ContentsClient,
    repository: &Repository,
    task: &UploadTask,
) -> UploadOutcome {
    if let Err(e) = tokio::fs::metadata(&task.local_path).await {
        return match e.kind() {
            ErrorKind::NotFound => UploadOutcome::LocalMissing,
            _ => UploadOutcome::failed(format!("{}: {}", task.local_path.display(), e)),
        };
    }

    let content = match tokio::fs::read(&task.local_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return UploadOutcome::failed(format!(
                "Failed to read {}: {}",
                task.local_path.display(),
                e
            ));
        }
    };

    match client
        .upsert_file(
            repository,
            &task.remote_path,
            &content,
            &task.commit_message(),
        )
        .await
    {
        Ok(()) => UploadOutcome::Uploaded,
        Err(ghput_github::Error::Rejected { status, body }) => {
            UploadOutcome::rejected(status, &body)
        }
        Err(e) => UploadOutcome::failed(e.to_string()),
    }
}

/// Run every task strictly in order, one at a time. Failed tasks never stop
/// the run; the report carries one outcome per task, in task order.
pub async fn upload_all(
    client: &ContentsClient,
    repository: &Repository,
    tasks: &[UploadTask],
) -> UploadReport {
    let mut report = UploadReport::new();

    for task in tasks {
        let outcome = upload_file(client, repository, task).await;

        match outcome.failure_reason() {
            None => info!("uploaded {} to {}", task.remote_path, repository.full_name()),
            Some(reason) => warn!("upload of {} failed: {}", task.remote_path, reason),
        }

        report.record(task.clone(), outcome);
    }

    report
}
