use crate::UploadTask;
use serde::{Deserialize, Serialize};

/// Longest response-body excerpt carried in a failure reason.
pub const BODY_EXCERPT_CHARS: usize = 100;

/// Per-task result of one upload attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadOutcome {
    /// The API accepted the file (HTTP 200 or 201).
    Uploaded,
    /// The local file does not exist; no request was made.
    LocalMissing,
    /// The API answered with a status outside {200, 201}.
    Rejected { status: u16, body_excerpt: String },
    /// Reading the file or performing the request failed outright.
    Failed { message: String },
}

impl UploadOutcome {
    /// Rejection with the response body clipped to [`BODY_EXCERPT_CHARS`].
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected {
            status,
            body_excerpt: body.chars().take(BODY_EXCERPT_CHARS).collect(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Uploaded)
    }

    /// Why the task failed; `None` when it succeeded.
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Uploaded => None,
            Self::LocalMissing => Some("local file not found".to_string()),
            Self::Rejected {
                status,
                body_excerpt,
            } => Some(format!("{} - {}", status, body_excerpt)),
            Self::Failed { message } => Some(message.clone()),
        }
    }
}

/// Ordered record of a whole run, one entry per task.
///
/// The tally is derived from the recorded outcomes so it can be checked
/// without capturing console output.
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    results: Vec<(UploadTask, UploadOutcome)>,
}

impl UploadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, task: UploadTask, outcome: UploadOutcome) {
        self.results.push((task, outcome));
    }

    pub fn results(&self) -> &[(UploadTask, UploadOutcome)] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| outcome.is_success())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Trailing `S/N` summary line.
    pub fn summary_line(&self) -> String {
        format!(
            "Upload complete: {}/{} files uploaded",
            self.succeeded(),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(n: &str) -> UploadTask {
        UploadTask::new(format!("/tmp/{}", n), n)
    }

    #[test]
    fn test_outcome_success() {
        assert!(UploadOutcome::Uploaded.is_success());
        assert!(UploadOutcome::Uploaded.failure_reason().is_none());
        assert!(!UploadOutcome::LocalMissing.is_success());
    }

    #[test]
    fn test_rejected_clips_body() {
        let body = "x".repeat(500);
        let outcome = UploadOutcome::rejected(422, &body);
        match &outcome {
            UploadOutcome::Rejected {
                status,
                body_excerpt,
            } => {
                assert_eq!(*status, 422);
                assert_eq!(body_excerpt.chars().count(), BODY_EXCERPT_CHARS);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let reason = outcome.failure_reason().unwrap();
        assert!(reason.starts_with("422 - "));
    }

    #[test]
    fn test_rejected_clips_on_char_boundary() {
        // Multi-byte content must not split a character.
        let body = "é".repeat(200);
        let outcome = UploadOutcome::rejected(500, &body);
        match outcome {
            UploadOutcome::Rejected { body_excerpt, .. } => {
                assert_eq!(body_excerpt.chars().count(), BODY_EXCERPT_CHARS);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_rejected_keeps_short_body() {
        let outcome = UploadOutcome::rejected(404, "Not Found");
        assert_eq!(
            outcome.failure_reason().unwrap(),
            "404 - Not Found".to_string()
        );
    }

    #[test]
    fn test_report_tally() {
        let mut report = UploadReport::new();
        report.record(task("a.txt"), UploadOutcome::Uploaded);
        report.record(task("b.txt"), UploadOutcome::LocalMissing);
        report.record(task("c.txt"), UploadOutcome::rejected(422, "missing sha"));
        report.record(task("d.txt"), UploadOutcome::Uploaded);

        assert_eq!(report.total(), 4);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 2);
        assert!(!report.all_succeeded());
        assert_eq!(report.summary_line(), "Upload complete: 2/4 files uploaded");
    }

    #[test]
    fn test_report_preserves_order() {
        let mut report = UploadReport::new();
        for name in ["1.txt", "2.txt", "3.txt"] {
            report.record(task(name), UploadOutcome::Uploaded);
        }

        let names: Vec<&str> = report
            .results()
            .iter()
            .map(|(t, _)| t.remote_path.as_str())
            .collect();
        assert_eq!(names, vec!["1.txt", "2.txt", "3.txt"]);
    }

    #[test]
    fn test_empty_report() {
        let report = UploadReport::new();
        assert_eq!(report.total(), 0);
        assert!(report.all_succeeded());
        assert_eq!(report.summary_line(), "Upload complete: 0/0 files uploaded");
    }
}
