use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tracks the lifecycle status of an avatar job.
///
/// Each job flows through: PENDING → {COMPLETED, REJECTED, FAILED}.
/// The three right-hand states are terminal; no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Completed,
    Rejected,
    Failed,
}

impl JobStatus {
    /// Whether this status admits no further transition.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Rejected => write!(f, "rejected"),
            JobStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A single avatar generation request and its outcome.
///
/// Field invariants, maintained by the transition methods:
/// - `avatar_url` is `Some` iff `status` is [`JobStatus::Completed`]
/// - `error_message` is `Some` iff `status` is `Rejected` or `Failed`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub requester_id: String,
    pub prompt: String,
    pub status: JobStatus,
    pub avatar_url: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Create a pending job with a fresh unique id.
    pub fn new(requester_id: String, prompt: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            requester_id,
            prompt,
            status: JobStatus::Pending,
            avatar_url: None,
            error_message: None,
            created_at: Utc::now(),
        }
    }

    /// The moderation verdict approved the content; keep the provisional
    /// avatar URL assigned before the moderation call.
    pub(crate) fn complete(&mut self) {
        debug_assert_eq!(self.status, JobStatus::Pending);
        debug_assert!(self.avatar_url.is_some());
        self.status = JobStatus::Completed;
    }

    /// The moderation verdict rejected the content. The provisional avatar
    /// URL is discarded so rejected content is never referenced.
    pub(crate) fn reject(&mut self, reason: String) {
        debug_assert_eq!(self.status, JobStatus::Pending);
        self.status = JobStatus::Rejected;
        self.error_message = Some(reason);
        self.avatar_url = None;
    }

    /// Processing failed before a verdict could be obtained.
    pub(crate) fn fail(&mut self, message: String) {
        debug_assert_eq!(self.status, JobStatus::Pending);
        self.status = JobStatus::Failed;
        self.error_message = Some(message);
        self.avatar_url = None;
    }
}
