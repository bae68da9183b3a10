//! Wireframe generation job types.
//!
//! A wireframe is an AI-generated markdown artifact associated with a
//! project, produced asynchronously by a backend job. The UI tracks the
//! job through a small status set and polls the backend until the job
//! leaves the pending state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the backend's job queue.
pub type JobId = uuid::Uuid;

/// The status of a wireframe generation job.
///
/// # Examples
///
/// ```
/// use storymap_protocol::WireframeStatus;
///
/// assert!(!WireframeStatus::Pending.is_terminal());
/// assert!(WireframeStatus::Success.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WireframeStatus {
    /// No job has been requested.
    #[default]
    Idle,
    /// A job is queued or running.
    Pending,
    /// The last job produced markdown.
    Success,
    /// The last job failed.
    Error,
}

impl WireframeStatus {
    /// Returns `true` once the job has resolved either way.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    /// Returns `true` while a poll loop should keep running.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns a human-readable display name for the status.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending => "Generating…",
            Self::Success => "Ready",
            Self::Error => "Failed",
        }
    }
}

/// Local snapshot of the wireframe job the UI is tracking.
///
/// Transitions: `Idle → Pending` on a generate request, then to
/// `Success` or `Error` when a poll resolves, and back to the
/// project's persisted baseline on the next project load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireframeJob {
    /// Current local status.
    pub status: WireframeStatus,
    /// Queue job id, once a generate request was accepted.
    pub job_id: Option<JobId>,
    /// Error message from the last failed job, if any.
    pub error_message: Option<String>,
    /// When the wireframe was last generated, per the backend.
    pub generated_at: Option<DateTime<Utc>>,
}

impl WireframeJob {
    /// Marks the job pending, clearing any prior error.
    pub fn begin(&mut self, job_id: JobId) {
        self.status = WireframeStatus::Pending;
        self.job_id = Some(job_id);
        self.error_message = None;
    }

    /// Applies a polled status, overwriting the local state.
    pub fn apply(&mut self, status: WireframeStatus, error: Option<String>) {
        self.status = status;
        self.error_message = error;
    }

    /// Resets to the project's persisted baseline.
    pub fn reset_to(&mut self, status: Option<WireframeStatus>, error: Option<String>) {
        self.status = status.unwrap_or_default();
        self.job_id = None;
        self.error_message = error;
    }
}
