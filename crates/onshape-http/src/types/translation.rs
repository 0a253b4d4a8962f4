//! Translation job view objects.

use serde::Deserialize;

/// Server-side lifecycle of a translation job, as reported by
/// `requestState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobState {
    Queued,
    Active,
    Done,
    Failed,
    /// A state string this client does not know. Treated as still running.
    Unknown,
}

impl JobState {
    pub fn from_wire(state: &str) -> Self {
        match state {
            "QUEUED" => JobState::Queued,
            "ACTIVE" => JobState::Active,
            "DONE" => JobState::Done,
            "FAILED" => JobState::Failed,
            _ => JobState::Unknown,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Done | JobState::Failed)
    }
}

/// A translation job as the platform reports it. The submit response and
/// every poll response both decode into this shape; the result fields stay
/// empty until the job is DONE.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TranslationJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "requestState", default)]
    pub request_state: Option<String>,
    #[serde(rename = "resultExternalDataIds", default)]
    pub result_external_data_ids: Vec<String>,
    #[serde(rename = "documentId", default)]
    pub document_id: Option<String>,
    /// Self link. Its trailing path segment is the job id.
    #[serde(default)]
    pub href: Option<String>,
}

impl TranslationJob {
    pub fn state(&self) -> Option<JobState> {
        self.request_state.as_deref().map(JobState::from_wire)
    }

    /// The job id, taken from the trailing segment of the self link.
    pub fn job_id_from_href(&self) -> Option<&str> {
        self.href
            .as_deref()
            .map(|h| h.trim_end_matches('/'))
            .and_then(|h| h.rsplit('/').next())
            .filter(|s| !s.is_empty())
    }
}
