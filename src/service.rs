use crate::avatar::AvatarGenerator;
use crate::job::Job;
use crate::moderation::{
    ModerationClient, ModerationProvider, ModerationSimulator, DEFAULT_REASON,
};
use crate::store::JobStore;

/// Drives avatar jobs from submission to a terminal state.
///
/// Generic over the moderation provider so live and simulated deployments
/// share one code path; the provider is fixed at construction.
pub struct AvatarService<P> {
    moderation: P,
    store: JobStore,
}

impl AvatarService<ModerationSimulator> {
    /// Service answering moderation from the local deterministic rules.
    pub fn simulated() -> Self {
        Self::with_provider(ModerationSimulator)
    }
}

impl AvatarService<ModerationClient> {
    /// Service calling the remote moderation endpoint.
    pub fn live(base_url: String, api_token: String) -> Self {
        Self::with_provider(ModerationClient::new(base_url, api_token))
    }
}

impl<P: ModerationProvider> AvatarService<P> {
    pub fn with_provider(moderation: P) -> Self {
        Self {
            moderation,
            store: JobStore::new(),
        }
    }

    /// Submit an avatar request and process it to completion.
    ///
    /// Always returns a terminal-state job and never errors: moderation
    /// failures are absorbed into the `failed` status, rejections into
    /// `rejected`. Every call mints a fresh job id; identical inputs are
    /// not deduplicated.
    pub async fn submit_job(&self, requester_id: &str, prompt: &str) -> Job {
        let mut job = Job::new(requester_id.to_string(), prompt.to_string());

        // Provisional reference; discarded unless moderation approves.
        job.avatar_url = Some(AvatarGenerator::generate(prompt));

        match self.moderation.moderate(prompt, requester_id).await {
            Ok(verdict) if verdict.approved => job.complete(),
            Ok(verdict) => {
                job.reject(verdict.reason.unwrap_or_else(|| DEFAULT_REASON.to_string()))
            }
            Err(e) => job.fail(e.to_string()),
        }

        self.store.put(job.clone());
        job
    }

    /// Look up a previously submitted job. Pure lookup, no side effects.
    pub fn job_status(&self, job_id: &str) -> Option<Job> {
        self.store.get(job_id)
    }
}
