use std::collections::HashMap;
use std::sync::Mutex;

use crate::job::Job;

/// In-memory job storage, keyed by job id.
///
/// Owns the canonical copy of every job the service has processed. The
/// interior mutex keeps `put`/`get` safe when the service is shared across
/// tasks; lookups return a cloned snapshot, so a held `Job` never observes
/// later mutation of the stored record.
pub struct JobStore {
    jobs: Mutex<HashMap<String, Job>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(HashMap::new()),
        }
    }

    /// Insert a job, overwriting any previous record with the same id.
    pub fn put(&self, job: Job) {
        let mut jobs = self.jobs.lock().expect("job store mutex poisoned");
        jobs.insert(job.id.clone(), job);
    }

    /// Look up a job by id. Returns `None` for unknown ids.
    pub fn get(&self, id: &str) -> Option<Job> {
        let jobs = self.jobs.lock().expect("job store mutex poisoned");
        jobs.get(id).cloned()
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}
