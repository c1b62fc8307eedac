//! Avatar generation jobs with synchronous content moderation.
//!
//! A submission creates a job, produces a placeholder avatar reference,
//! asks a moderation provider for a verdict, and records a terminal
//! disposition (`completed`, `rejected`, or `failed`) in an in-memory
//! store keyed by job id. Moderation can run against a real remote
//! endpoint or a deterministic local simulator.
//!
//! ```no_run
//! use avatarforge::AvatarService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = AvatarService::simulated();
//!     let job = service.submit_job("user123", "A friendly robot avatar").await;
//!     println!("{} -> {}", job.id, job.status);
//! }
//! ```

pub mod avatar;
pub mod cli;
pub mod config;
pub mod job;
pub mod moderation;
pub mod service;
pub mod store;
pub mod ui;

pub use avatar::AvatarGenerator;
pub use config::AvatarConfig;
pub use job::{Job, JobStatus};
pub use moderation::{
    ModerationClient, ModerationError, ModerationProvider, ModerationSimulator, ModerationVerdict,
};
pub use service::AvatarService;
pub use store::JobStore;
