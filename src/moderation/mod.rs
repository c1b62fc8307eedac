pub mod client;
pub mod error;
pub mod simulator;
pub mod types;

pub use client::ModerationClient;
pub use error::ModerationError;
pub use simulator::ModerationSimulator;
pub use types::{ModerationRequest, ModerationResponse, ModerationVerdict, DEFAULT_REASON};

/// A source of moderation verdicts, selected at service construction.
///
/// Two implementations exist: [`ModerationClient`] calls the remote
/// moderation endpoint, [`ModerationSimulator`] answers from local
/// deterministic rules. Call sites take `impl ModerationProvider`, so
/// tests can substitute their own.
pub trait ModerationProvider {
    /// Obtain a verdict for `content` submitted by `requester_id`.
    async fn moderate(
        &self,
        content: &str,
        requester_id: &str,
    ) -> Result<ModerationVerdict, ModerationError>;
}
