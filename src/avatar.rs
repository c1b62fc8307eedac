use chrono::Utc;
use sha2::{Digest, Sha256};

const AVATAR_BASE_URL: &str = "https://avatars.example.com";

/// Produces placeholder avatar URLs standing in for a real generation engine.
pub struct AvatarGenerator;

impl AvatarGenerator {
    /// Build a placeholder URL of the form
    /// `https://avatars.example.com/avatar_<8-hex>.png`.
    ///
    /// The suffix is derived from a digest of the prompt and the current
    /// time, so repeated prompts still vary. This is a placeholder, not a
    /// content-addressed identifier; collisions are tolerated.
    pub fn generate(prompt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(prompt.as_bytes());
        hasher.update(b"|");
        hasher.update(Utc::now().timestamp_micros().to_le_bytes());
        let digest = hasher.finalize();

        format!("{AVATAR_BASE_URL}/avatar_{}.png", &hex::encode(digest)[..8])
    }
}
