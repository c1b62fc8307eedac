use super::error::ModerationError;
use super::types::ModerationVerdict;
use super::ModerationProvider;

/// Keywords that trigger rejection, scanned in declaration order.
/// Matching is substring-based and case-insensitive, so "killer" matches
/// "kill". Rejection reasons report at most the first three matches in
/// this order, not input order.
const DENYLIST: &[&str] = &[
    // violence
    "violent", "violence", "weapon", "weapons", "gun", "knife", "sword",
    "blood", "bloody", "gore", "death", "kill", "murder",
    // hate / extremism
    "hate", "nazi", "racist", "terror", "bomb",
    // sexual content
    "nude", "naked", "sexual", "porn", "explicit",
    // substances
    "drug", "cocaine", "marijuana", "alcohol",
];

const MAX_CONTENT_CHARS: usize = 1000;
const MAX_REPORTED_KEYWORDS: usize = 3;

/// Deterministic stand-in for the remote moderation service.
///
/// A total function over its input with no external dependency, so tests
/// built on it are reproducible. Not a production classifier.
pub struct ModerationSimulator;

impl ModerationSimulator {
    /// Evaluate content against the offline policy. First match wins:
    /// empty content, oversized content, denylisted keywords, approval.
    pub fn simulate(content: &str) -> ModerationVerdict {
        if content.trim().is_empty() {
            return ModerationVerdict::reject("Content cannot be empty");
        }

        // Length is measured before trimming.
        if content.chars().count() > MAX_CONTENT_CHARS {
            return ModerationVerdict::reject("Content exceeds maximum length limit");
        }

        let lower = content.to_lowercase();
        let matched: Vec<&str> = DENYLIST
            .iter()
            .filter(|keyword| lower.contains(**keyword))
            .copied()
            .collect();

        if !matched.is_empty() {
            let reported = matched[..matched.len().min(MAX_REPORTED_KEYWORDS)].join(", ");
            return ModerationVerdict::reject(format!(
                "Content contains inappropriate material: {reported}"
            ));
        }

        ModerationVerdict::approve("Content appears safe and appropriate")
    }
}

impl ModerationProvider for ModerationSimulator {
    async fn moderate(
        &self,
        content: &str,
        _requester_id: &str,
    ) -> Result<ModerationVerdict, ModerationError> {
        Ok(Self::simulate(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_content_is_approved() {
        let verdict =
            ModerationSimulator::simulate("A friendly robot avatar with blue eyes and a smile");
        assert!(verdict.approved);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Content appears safe and appropriate")
        );
    }

    #[test]
    fn empty_content_is_rejected() {
        let verdict = ModerationSimulator::simulate("");
        assert!(!verdict.approved);
        assert_eq!(verdict.reason.as_deref(), Some("Content cannot be empty"));
    }

    #[test]
    fn whitespace_only_content_is_rejected_as_empty() {
        let verdict = ModerationSimulator::simulate("   \t\n  ");
        assert!(!verdict.approved);
        assert_eq!(verdict.reason.as_deref(), Some("Content cannot be empty"));
    }

    #[test]
    fn oversized_content_is_rejected() {
        let verdict = ModerationSimulator::simulate(&"a".repeat(1001));
        assert!(!verdict.approved);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Content exceeds maximum length limit")
        );
    }

    #[test]
    fn content_at_length_limit_passes_length_check() {
        let verdict = ModerationSimulator::simulate(&"a".repeat(1000));
        assert!(verdict.approved);
    }

    #[test]
    fn keyword_rejection_lists_matches_in_denylist_order() {
        let verdict = ModerationSimulator::simulate("Violent avatar with weapons and blood");
        assert!(!verdict.approved);
        // "weapon" precedes "weapons" in the denylist and both match.
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Content contains inappropriate material: violent, weapon, weapons")
        );
    }

    #[test]
    fn keyword_report_is_capped_at_three() {
        let verdict = ModerationSimulator::simulate("gun knife sword blood gore");
        assert!(!verdict.approved);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Content contains inappropriate material: gun, knife, sword")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let verdict = ModerationSimulator::simulate("NAZI imagery");
        assert!(!verdict.approved);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Content contains inappropriate material: nazi")
        );
    }

    #[test]
    fn substring_matching_catches_embedded_keywords() {
        // "killer" contains "kill".
        let verdict = ModerationSimulator::simulate("a killer smile");
        assert!(!verdict.approved);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Content contains inappropriate material: kill")
        );
    }

    #[test]
    fn empty_check_precedes_length_check() {
        let verdict = ModerationSimulator::simulate(&" ".repeat(2000));
        assert_eq!(verdict.reason.as_deref(), Some("Content cannot be empty"));
    }

    #[test]
    fn length_check_precedes_keyword_scan() {
        let content = format!("violent {}", "a".repeat(1000));
        let verdict = ModerationSimulator::simulate(&content);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Content exceeds maximum length limit")
        );
    }

    #[test]
    fn simulate_is_deterministic() {
        let first = ModerationSimulator::simulate("A friendly robot avatar");
        let second = ModerationSimulator::simulate("A friendly robot avatar");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn provider_impl_never_fails() {
        let simulator = ModerationSimulator;
        let verdict = simulator.moderate("A friendly robot", "user123").await.unwrap();
        assert!(verdict.approved);
    }
}
