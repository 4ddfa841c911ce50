//! Probe outcome classification
//!
//! The Netvisor tools report state through text only: an already-reset switch
//! surfaces as a permission error on the probe, an unreachable one as a
//! routing error. Classification is a prioritized rule table over the probe's
//! (stdout, stderr) pair, first match wins, with an explicit fallback so every
//! possible output lands in exactly one category.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeCategory {
    ResetSucceeded,
    AlreadyReset,
    Unreachable,
    Failed,
}

impl OutcomeCategory {
    pub fn message(&self) -> &'static str {
        match self {
            OutcomeCategory::ResetSucceeded => "Switch config reset completed successfully",
            OutcomeCategory::AlreadyReset => "Switch has been already reset",
            OutcomeCategory::Unreachable => "Switch is unreachable",
            OutcomeCategory::Failed => "Could not reset the switch",
        }
    }
}

/// Per-target classified result.
#[derive(Debug, Clone, Serialize)]
pub struct HostOutcome {
    pub switch: String,
    pub category: OutcomeCategory,
    pub message: String,
}

impl HostOutcome {
    pub fn new(switch: impl Into<String>, category: OutcomeCategory) -> Self {
        Self {
            switch: switch.into(),
            category,
            message: category.message().to_string(),
        }
    }
}

// Checked in order against the lowercased stderr when the probe produced no
// stdout. New vendor wordings get added here, not in control flow.
const STDERR_RULES: &[(&str, OutcomeCategory)] = &[
    ("permission denied", OutcomeCategory::AlreadyReset),
    ("no route to host", OutcomeCategory::Unreachable),
];

/// Classify a probe's captured output. Total: every (stdout, stderr) pair
/// maps to exactly one category.
pub fn classify(stdout: &str, stderr: &str) -> OutcomeCategory {
    if !stdout.is_empty() {
        return OutcomeCategory::ResetSucceeded;
    }

    let stderr = stderr.to_lowercase();
    for (pattern, category) in STDERR_RULES {
        if stderr.contains(pattern) {
            return *category;
        }
    }

    OutcomeCategory::Failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ok", "" => OutcomeCategory::ResetSucceeded; "non-empty stdout wins")]
    #[test_case("", "Permission denied" => OutcomeCategory::AlreadyReset; "permission error")]
    #[test_case("", "ssh: connect to host 10.0.0.1 port 22: No route to host" => OutcomeCategory::Unreachable; "routing error")]
    #[test_case("", "connection timed out" => OutcomeCategory::Failed; "unknown error text")]
    #[test_case("", "" => OutcomeCategory::Failed; "empty output")]
    #[test_case("EULA accepted", "Permission denied" => OutcomeCategory::ResetSucceeded; "stdout checked before stderr")]
    #[test_case("", "PERMISSION DENIED" => OutcomeCategory::AlreadyReset; "match is case insensitive")]
    #[test_case("", "Permission denied; No route to host" => OutcomeCategory::AlreadyReset; "rule order is significant")]
    fn test_classify(stdout: &str, stderr: &str) -> OutcomeCategory {
        classify(stdout, stderr)
    }

    #[test]
    fn test_category_messages() {
        assert_eq!(
            OutcomeCategory::ResetSucceeded.message(),
            "Switch config reset completed successfully"
        );
        assert_eq!(
            OutcomeCategory::AlreadyReset.message(),
            "Switch has been already reset"
        );
        assert_eq!(OutcomeCategory::Unreachable.message(), "Switch is unreachable");
        assert_eq!(OutcomeCategory::Failed.message(), "Could not reset the switch");
    }

    #[test]
    fn test_host_outcome_carries_category_message() {
        let outcome = HostOutcome::new("sw01", OutcomeCategory::Unreachable);
        assert_eq!(outcome.switch, "sw01");
        assert_eq!(outcome.message, "Switch is unreachable");
    }
}
