//! Severity verdict for a single comparison.

use std::fmt;

/// Severity of one discovered difference, in increasing order.
///
/// `Equal` means no difference, `Similar` a difference that does not break
/// equivalence for the caller's purposes, `Different` a real difference.
/// Evaluators speak in terms of "downgrading" (toward `Equal`) and
/// "upgrading" (toward `Different`) a verdict; the derived ordering exists
/// for callers reasoning that way, the core never branches on it numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// No difference.
    Equal,
    /// A difference, but the documents are still equivalent.
    Similar,
    /// A real difference.
    Different,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Equal => "EQUAL",
            Outcome::Similar => "SIMILAR",
            Outcome::Different => "DIFFERENT",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Outcome::Equal < Outcome::Similar);
        assert!(Outcome::Similar < Outcome::Different);
    }

    #[test]
    fn display_uses_stable_names() {
        assert_eq!(Outcome::Equal.to_string(), "EQUAL");
        assert_eq!(Outcome::Similar.to_string(), "SIMILAR");
        assert_eq!(Outcome::Different.to_string(), "DIFFERENT");
    }

    #[test]
    fn serde_names_match_display() {
        let json = serde_json::to_string(&Outcome::Similar).unwrap();
        assert_eq!(json, "\"SIMILAR\"");
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Similar);
    }
}
