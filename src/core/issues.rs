//! Issue Detector: one independent regex per legal topic
//!
//! Patterns are plain case-insensitive alternations with no word boundaries,
//! so "vra" also fires inside longer tokens. Flags never interact.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::IssueFlags;

lazy_static! {
    // =========================================================================
    // Voting Rights Act
    // =========================================================================
    static ref RE_VRA: Regex = Regex::new(
        r"(?i)voting rights act|vra|section 2"
    ).unwrap();

    // =========================================================================
    // Equal Protection
    // =========================================================================
    static ref RE_EQUAL_PROTECTION: Regex = Regex::new(
        r"(?i)equal protection|14th amendment|fourteenth amendment"
    ).unwrap();

    // =========================================================================
    // First Amendment
    // =========================================================================
    static ref RE_FIRST_AMENDMENT: Regex = Regex::new(
        r"(?i)first amendment|free speech|free exercise"
    ).unwrap();

    // =========================================================================
    // Separation of powers
    // =========================================================================
    static ref RE_SEPARATION_OF_POWERS: Regex = Regex::new(
        r"(?i)separation of powers|executive power|removal"
    ).unwrap();

    // =========================================================================
    // Standing
    // =========================================================================
    static ref RE_STANDING: Regex = Regex::new(
        r"(?i)standing|injury in fact|case or controversy"
    ).unwrap();
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IssueDetector;

impl IssueDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, text: &str) -> IssueFlags {
        IssueFlags {
            vra: RE_VRA.is_match(text),
            equal_protection: RE_EQUAL_PROTECTION.is_match(text),
            first_amendment: RE_FIRST_AMENDMENT.is_match(text),
            separation_of_powers: RE_SEPARATION_OF_POWERS.is_match(text),
            standing: RE_STANDING.is_match(text),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text_has_no_flags() {
        let flags = IssueDetector::new().detect("");
        assert!(flags.is_empty());
    }

    #[test]
    fn test_first_amendment_only() {
        let flags = IssueDetector::new().detect("The ordinance burdens free speech in a public forum.");
        assert_eq!(
            flags,
            IssueFlags { first_amendment: true, ..Default::default() }
        );
    }

    #[test]
    fn test_case_insensitive() {
        let d = IssueDetector::new();
        assert!(d.detect("VOTING RIGHTS ACT").vra);
        assert!(d.detect("Fourteenth Amendment").equal_protection);
        assert!(d.detect("Separation Of Powers").separation_of_powers);
        assert!(d.detect("INJURY IN FACT").standing);
    }

    #[test]
    fn test_flags_are_independent() {
        let flags = IssueDetector::new().detect(
            "Section 2 claims, equal protection, removal protections and standing all at once",
        );
        assert!(flags.vra);
        assert!(flags.equal_protection);
        assert!(flags.separation_of_powers);
        assert!(flags.standing);
        assert!(!flags.first_amendment);
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        let d = IssueDetector::new();
        // "notwithstanding" contains "standing"
        assert!(d.detect("notwithstanding the statute").standing);
    }
}
