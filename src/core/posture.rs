//! Posture Detector: keyword groups checked in priority order
//!
//! Cert phrasing is checked first because it routinely co-occurs with
//! emergency and merits language in real filings.

use crate::types::{Posture, PostureSelection};

/// Keyword groups in priority order
const POSTURE_KEYWORDS: [(Posture, &[&str]); 3] = [
    (
        Posture::Cert,
        &["petition for writ of certiorari", "cert petition", "questions presented"],
    ),
    (
        Posture::Emergency,
        &["emergency application", "stay pending", "irreparable harm"],
    ),
    (
        Posture::Merits,
        &["merits brief", "brief for petitioner", "brief for respondent"],
    ),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct PostureDetector;

impl PostureDetector {
    pub fn new() -> Self {
        Self
    }

    /// First matching group wins; no match means cert
    pub fn detect(&self, text: &str) -> Posture {
        let lower = text.to_lowercase();

        POSTURE_KEYWORDS
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| lower.contains(p)))
            .map(|(posture, _)| *posture)
            .unwrap_or_default()
    }

    /// An explicit selection overrides detection
    pub fn resolve(&self, selection: PostureSelection, text: &str) -> Posture {
        selection.explicit().unwrap_or_else(|| self.detect(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_group() {
        let d = PostureDetector::new();
        assert_eq!(d.detect("PETITION FOR WRIT OF CERTIORARI"), Posture::Cert);
        assert_eq!(d.detect("An Emergency Application for a stay"), Posture::Emergency);
        assert_eq!(d.detect("risk of irreparable harm"), Posture::Emergency);
        assert_eq!(d.detect("BRIEF FOR RESPONDENT"), Posture::Merits);
        assert_eq!(d.detect("This merits brief argues"), Posture::Merits);
    }

    #[test]
    fn test_default_is_cert() {
        let d = PostureDetector::new();
        assert_eq!(d.detect(""), Posture::Cert);
        assert_eq!(d.detect("A short note about a case."), Posture::Cert);
    }

    #[test]
    fn test_cert_beats_emergency() {
        let d = PostureDetector::new();
        let text = "QUESTIONS PRESENTED ... the applicant seeks a stay pending appeal";
        assert_eq!(d.detect(text), Posture::Cert);
    }

    #[test]
    fn test_emergency_beats_merits() {
        let d = PostureDetector::new();
        let text = "Brief for Petitioner in support of the stay pending review";
        assert_eq!(d.detect(text), Posture::Emergency);
    }

    #[test]
    fn test_idempotent() {
        let d = PostureDetector::new();
        let text = "stay pending appeal";
        assert_eq!(d.detect(text), d.detect(text));
    }

    #[test]
    fn test_explicit_selection_overrides() {
        let d = PostureDetector::new();
        let text = "PETITION FOR WRIT OF CERTIORARI";
        assert_eq!(d.resolve(PostureSelection::Merits, text), Posture::Merits);
        assert_eq!(d.resolve(PostureSelection::Auto, text), Posture::Cert);
    }
}
