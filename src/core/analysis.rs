//! Analysis Generator: issue flags → precedents, traps, risk table, questions

use chrono::Utc;
use tracing::debug;

use crate::core::bench::persona_questions;
use crate::core::{IssueDetector, PostureDetector, TierClassifier};
use crate::types::{
    AnalysisRequest, AnalysisResult, InputTier, IssueFlags, OverallRisk, PrecedentEntry,
    Posture, RiskLevel, RiskRow, TrapEntry,
};

pub const DEFAULT_TITLE: &str = "Case Analysis";
pub const DEFAULT_DIG_RISK: &str = "Medium";
pub const DEFAULT_OBSTACLE: &str = "Incomplete record limits full analysis";
pub const VRA_OBSTACLE: &str = "Tension between VRA compliance and Equal Protection strict scrutiny";
pub const REWRITE_DIRECTIVE: &str = "Upload complete petition text for comprehensive evaluation";

/// Rule-based strategic analysis
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalysisGenerator {
    issues: IssueDetector,
    tiers: TierClassifier,
    postures: PostureDetector,
}

impl AnalysisGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate from resolved posture and tier
    pub fn generate(&self, text: &str, title: &str, posture: Posture, tier: InputTier) -> AnalysisResult {
        let issues = self.issues.detect(text);
        let dig_risk = DEFAULT_DIG_RISK;

        let primary_obstacle = if issues.vra || issues.equal_protection {
            VRA_OBSTACLE
        } else {
            DEFAULT_OBSTACLE
        };

        let precedents = precedents_for(&issues);
        debug!(
            ?issues,
            precedents = precedents.len(),
            %tier,
            %posture,
            "generated local analysis"
        );

        AnalysisResult {
            title: if title.trim().is_empty() { DEFAULT_TITLE.to_string() } else { title.to_string() },
            tier,
            posture,
            risk_level: OverallRisk::Caution,
            dig_risk: dig_risk.to_string(),
            primary_obstacle: primary_obstacle.to_string(),
            rewrite_directive: REWRITE_DIRECTIVE.to_string(),
            precedents,
            traps: strategic_traps(),
            risks: risk_table(tier, dig_risk),
            justice_questions: persona_questions(posture, &issues),
            issues,
            timestamp: Utc::now(),
        }
    }

    /// Generate from a wire request, resolving posture and tier when absent
    pub fn generate_request(&self, req: &AnalysisRequest) -> AnalysisResult {
        let text = req.text.trim();
        let posture = self.postures.resolve(req.posture, text);
        let tier = req.tier.unwrap_or_else(|| self.tiers.classify(text, 0));
        self.generate(text, req.title.trim(), posture, tier)
    }
}

/// Precedents in detection order; duplicates are kept
pub fn precedents_for(issues: &IssueFlags) -> Vec<PrecedentEntry> {
    let mut precedents = Vec::new();

    if issues.vra || issues.equal_protection {
        precedents.push(PrecedentEntry::new(
            "Shaw v. Reno, 509 U.S. 630 (1993)",
            "https://supreme.justia.com/cases/federal/us/509/630/",
            "Racial gerrymandering violates Equal Protection",
            RiskLevel::Medium,
        ));
        precedents.push(PrecedentEntry::new(
            "Thornburg v. Gingles, 478 U.S. 30 (1986)",
            "https://supreme.justia.com/cases/federal/us/478/30/",
            "Section 2 VRA preconditions for vote dilution claims",
            RiskLevel::High,
        ));
    }

    if issues.first_amendment {
        precedents.push(PrecedentEntry::new(
            "Reed v. Town of Gilbert, 576 U.S. 155 (2015)",
            "https://supreme.justia.com/cases/federal/us/576/155/",
            "Content-based restrictions subject to strict scrutiny",
            RiskLevel::Medium,
        ));
    }

    if issues.separation_of_powers {
        precedents.push(PrecedentEntry::new(
            "Humphrey's Executor v. United States, 295 U.S. 602 (1935)",
            "https://supreme.justia.com/cases/federal/us/295/602/",
            "Congressional limits on removal power",
            RiskLevel::High,
        ));
        precedents.push(PrecedentEntry::new(
            "Seila Law LLC v. CFPB, 591 U.S. ___ (2020)",
            "https://supreme.justia.com/cases/federal/us/591/19-7/",
            "Single-director removal restrictions unconstitutional",
            RiskLevel::Medium,
        ));
    }

    if issues.standing {
        precedents.push(PrecedentEntry::new(
            "Lujan v. Defenders of Wildlife, 504 U.S. 555 (1992)",
            "https://supreme.justia.com/cases/federal/us/504/555/",
            "Article III standing requirements",
            RiskLevel::High,
        ));
    }

    if precedents.is_empty() {
        precedents.push(PrecedentEntry::new(
            "Marbury v. Madison, 5 U.S. 137 (1803)",
            "https://supreme.justia.com/cases/federal/us/5/137/",
            "Foundational judicial review authority",
            RiskLevel::Low,
        ));
    }

    precedents
}

/// Fixed trap/counter pairs
pub fn strategic_traps() -> Vec<TrapEntry> {
    vec![
        TrapEntry::trap(
            "Conceding jurisdictional or procedural defects while focusing solely on merits arguments",
        ),
        TrapEntry::counter(
            "Lead with clean vehicle demonstration; address procedural posture before substantive arguments",
        ),
        TrapEntry::trap(
            "Over-relying on circuit split without demonstrating conflict maturity or percolation",
        ),
        TrapEntry::counter(
            "Document specific contradictory holdings with parallel fact patterns across circuits",
        ),
    ]
}

/// Four fixed categories; vehicle integrity tracks the tier, DIG risk echoes the label
pub fn risk_table(tier: InputTier, dig_risk: &str) -> Vec<RiskRow> {
    let full = tier == InputTier::A;
    vec![
        RiskRow::new(
            "Vehicle Integrity",
            if full { RiskLevel::Low } else { RiskLevel::Medium },
            if full { "High" } else { "Limited data" },
        ),
        RiskRow::new("Circuit Split Quality", RiskLevel::Medium, "Requires verification"),
        RiskRow::new("Preservation", RiskLevel::Medium, "Check record"),
        RiskRow::new("DIG Risk", RiskLevel::from_label(dig_risk), "Based on posture"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrapKind;
    use pretty_assertions::assert_eq;

    fn citations(result: &AnalysisResult) -> Vec<&str> {
        result.precedents.iter().map(|p| p.citation.as_str()).collect()
    }

    #[test]
    fn test_no_flags_single_default_precedent() {
        let result = AnalysisGenerator::new().generate(
            "A dispute over a contract.",
            "Doe v. Roe",
            Posture::Cert,
            InputTier::C,
        );
        assert_eq!(result.precedents.len(), 1);
        assert_eq!(result.precedents[0].citation, "Marbury v. Madison, 5 U.S. 137 (1803)");
        assert_eq!(result.precedents[0].risk, RiskLevel::Low);
        assert_eq!(result.primary_obstacle, DEFAULT_OBSTACLE);
    }

    #[test]
    fn test_detection_order() {
        let result = AnalysisGenerator::new().generate(
            "injury in fact; removal protections; free speech; equal protection",
            "",
            Posture::Cert,
            InputTier::B,
        );
        assert_eq!(
            citations(&result),
            vec![
                "Shaw v. Reno, 509 U.S. 630 (1993)",
                "Thornburg v. Gingles, 478 U.S. 30 (1986)",
                "Reed v. Town of Gilbert, 576 U.S. 155 (2015)",
                "Humphrey's Executor v. United States, 295 U.S. 602 (1935)",
                "Seila Law LLC v. CFPB, 591 U.S. ___ (2020)",
                "Lujan v. Defenders of Wildlife, 504 U.S. 555 (1992)",
            ]
        );
        assert_eq!(result.primary_obstacle, VRA_OBSTACLE);
    }

    #[test]
    fn test_vra_and_equal_protection_emit_one_pair() {
        let result = AnalysisGenerator::new().generate(
            "Voting Rights Act and Equal Protection",
            "",
            Posture::Merits,
            InputTier::B,
        );
        assert_eq!(result.precedents.len(), 2);
    }

    #[test]
    fn test_fixed_fields() {
        let result = AnalysisGenerator::new().generate("anything", "", Posture::Emergency, InputTier::C);
        assert_eq!(result.title, DEFAULT_TITLE);
        assert_eq!(result.risk_level, OverallRisk::Caution);
        assert_eq!(result.dig_risk, "Medium");
        assert_eq!(result.rewrite_directive, REWRITE_DIRECTIVE);
        assert_eq!(result.justice_questions.len(), 4);

        let kinds: Vec<_> = result.traps.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TrapKind::Trap, TrapKind::Counter, TrapKind::Trap, TrapKind::Counter]
        );
    }

    #[test]
    fn test_risk_table_tracks_tier_and_dig() {
        let a = risk_table(InputTier::A, "Medium");
        assert_eq!(a.len(), 4);
        assert_eq!(a[0].level, RiskLevel::Low);
        assert_eq!(a[0].confidence, "High");
        assert_eq!(a[3].category, "DIG Risk");
        assert_eq!(a[3].level, RiskLevel::Medium);

        let b = risk_table(InputTier::B, "High");
        assert_eq!(b[0].level, RiskLevel::Medium);
        assert_eq!(b[0].confidence, "Limited data");
        assert_eq!(b[3].level, RiskLevel::High);
    }

    #[test]
    fn test_request_resolution() {
        let req = AnalysisRequest {
            text: "Emergency application for a stay".to_string(),
            ..Default::default()
        };
        let result = AnalysisGenerator::new().generate_request(&req);
        assert_eq!(result.posture, Posture::Emergency);
        assert_eq!(result.tier, InputTier::C);
    }
}
