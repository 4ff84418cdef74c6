//! Integration tests for the analysis pipeline
//!
//! Tests the full path: input → tier + posture + issues → AnalysisResult

use pretty_assertions::assert_eq;
use scotus_engine::core::{sample, AnalysisGenerator, IssueDetector, PostureDetector, TierClassifier};
use scotus_engine::types::{
    AnalysisRequest, AnalysisResult, InputTier, OverallRisk, Persona, Posture, PostureSelection,
    RiskLevel,
};

/// Test the Louisiana sample end to end
#[test]
fn test_louisiana_full_path() {
    let case = sample("louisiana").unwrap();
    let tier = TierClassifier::new().classify(case.text, 0);
    let issues = IssueDetector::new().detect(case.text);

    assert_eq!(tier, InputTier::A);
    assert!(issues.vra);
    assert!(issues.equal_protection);
    assert!(!issues.first_amendment);
    assert!(!issues.separation_of_powers);
    assert!(!issues.standing);

    let result = AnalysisGenerator::new().generate(case.text, case.title, case.posture, tier);
    assert_eq!(result.tier, InputTier::A);
    assert_eq!(result.posture, Posture::Merits);
    assert_eq!(
        result.primary_obstacle,
        "Tension between VRA compliance and Equal Protection strict scrutiny"
    );

    let citations: Vec<_> = result.precedents.iter().map(|p| p.citation.as_str()).collect();
    assert_eq!(
        citations,
        vec![
            "Shaw v. Reno, 509 U.S. 630 (1993)",
            "Thornburg v. Gingles, 478 U.S. 30 (1986)"
        ]
    );

    let thomas = result.question_for(Persona::Thomas).unwrap();
    assert!(thomas.question.contains("Fifteenth Amendment"));
    assert_eq!(result.risks[0].level, RiskLevel::Low);
}

/// Sample posture overrides the cert heading in the text
#[test]
fn test_sample_posture_beats_detection() {
    let case = sample("trump-tariffs").unwrap();
    assert_eq!(PostureDetector::new().detect(case.text), Posture::Cert);

    let req = AnalysisRequest {
        text: case.text.to_string(),
        title: case.title.to_string(),
        posture: PostureSelection::from(case.posture),
        tier: None,
        docket: case.docket.to_string(),
    };
    let result = AnalysisGenerator::new().generate_request(&req);
    assert_eq!(result.posture, Posture::Merits);
    assert_eq!(result.tier, InputTier::B);
}

/// FTC removal sample hits separation of powers only
#[test]
fn test_ftc_precedents() {
    let case = sample("ftc-removal").unwrap();
    let result = AnalysisGenerator::new().generate(case.text, case.title, case.posture, InputTier::B);
    let citations: Vec<_> = result.precedents.iter().map(|p| p.citation.as_str()).collect();
    assert_eq!(
        citations,
        vec![
            "Humphrey's Executor v. United States, 295 U.S. 602 (1935)",
            "Seila Law LLC v. CFPB, 591 U.S. ___ (2020)"
        ]
    );
    assert_eq!(result.primary_obstacle, "Incomplete record limits full analysis");
}

/// Short first-amendment excerpt
#[test]
fn test_first_amendment_excerpt() {
    let text = "The ordinance restricts free speech on public sidewalks.";
    let tiers = TierClassifier::new();
    let result = AnalysisGenerator::new().generate(
        text,
        "",
        PostureDetector::new().detect(text),
        tiers.classify(text, 0),
    );

    assert_eq!(result.tier, InputTier::C);
    assert_eq!(result.posture, Posture::Cert);
    assert_eq!(result.precedents.len(), 1);
    assert_eq!(result.precedents[0].citation, "Reed v. Town of Gilbert, 576 U.S. 155 (2015)");
    assert_eq!(result.risk_level, OverallRisk::Caution);
}

/// Test determinism - same input always gives the same analysis
#[test]
fn test_determinism_full_path() {
    let case = sample("williams-reed").unwrap();
    let generator = AnalysisGenerator::new();
    let a = generator.generate(case.text, case.title, case.posture, InputTier::B);
    let b = generator.generate(case.text, case.title, case.posture, InputTier::B);

    assert_eq!(a.precedents, b.precedents);
    assert_eq!(a.traps, b.traps);
    assert_eq!(a.risks, b.risks);
    assert_eq!(a.justice_questions, b.justice_questions);
}

/// Test JSON output uses the client field names
#[test]
fn test_json_field_names() {
    let result = AnalysisGenerator::new().generate("Section 2", "VRA", Posture::Cert, InputTier::C);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["tier"], "C");
    assert_eq!(json["posture"], "cert");
    assert_eq!(json["riskLevel"], "CAUTION");
    assert_eq!(json["digRisk"], "Medium");
    assert!(json["primaryObstacle"].is_string());
    assert!(json["rewriteDirective"].is_string());
    assert_eq!(json["precedents"][0]["case"], "Shaw v. Reno, 509 U.S. 630 (1993)");
    assert_eq!(json["traps"][0]["type"], "trap");
    assert_eq!(json["justiceQuestions"][0]["justice"], "thomas");
}

/// A remote result without issue flags still parses
#[test]
fn test_remote_shape_parses() {
    let json = r#"{
        "title": "Remote",
        "tier": "A",
        "posture": "emergency",
        "riskLevel": "CRITICAL",
        "digRisk": "High",
        "primaryObstacle": "x",
        "rewriteDirective": "y",
        "precedents": [],
        "traps": [],
        "risks": [],
        "justiceQuestions": []
    }"#;
    let result: AnalysisResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.risk_level, OverallRisk::Critical);
    assert!(result.issues.is_empty());
}

/// Test parseable output format
#[test]
fn test_parseable_output_format() {
    let result = AnalysisGenerator::new().generate("", "", Posture::Emergency, InputTier::C);
    assert_eq!(
        result.to_parseable_string(),
        "tier=C | posture=emergency | risk=CAUTION | dig=Medium | precedents=1 | questions=4"
    );
}
