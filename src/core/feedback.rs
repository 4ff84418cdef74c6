//! Pre-authored Justice feedback for the sample briefs
//!
//! Entries are kept in authoring order. The annotator relies on that order
//! when two patterns overlap inside one paragraph.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{Feedback, Persona, Severity};

/// A pattern and the feedback shown when it matches
#[derive(Debug, Clone)]
pub struct FeedbackEntry {
    pub pattern: Regex,
    pub feedback: Feedback,
}

impl FeedbackEntry {
    pub fn new(
        pattern: &str,
        persona: Persona,
        severity: Severity,
        text: &str,
        rewrite: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            feedback: Feedback {
                persona,
                severity,
                text: text.to_string(),
                rewrite: rewrite.to_string(),
            },
        })
    }
}

lazy_static! {
    static ref FEEDBACK_LOUISIANA: Vec<FeedbackEntry> = vec![
        FeedbackEntry::new(
            r"(?i)intentional creation of a second majority-minority congressional district",
            Persona::Thomas,
            Severity::Concern,
            "This framing explicitly admits to racial predominence. Justice Thomas will view this as a per se violation of the 14th Amendment regardless of VRA compliance.",
            "the creation of a district that adheres to traditional districting principles while respecting the voting strength of minority communities as required by federal law.",
        ).unwrap(),
        FeedbackEntry::new(
            r"(?i)compliance with the Voting Rights Act constitutes a compelling governmental interest",
            Persona::Barrett,
            Severity::Caution,
            r#"Justice Barrett has questioned whether statutory compliance can ever be a "compelling interest" in the constitutional sense without more specific evidence."#,
            "the state's specific interest in remedying documented, localized vote dilution that would otherwise trigger liability under Section 2.",
        ).unwrap(),
    ];

    static ref FEEDBACK_TRUMP_TARIFFS: Vec<FeedbackEntry> = vec![
        FeedbackEntry::new(
            r"(?i)authorizes presidential tariffs and whether such authority violates the nondelegation doctrine",
            Persona::Gorsuch,
            Severity::Caution,
            "Justice Gorsuch is a leading proponent of revitalizing the nondelegation doctrine. Use this framing to appeal to his concerns about administrative overreach.",
            "the transfer of the core legislative power to tax imports to the Executive without any clear, intelligible principle from Congress.",
        ).unwrap(),
        FeedbackEntry::new(
            r"(?i)Youngstown Sheet & Tube Co. v. Sawyer, 343 U.S. 579 \(1952\)",
            Persona::Kavanaugh,
            Severity::Strength,
            "Invoking Youngstown Category 3 is a powerful argument here. Justice Kavanaugh frequently cites Jackson's tripartite framework to analyze executive power.",
            "the classic Youngstown framework, where presidential power is at its lowest ebb because it is incompatible with the expressed will of Congress.",
        ).unwrap(),
        FeedbackEntry::new(
            r"(?i)Import-Export Clause and the Taxing Power",
            Persona::Alito,
            Severity::Caution,
            r#"Justice Alito will want to see a rigorous textual analysis of whether the power to "regulate" under IEEPA can ever encompass the sovereign power to tax."#,
            "the fundamental constitutional distinction between the power to regulate commerce and the exclusive congressional power to lay and collect taxes.",
        ).unwrap(),
    ];

    static ref FEEDBACK_FTC_REMOVAL: Vec<FeedbackEntry> = vec![
        FeedbackEntry::new(
            r"(?i)statutory removal protections for members of the Federal Trade Commission",
            Persona::Roberts,
            Severity::Caution,
            "Chief Justice Roberts often seeks narrow rulings. He might prefer a decision that limits the FTC's power through statutory interpretation rather than a broad constitutional strike on removal protections.",
            "the scope of executive supervisory authority over the Federal Trade Commission's enforcement functions.",
        ).unwrap(),
        FeedbackEntry::new(
            r"(?i)Humphrey's Executor v. United States, 295 U.S. 602 \(1935\), should be overruled",
            Persona::Alito,
            Severity::Concern,
            r#"Justice Alito has expressed skepticism about "headless" agencies. However, he will be highly focused on the practical consequences of overruling such a long-standing precedent."#,
            "the constitutional limits of Humphrey's Executor as applied to modern agencies exercising substantial executive power.",
        ).unwrap(),
        FeedbackEntry::new(
            r"(?i)headless fourth branch",
            Persona::Gorsuch,
            Severity::Strength,
            "This is a strong rhetorical point that resonates with Justice Gorsuch's structural constitutionalism. Emphasize that the Constitution provides for only three branches.",
            "an independent agency exercising core executive power outside of the President's control.",
        ).unwrap(),
    ];

    static ref FEEDBACK_WILLIAMS_REED: Vec<FeedbackEntry> = vec![
        FeedbackEntry::new(
            r"(?i)exhaustion of state administrative remedies is not a prerequisite to an action under § 1983",
            Persona::Kavanaugh,
            Severity::Strength,
            r#"Justice Kavanaugh authored the majority opinion here, focusing on the "catch-22" nature of the state rule. Use this to emphasize the practical impossibility of compliance."#,
            "the settled rule that § 1983 provides an immediate federal remedy that states cannot obstruct with exhaustion requirements.",
        ).unwrap(),
        FeedbackEntry::new(
            r"(?i)catch-22",
            Persona::Kagan,
            Severity::Strength,
            "Justice Kagan frequently uses common-sense terminology to highlight logical fallacies in legal arguments. This framing is highly effective for the liberal wing.",
            "an inescapable procedural trap that renders constitutional rights illusory.",
        ).unwrap(),
        FeedbackEntry::new(
            r"(?i)state law that immunizes government conduct",
            Persona::Thomas,
            Severity::Caution,
            r#"Justice Thomas dissented, expressing concern about overreading Felder v. Casey. Avoid broad "preemption" claims that might infringe on state court's jurisdictional authority."#,
            "the specific conflict between Alabama's procedural rule and the remedial purpose of the federal civil rights statute.",
        ).unwrap(),
    ];
}

/// Feedback entries for a case; unknown cases have none
pub fn feedback_for(case_id: &str) -> &'static [FeedbackEntry] {
    match case_id {
        "louisiana" => FEEDBACK_LOUISIANA.as_slice(),
        "trump-tariffs" => FEEDBACK_TRUMP_TARIFFS.as_slice(),
        "ftc-removal" => FEEDBACK_FTC_REMOVAL.as_slice(),
        "williams-reed" => FEEDBACK_WILLIAMS_REED.as_slice(),
        _ => &[],
    }
}
