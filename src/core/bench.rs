//! Bench simulation: Justice questions for an analysis, a single Justice,
//! or the full bench.

use crate::types::{AnalysisResult, IssueFlags, Persona, PersonaQuestion, Posture};

/// Personas questioned in every analysis, in display order
pub const ANALYSIS_PANEL: [Persona; 4] = [
    Persona::Thomas,
    Persona::Kagan,
    Persona::Barrett,
    Persona::Jackson,
];

/// Four questions, one per panel persona. Never skips a persona.
///
/// Templates branch on issue flags only; `_posture` is unused.
pub fn persona_questions(_posture: Posture, issues: &IssueFlags) -> Vec<PersonaQuestion> {
    ANALYSIS_PANEL
        .iter()
        .map(|&persona| {
            let (focus, question) = analysis_question(persona, issues);
            question_for(persona, focus, question)
        })
        .collect()
}

fn analysis_question(persona: Persona, issues: &IssueFlags) -> (&'static str, &'static str) {
    match persona {
        Persona::Thomas => (
            "Originalism",
            if issues.vra {
                "Where in the constitutional text does Congress derive authority to mandate race-conscious districting? Isn't Section 2 of the VRA itself constitutionally suspect under the original public meaning of the Fifteenth Amendment?"
            } else {
                "What is the original public meaning of the constitutional provision at issue here, and how does that constrain the Court's analysis?"
            },
        ),
        Persona::Kagan => (
            "Workability",
            if issues.vra {
                "If we rule for you, what exactly should states do when they face a Section 2 violation? Are you saying they must wait for contempt before drawing remedial maps?"
            } else {
                "Walk me through the practical consequences of your rule. How would lower courts and regulated parties actually implement this standard?"
            },
        ),
        Persona::Barrett => (
            "Doctrine",
            if issues.equal_protection {
                "Help me understand the doctrinal framework here. Does compliance with federal law automatically constitute a compelling interest, or must we engage in some additional balancing?"
            } else {
                "What is the precise doctrinal rule you want us to announce, and how does it fit within our existing precedential framework?"
            },
        ),
        Persona::Jackson => (
            "History & Context",
            if issues.vra {
                "Given the specific history of voter disenfranchisement in this jurisdiction—including documented barriers to Black electoral participation—isn't there something dissonant about deploying Equal Protection to prevent majority-Black districts?"
            } else {
                "What historical context should inform our interpretation here, and how does your reading account for the purposes of the relevant constitutional or statutory provisions?"
            },
        ),
        other => (other.focus(), other.generic_question()),
    }
}

fn question_for(persona: Persona, focus: &str, question: &str) -> PersonaQuestion {
    PersonaQuestion {
        persona,
        name: persona.name().to_string(),
        focus: focus.to_string(),
        question: question.to_string(),
        pressure: persona.pressure().to_string(),
    }
}

/// Case-independent question for one persona
pub fn generic_question(persona: Persona) -> PersonaQuestion {
    question_for(persona, persona.focus(), persona.generic_question())
}

/// Question for `persona` in the context of an analysis.
///
/// Returns the analysis's own question when the persona is on the panel,
/// otherwise the generic one. The flag says whether it was already shown.
pub fn simulate_persona(persona: Persona, analysis: &AnalysisResult) -> (PersonaQuestion, bool) {
    match analysis.question_for(persona) {
        Some(existing) => (existing.clone(), true),
        None => (generic_question(persona), false),
    }
}

/// One generic question from each of the nine Justices, in bench order
pub fn full_bench() -> Vec<PersonaQuestion> {
    Persona::ALL.iter().map(|&p| generic_question(p)).collect()
}
