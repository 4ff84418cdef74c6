//! Chat Responder: keyword-triggered canned replies
//!
//! Also holds the assistant messages the session posts on its own
//! (analysis summary, Justice questions, rewrite notes).

use crate::types::{AnalysisResult, ChatMessage, InputTier, PersonaQuestion, Posture};

const HYPOTHETICAL_REPLY: &str = "Interesting hypothetical. To properly evaluate alternative scenarios, I would need to assess:\n\n1. How the changed facts affect the vehicle analysis\n2. Whether the legal standard would apply differently\n3. Impact on Justice-specific concerns\n\nCould you specify which aspect of the case you'd like to modify?";

const REWRITE_REPLY: &str = "When rewriting Questions Presented, consider:\n\n1. **Front-load the winning facts** — Your client's best facts should appear in the question itself\n2. **Signal the standard of review** — Frame to invoke favorable precedent\n3. **Avoid over-breadth** — Narrow questions have better grant rates\n4. **Create asymmetry** — Make your question easier to answer \"yes\" than opponent's\n\nShall I draft alternative framings based on the current case posture?";

const CIRCUIT_SPLIT_REPLY: &str = "Circuit split quality is critical for cert. The Court looks for:\n\n1. **Direct conflict** — Same legal question, opposite holdings\n2. **Maturity** — Has the issue percolated sufficiently?\n3. **Importance** — Does the split affect substantial federal interests?\n4. **Clean vehicle** — Can this case cleanly resolve the split?\n\nA shallow or manufactured split significantly increases DIG risk.";

const JURISDICTION_REPLY: &str = "Jurisdictional and standing defects are **dispositive** — they can end your case before reaching the merits.\n\nKey checkpoints:\n• **Article III standing**: injury, causation, redressability\n• **Statutory exhaustion**: have all required administrative steps been completed?\n• **Finality**: is the lower court judgment truly final?\n• **Mootness**: can the Court still grant effective relief?\n\nAny weakness here should be addressed before cert, not at merits.";

/// Reply groups in priority order
const REPLY_GROUPS: [(&[&str], &str); 4] = [
    (&["what if", "hypothetical"], HYPOTHETICAL_REPLY),
    (&["rewrite", "question presented"], REWRITE_REPLY),
    (&["circuit split", "conflict"], CIRCUIT_SPLIT_REPLY),
    (&["standing", "jurisdiction"], JURISDICTION_REPLY),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct ChatResponder;

impl ChatResponder {
    pub fn new() -> Self {
        Self
    }

    /// Pick a reply for `message`. History and context do not affect the reply;
    /// tier and posture only fill the default template.
    pub fn respond(
        &self,
        message: &str,
        _history: &[ChatMessage],
        _context: Option<&AnalysisResult>,
        tier: Option<InputTier>,
        posture: Option<Posture>,
    ) -> String {
        let lower = message.to_lowercase();

        REPLY_GROUPS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, reply)| reply.to_string())
            .unwrap_or_else(|| default_reply(tier.unwrap_or(InputTier::B), posture.unwrap_or_default()))
    }
}

fn default_reply(tier: InputTier, posture: Posture) -> String {
    format!(
        "That's a strategic consideration worth examining. Based on the current analysis:\n\n\
         • **Input Tier {}** limits definitive conclusions on some procedural aspects\n\
         • The **{} posture** emphasizes certain institutional concerns\n\n\
         To provide more specific guidance, could you clarify:\n\
         1. Which party's perspective you're analyzing from?\n\
         2. What specific doctrinal or strategic concern you want to probe?",
        tier,
        posture.id()
    )
}

// =============================================================================
// SESSION MESSAGES
// =============================================================================

/// Posted once an analysis lands
pub fn analysis_summary(analysis: &AnalysisResult) -> String {
    let title = if analysis.title.is_empty() { "your case" } else { analysis.title.as_str() };
    format!(
        "Analysis complete for **{}**.\n\n\
         Input Tier: **{}** | Posture: **{}** | Risk: **{}**\n\n\
         You can now:\n\
         • Challenge any conclusion\n\
         • Ask \"what if\" hypotheticals\n\
         • Test alternative arguments\n\
         • Click a Justice name to simulate additional pressure points",
        title,
        analysis.tier,
        analysis.posture.label(),
        analysis.risk_level
    )
}

/// A single Justice's question as a chat message
pub fn question_message(question: &PersonaQuestion) -> String {
    format!("**{}** ({}):\n\n\"{}\"", question.name, question.focus, question.question)
}

pub const FULL_BENCH_INTRO: &str =
    "**Full Bench Simulation**\n\nSimulating pressure points from all nine Justices:";

/// Note posted after a rewrite is applied to a segment
pub fn rewrite_note(original: &str, rewrite: &str) -> String {
    format!(
        "Applied strategic rewrite for: \"{}...\"\n\nNew phrasing focuses on: **{}...**",
        prefix(original, 30),
        prefix(rewrite, 50)
    )
}

/// First `n` characters
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
