//! Annotation Matcher: split a brief into headings and annotated bodies

use tracing::debug;

use crate::core::feedback::{feedback_for, FeedbackEntry};
use crate::types::{RenderedBrief, Run, Section, Segment};
use crate::HEADING_MAX_CHARS;

/// Paragraph separator
const PARAGRAPH_BREAK: &str = "\n\n";

#[derive(Debug, Default, Clone, Copy)]
pub struct BriefAnnotator;

impl BriefAnnotator {
    pub fn new() -> Self {
        Self
    }

    /// Render `text`, attaching feedback for `case_id` when it names a known case
    pub fn annotate(&self, text: &str, case_id: Option<&str>) -> RenderedBrief {
        let entries = case_id.map(feedback_for).unwrap_or(&[]);

        let mut sections = Vec::new();
        let mut segments = Vec::new();

        for (s_idx, paragraph) in text.split(PARAGRAPH_BREAK).enumerate() {
            if is_heading(paragraph) {
                sections.push(Section::Heading { text: paragraph.to_string() });
                continue;
            }

            let claimed = match_entries(paragraph, s_idx, entries);
            sections.push(Section::Body { runs: build_runs(paragraph, &claimed) });
            segments.extend(claimed);
        }

        debug!(
            sections = sections.len(),
            segments = segments.len(),
            case = case_id.unwrap_or("-"),
            "annotated brief"
        );

        RenderedBrief {
            case_id: case_id.map(str::to_string),
            sections,
            segments,
        }
    }
}

/// All-caps and short
pub fn is_heading(paragraph: &str) -> bool {
    paragraph.to_uppercase() == paragraph && paragraph.chars().count() < HEADING_MAX_CHARS
}

/// First match per entry, in entry order; a match overlapping an earlier
/// claim is dropped. Result is sorted by position.
fn match_entries(paragraph: &str, s_idx: usize, entries: &[FeedbackEntry]) -> Vec<Segment> {
    let mut claimed: Vec<Segment> = Vec::new();

    for (f_idx, entry) in entries.iter().enumerate() {
        let Some(m) = entry.pattern.find(paragraph) else {
            continue;
        };
        if claimed.iter().any(|c| m.start() < c.end && c.start < m.end()) {
            debug!(section = s_idx, entry = f_idx, "skipping overlapping match");
            continue;
        }
        claimed.push(Segment {
            id: Segment::make_id(s_idx, f_idx),
            section: s_idx,
            entry: f_idx,
            original: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
            feedback: entry.feedback.clone(),
            display: m.as_str().to_string(),
            display_severity: entry.feedback.severity,
        });
    }

    claimed.sort_by_key(|c| c.start);
    claimed
}

/// Interleave plain text with segment references; `spans` must be sorted
fn build_runs(paragraph: &str, spans: &[Segment]) -> Vec<Run> {
    let mut runs = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            runs.push(Run::Text { text: paragraph[cursor..span.start].to_string() });
        }
        runs.push(Run::Segment { id: span.id.clone() });
        cursor = span.end;
    }
    if cursor < paragraph.len() || runs.is_empty() {
        runs.push(Run::Text { text: paragraph[cursor..].to_string() });
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::samples::sample;
    use crate::types::{Persona, Severity};

    #[test]
    fn test_headings_and_bodies() {
        let brief = BriefAnnotator::new().annotate("ARGUMENT\n\nThe rule is clear.", None);
        assert_eq!(
            brief.sections,
            vec![
                Section::Heading { text: "ARGUMENT".to_string() },
                Section::Body {
                    runs: vec![Run::Text { text: "The rule is clear.".to_string() }]
                },
            ]
        );
        assert!(brief.segments.is_empty());
    }

    #[test]
    fn test_long_uppercase_paragraph_is_body() {
        let long = "A".repeat(100);
        assert!(!is_heading(&long));
        assert!(is_heading(&"A".repeat(99)));
        assert!(is_heading("1. I. II."));
    }

    #[test]
    fn test_unknown_case_has_no_segments() {
        let text = sample("williams-reed").unwrap().text;
        let brief = BriefAnnotator::new().annotate(text, Some("marbury"));
        assert!(brief.segments.is_empty());
        assert_eq!(brief.to_plain_text(), text);
    }

    #[test]
    fn test_first_match_only() {
        let text = "A catch-22 inside another catch-22.";
        let brief = BriefAnnotator::new().annotate(text, Some("williams-reed"));
        assert_eq!(brief.segments.len(), 1);
        let seg = &brief.segments[0];
        assert_eq!(seg.id, "seg-0-1");
        assert_eq!(seg.start, 2);
        assert_eq!(&text[seg.start..seg.end], "catch-22");
    }

    #[test]
    fn test_two_segments_sorted_by_position() {
        let text = "Under Felder, a state law that immunizes government conduct creates a catch-22.";
        let brief = BriefAnnotator::new().annotate(text, Some("williams-reed"));
        let ids: Vec<_> = brief.segments.iter().map(|s| s.id.as_str()).collect();
        // ids keep the entry index; order follows the text
        assert_eq!(ids, vec!["seg-0-2", "seg-0-1"]);
        match &brief.sections[0] {
            Section::Body { runs } => {
                assert_eq!(
                    runs,
                    &vec![
                        Run::Text { text: "Under Felder, a ".to_string() },
                        Run::Segment { id: "seg-0-2".to_string() },
                        Run::Text { text: " creates a ".to_string() },
                        Run::Segment { id: "seg-0-1".to_string() },
                        Run::Text { text: ".".to_string() },
                    ]
                );
            }
            other => panic!("expected body, got {:?}", other),
        }
    }

    #[test]
    fn test_overlapping_later_entry_is_skipped() {
        let entries = vec![
            FeedbackEntry::new(r"(?i)removal protections", Persona::Roberts, Severity::Caution, "a", "b").unwrap(),
            FeedbackEntry::new(r"(?i)protections for members", Persona::Alito, Severity::Concern, "c", "d").unwrap(),
            FeedbackEntry::new(r"(?i)Commission", Persona::Gorsuch, Severity::Strength, "e", "f").unwrap(),
        ];
        let paragraph = "statutory removal protections for members of the Commission";
        let segments = match_entries(paragraph, 3, &entries);

        let ids: Vec<_> = segments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["seg-3-0", "seg-3-2"]);
        assert_eq!(segments[0].original, "removal protections");

        let runs = build_runs(paragraph, &segments);
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[0], Run::Text { text: "statutory ".to_string() });
    }

    #[test]
    fn test_ftc_sample_segments() {
        let case = sample("ftc-removal").unwrap();
        let brief = BriefAnnotator::new().annotate(case.text, Some(case.id));
        let personas: Vec<_> = brief.segments.iter().map(|s| s.feedback.persona).collect();
        assert_eq!(personas, vec![Persona::Roberts, Persona::Alito, Persona::Gorsuch]);
    }

    #[test]
    fn test_louisiana_thomas_concern() {
        let case = sample("louisiana").unwrap();
        let brief = BriefAnnotator::new().annotate(case.text, Some(case.id));
        let thomas = brief
            .segments
            .iter()
            .find(|s| s.feedback.persona == Persona::Thomas)
            .unwrap();
        assert_eq!(thomas.feedback.severity, Severity::Concern);
        assert_eq!(
            thomas.original,
            "intentional creation of a second majority-minority congressional district"
        );
    }

    #[test]
    fn test_select_and_apply_rewrite() {
        let case = sample("williams-reed").unwrap();
        let brief = BriefAnnotator::new().annotate(case.text, Some(case.id));
        let id = brief
            .segments
            .iter()
            .find(|s| s.original == "catch-22")
            .map(|s| s.id.clone())
            .unwrap();

        let panel = brief.select(&id).unwrap();
        assert_eq!(panel.persona_name, "Justice Kagan");
        assert_eq!(panel.severity, Severity::Strength);

        let rewritten = brief.with_rewrite(&id).unwrap();
        let seg = rewritten.segment(&id).unwrap();
        assert!(seg.is_rewritten());
        assert_eq!(seg.display, "an inescapable procedural trap that renders constitutional rights illusory.");
        assert_eq!(seg.display_severity, Severity::Strength);
        // source render untouched
        assert!(!brief.segment(&id).unwrap().is_rewritten());
    }

    #[test]
    fn test_unknown_segment() {
        let brief = BriefAnnotator::new().annotate("text", Some("louisiana"));
        assert!(brief.select("seg-9-9").is_err());
        assert!(brief.with_rewrite("seg-9-9").is_err());
    }

    #[test]
    fn test_render_is_deterministic() {
        let case = sample("trump-tariffs").unwrap();
        let a = BriefAnnotator::new().annotate(case.text, Some(case.id));
        let b = BriefAnnotator::new().annotate(case.text, Some(case.id));
        assert_eq!(a, b);
    }
}
