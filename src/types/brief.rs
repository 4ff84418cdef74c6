//! Rendered brief: headings, body text and annotated segments

use serde::{Deserialize, Serialize};

use crate::types::Persona;
use crate::EngineError;

/// How a feedback annotation reads for the brief's author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Strength,
    Caution,
    Concern,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Strength => "strength",
            Severity::Caution => "caution",
            Severity::Concern => "concern",
        }
    }

    pub fn color(&self) -> colored::Color {
        match self {
            Severity::Strength => colored::Color::Green,
            Severity::Caution => colored::Color::Yellow,
            Severity::Concern => colored::Color::Red,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pre-authored commentary attached to a matched passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "justice")]
    pub persona: Persona,
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Why the passage matters to this Justice
    pub text: String,
    /// Suggested replacement wording
    pub rewrite: String,
}

/// A span of brief text matched to a feedback entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable id: `seg-{section}-{entry}`
    pub id: String,
    /// Index of the paragraph within the brief
    pub section: usize,
    /// Index of the feedback entry within the case library
    pub entry: usize,
    /// Matched text as it appears in the brief
    pub original: String,
    /// Byte offset of the match within its paragraph
    pub start: usize,
    /// Byte offset one past the match
    pub end: usize,
    pub feedback: Feedback,
    /// Text currently displayed for the segment
    pub display: String,
    /// Severity currently displayed for the segment
    pub display_severity: Severity,
}

impl Segment {
    pub fn make_id(section: usize, entry: usize) -> String {
        format!("seg-{}-{}", section, entry)
    }

    /// True once the suggested rewrite has been applied
    pub fn is_rewritten(&self) -> bool {
        self.display != self.original
    }
}

/// Piece of a body paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Run {
    Text { text: String },
    Segment { id: String },
}

/// One paragraph of the rendered brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    Heading { text: String },
    Body { runs: Vec<Run> },
}

/// What selecting a segment surfaces in the side panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentFeedback {
    pub segment_id: String,
    pub persona: Persona,
    pub persona_name: &'static str,
    pub severity: Severity,
    pub explanation: String,
    pub rewrite: String,
}

/// Output of one brief render. Rebuilt from scratch on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedBrief {
    pub case_id: Option<String>,
    pub sections: Vec<Section>,
    pub segments: Vec<Segment>,
}

impl RenderedBrief {
    pub fn segment(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Feedback panel contents for a segment
    pub fn select(&self, id: &str) -> Result<SegmentFeedback, EngineError> {
        let segment = self
            .segment(id)
            .ok_or_else(|| EngineError::UnknownSegment(id.to_string()))?;
        let feedback = &segment.feedback;
        Ok(SegmentFeedback {
            segment_id: segment.id.clone(),
            persona: feedback.persona,
            persona_name: feedback.persona.name(),
            severity: feedback.severity,
            explanation: feedback.text.clone(),
            rewrite: feedback.rewrite.clone(),
        })
    }

    /// Copy of the brief with the segment's suggested rewrite displayed.
    ///
    /// Presentation only: the canonical brief text is left untouched.
    pub fn with_rewrite(&self, id: &str) -> Result<RenderedBrief, EngineError> {
        let mut brief = self.clone();
        let segment = brief
            .segments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::UnknownSegment(id.to_string()))?;
        segment.display = segment.feedback.rewrite.clone();
        segment.display_severity = Severity::Strength;
        Ok(brief)
    }

    /// Plain-text rendering; segments are wrapped as `[[id|severity: text]]`
    pub fn to_plain_text(&self) -> String {
        self.render(|segment| {
            format!("[[{}|{}: {}]]", segment.id, segment.display_severity, segment.display)
        })
    }

    /// Render with a caller-supplied segment formatter
    pub fn render<F>(&self, mut format_segment: F) -> String
    where
        F: FnMut(&Segment) -> String,
    {
        let mut paragraphs = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            match section {
                Section::Heading { text } => paragraphs.push(text.clone()),
                Section::Body { runs } => {
                    let mut out = String::new();
                    for run in runs {
                        match run {
                            Run::Text { text } => out.push_str(text),
                            Run::Segment { id } => {
                                if let Some(segment) = self.segment(id) {
                                    out.push_str(&format_segment(segment));
                                }
                            }
                        }
                    }
                    paragraphs.push(out);
                }
            }
        }
        paragraphs.join("\n\n")
    }
}
