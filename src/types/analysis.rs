//! Strategic analysis structures
//!
//! Field names follow the camelCase wire format of `/api/analyze`, so a
//! result from a remote backend and one generated locally are interchangeable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{InputTier, IssueFlags, Persona, Posture, PostureSelection};

/// Risk attached to a precedent or a risk-table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Parse a dashboard label such as "Medium"; unknown labels read as medium
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "high" => RiskLevel::High,
            _ => RiskLevel::Medium,
        }
    }

    pub fn color(&self) -> colored::Color {
        match self {
            RiskLevel::Low => colored::Color::Green,
            RiskLevel::Medium => colored::Color::Yellow,
            RiskLevel::High => colored::Color::Red,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Headline risk indicator.
///
/// The local engine only ever produces `Caution`; the other variants exist
/// because a remote backend may report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallRisk {
    Critical,
    Caution,
    Strong,
}

impl OverallRisk {
    pub fn emoji(&self) -> &'static str {
        match self {
            OverallRisk::Critical => "🔴",
            OverallRisk::Caution => "🟡",
            OverallRisk::Strong => "🟢",
        }
    }

    pub fn color(&self) -> colored::Color {
        match self {
            OverallRisk::Critical => colored::Color::Red,
            OverallRisk::Caution => colored::Color::Yellow,
            OverallRisk::Strong => colored::Color::Green,
        }
    }
}

impl std::fmt::Display for OverallRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OverallRisk::Critical => "CRITICAL",
            OverallRisk::Caution => "CAUTION",
            OverallRisk::Strong => "STRONG",
        };
        write!(f, "{}", name)
    }
}

/// A precedent citation with its relevance to the brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedentEntry {
    /// Full citation, e.g. "Shaw v. Reno, 509 U.S. 630 (1993)"
    #[serde(rename = "case")]
    pub citation: String,
    /// Reference URL
    pub url: String,
    /// Why the case matters here
    pub relevance: String,
    pub risk: RiskLevel,
}

impl PrecedentEntry {
    pub fn new(citation: &str, url: &str, relevance: &str, risk: RiskLevel) -> Self {
        Self {
            citation: citation.to_string(),
            url: url.to_string(),
            relevance: relevance.to_string(),
            risk,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrapKind {
    Trap,
    Counter,
}

impl TrapKind {
    pub fn label(&self) -> &'static str {
        match self {
            TrapKind::Trap => "🔴 TRAP",
            TrapKind::Counter => "✅ COUNTER",
        }
    }
}

/// A strategic trap or the counter-move to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapEntry {
    #[serde(rename = "type")]
    pub kind: TrapKind,
    pub text: String,
}

impl TrapEntry {
    pub fn trap(text: &str) -> Self {
        Self { kind: TrapKind::Trap, text: text.to_string() }
    }

    pub fn counter(text: &str) -> Self {
        Self { kind: TrapKind::Counter, text: text.to_string() }
    }
}

/// One row of the risk table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRow {
    pub category: String,
    pub level: RiskLevel,
    pub confidence: String,
}

impl RiskRow {
    pub fn new(category: &str, level: RiskLevel, confidence: &str) -> Self {
        Self {
            category: category.to_string(),
            level,
            confidence: confidence.to_string(),
        }
    }
}

/// A simulated question from one Justice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaQuestion {
    #[serde(rename = "justice")]
    pub persona: Persona,
    pub name: String,
    pub focus: String,
    pub question: String,
    pub pressure: String,
}

/// Request body for `/api/analyze`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub text: String,
    pub title: String,
    pub posture: PostureSelection,
    /// Tier computed by the caller; classified from the text when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<InputTier>,
    pub docket: String,
}

/// Complete strategic analysis of one submission.
///
/// Created once per request and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: String,
    pub tier: InputTier,
    pub posture: Posture,
    pub risk_level: OverallRisk,
    /// Dismissed-as-improvidently-granted risk label, e.g. "Medium"
    pub dig_risk: String,
    pub primary_obstacle: String,
    pub rewrite_directive: String,
    pub precedents: Vec<PrecedentEntry>,
    pub traps: Vec<TrapEntry>,
    pub risks: Vec<RiskRow>,
    pub justice_questions: Vec<PersonaQuestion>,
    /// Topic flags that drove the analysis
    #[serde(default)]
    pub issues: IssueFlags,
    /// When this result was produced or received (not read from the wire)
    #[serde(skip_deserializing, default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// The question already generated for `persona`, if any
    pub fn question_for(&self, persona: Persona) -> Option<&PersonaQuestion> {
        self.justice_questions.iter().find(|q| q.persona == persona)
    }

    /// One-line parseable summary (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "tier={} | posture={} | risk={} | dig={} | precedents={} | questions={}",
            self.tier,
            self.posture,
            self.risk_level,
            self.dig_risk,
            self.precedents.len(),
            self.justice_questions.len()
        )
    }
}
