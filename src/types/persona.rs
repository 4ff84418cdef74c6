//! The nine simulated Justices

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Simulated decision-maker profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Roberts,
    Thomas,
    Alito,
    Sotomayor,
    Kagan,
    Gorsuch,
    Kavanaugh,
    Barrett,
    Jackson,
}

impl Persona {
    /// Full bench, in seating-chart declaration order
    pub const ALL: [Persona; 9] = [
        Persona::Roberts,
        Persona::Thomas,
        Persona::Alito,
        Persona::Sotomayor,
        Persona::Kagan,
        Persona::Gorsuch,
        Persona::Kavanaugh,
        Persona::Barrett,
        Persona::Jackson,
    ];

    /// Wire identifier
    pub fn id(&self) -> &'static str {
        match self {
            Persona::Roberts => "roberts",
            Persona::Thomas => "thomas",
            Persona::Alito => "alito",
            Persona::Sotomayor => "sotomayor",
            Persona::Kagan => "kagan",
            Persona::Gorsuch => "gorsuch",
            Persona::Kavanaugh => "kavanaugh",
            Persona::Barrett => "barrett",
            Persona::Jackson => "jackson",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Persona::Roberts => "Chief Justice Roberts",
            Persona::Thomas => "Justice Thomas",
            Persona::Alito => "Justice Alito",
            Persona::Sotomayor => "Justice Sotomayor",
            Persona::Kagan => "Justice Kagan",
            Persona::Gorsuch => "Justice Gorsuch",
            Persona::Kavanaugh => "Justice Kavanaugh",
            Persona::Barrett => "Justice Barrett",
            Persona::Jackson => "Justice Jackson",
        }
    }

    /// Jurisprudential focus
    pub fn focus(&self) -> &'static str {
        match self {
            Persona::Roberts => "Institutionalism & Narrow Rulings",
            Persona::Thomas => "Originalism & Constitutional Text",
            Persona::Alito => "Textual Analysis & Practical Consequences",
            Persona::Sotomayor => "Civil Rights & Practical Impact",
            Persona::Kagan => "Pragmatic Interpretation & Workability",
            Persona::Gorsuch => "Textualism & Separation of Powers",
            Persona::Kavanaugh => "Precedent & Moderate Application",
            Persona::Barrett => "Originalism & Doctrinal Clarity",
            Persona::Jackson => "Historical Context & Equity",
        }
    }

    /// Questioning style
    pub fn style(&self) -> &'static str {
        match self {
            Persona::Roberts => "Seeks incremental, consensus-building decisions",
            Persona::Thomas => "Questions structural precedents; emphasizes original meaning",
            Persona::Alito => "Probes real-world impacts and statutory interpretation",
            Persona::Sotomayor => "Focuses on effects on marginalized communities",
            Persona::Kagan => "Tests practical implementation of legal rules",
            Persona::Gorsuch => "Strict adherence to statutory text and constitutional structure",
            Persona::Kavanaugh => "Weighs stare decisis carefully; seeks middle-ground",
            Persona::Barrett => "Precise doctrinal questions; historical analysis",
            Persona::Jackson => "Emphasizes historical background and fairness",
        }
    }

    /// What the persona's questioning is designed to pressure
    pub fn pressure(&self) -> &'static str {
        match self {
            Persona::Roberts => "Seeks narrow resolution; tests for minimalist off-ramps",
            Persona::Thomas => {
                "Challenges modern statutory interpretations against original constitutional framework"
            }
            Persona::Alito => "Probes practical consequences and implementation difficulties",
            Persona::Sotomayor => "Emphasizes human impact and fairness concerns",
            Persona::Kagan => "Forces articulation of workable, real-world legal standard",
            Persona::Gorsuch => "Insists on textual grounding for every proposition",
            Persona::Kavanaugh => "Weighs reliance interests and precedential stability",
            Persona::Barrett => "Demands clean legal test that harmonizes with existing doctrine",
            Persona::Jackson => {
                "Invokes purposive/historical analysis to complicate formalist arguments"
            }
        }
    }

    /// Case-independent question used for ad hoc and full-bench simulation
    pub fn generic_question(&self) -> &'static str {
        match self {
            Persona::Roberts => "How do we write a narrow opinion that resolves this case without creating broader doctrinal disruption? What's the minimalist path here?",
            Persona::Thomas => "Which of our precedents should we reconsider in light of the original meaning of the Constitution? Are we perpetuating an error?",
            Persona::Alito => "What are the real-world practical consequences of your proposed rule? Who wins and who loses if we adopt your interpretation?",
            Persona::Sotomayor => "How does your position affect ordinary people—workers, consumers, the accused? Have you considered the on-the-ground impact?",
            Persona::Kagan => "Give me a manageable test courts can apply. Your standard sounds fine in theory, but how would it actually work in practice?",
            Persona::Gorsuch => "Point me to the statutory text. Where are the words that support your reading? Aren't we just legislating from the bench here?",
            Persona::Kavanaugh => "How do we respect stare decisis while also recognizing the limits of the prior decision? What's the reliance interest?",
            Persona::Barrett => "What's the original meaning of the relevant text? How does that historical understanding inform our analysis today?",
            Persona::Jackson => "What historical context are we overlooking? How does the purpose behind this provision inform our interpretation?",
        }
    }

    /// Terminal color for the persona name
    pub fn color(&self) -> colored::Color {
        match self {
            Persona::Roberts | Persona::Kavanaugh => colored::Color::Blue,
            Persona::Thomas | Persona::Alito | Persona::Gorsuch => colored::Color::Red,
            Persona::Barrett => colored::Color::Magenta,
            Persona::Sotomayor | Persona::Kagan | Persona::Jackson => colored::Color::Cyan,
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Persona {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Persona::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| EngineError::UnknownPersona(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_distinct_personas() {
        let mut ids: Vec<_> = Persona::ALL.iter().map(|p| p.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_parse_round_trips_ids() {
        for persona in Persona::ALL {
            assert_eq!(persona.id().parse::<Persona>().unwrap(), persona);
        }
        assert_eq!(" Kagan ".parse::<Persona>().unwrap(), Persona::Kagan);
        assert!(matches!("scalia".parse::<Persona>(), Err(EngineError::UnknownPersona(_))));
    }

    #[test]
    fn test_chief_justice_title() {
        assert_eq!(Persona::Roberts.name(), "Chief Justice Roberts");
        assert!(Persona::ALL[1..].iter().all(|p| p.name().starts_with("Justice ")));
    }
}
