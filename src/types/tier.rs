//! Input completeness tiers

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Coarse completeness rating of the submitted case materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputTier {
    /// Full materials: long brief text or several attachments
    A,
    /// Partial materials
    B,
    /// Minimal materials: docket only or a short excerpt
    C,
}

impl InputTier {
    /// Completeness rank, higher is more complete
    fn rank(&self) -> u8 {
        match self {
            InputTier::A => 3,
            InputTier::B => 2,
            InputTier::C => 1,
        }
    }

    /// Human-readable description of the tier
    pub fn description(&self) -> &'static str {
        match self {
            InputTier::A => "Full materials",
            InputTier::B => "Partial materials",
            InputTier::C => "Minimal materials",
        }
    }
}

/// A > B > C by material completeness
impl Ord for InputTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for InputTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for InputTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputTier::A => "A",
            InputTier::B => "B",
            InputTier::C => "C",
        };
        write!(f, "{}", name)
    }
}
