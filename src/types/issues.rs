//! Legal topic presence flags

use serde::{Deserialize, Serialize};

/// One boolean per recognized legal topic. Flags are set independently.
///
/// Unknown keys are ignored on deserialization so richer issue maps from a
/// remote backend still parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueFlags {
    /// Voting Rights Act / Section 2
    #[serde(alias = "voting_rights")]
    pub vra: bool,
    /// Equal Protection / Fourteenth Amendment
    pub equal_protection: bool,
    /// Free speech / free exercise
    pub first_amendment: bool,
    /// Executive power / removal
    pub separation_of_powers: bool,
    /// Article III standing
    pub standing: bool,
}

impl IssueFlags {
    /// True when no topic was detected
    pub fn is_empty(&self) -> bool {
        !(self.vra
            || self.equal_protection
            || self.first_amendment
            || self.separation_of_powers
            || self.standing)
    }

    /// Labels of the detected topics, in detection order
    pub fn active_labels(&self) -> Vec<&'static str> {
        [
            (self.vra, "Voting Rights Act"),
            (self.equal_protection, "Equal Protection"),
            (self.first_amendment, "First Amendment"),
            (self.separation_of_powers, "Separation of Powers"),
            (self.standing, "Standing"),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, label)| label)
        .collect()
    }
}
