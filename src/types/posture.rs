//! Procedural posture of a filing

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Procedural stage of the filing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Posture {
    /// Petition for a writ of certiorari
    Cert,
    /// Emergency application (stay, injunction)
    Emergency,
    /// Merits briefing after a grant
    Merits,
}

impl Posture {
    /// Dashboard label
    pub fn label(&self) -> &'static str {
        match self {
            Posture::Cert => "Cert Petition",
            Posture::Emergency => "Emergency",
            Posture::Merits => "Merits",
        }
    }

    /// Wire identifier
    pub fn id(&self) -> &'static str {
        match self {
            Posture::Cert => "cert",
            Posture::Emergency => "emergency",
            Posture::Merits => "merits",
        }
    }
}

impl Default for Posture {
    fn default() -> Self {
        Posture::Cert
    }
}

impl std::fmt::Display for Posture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Posture as chosen by the user: either detect it, or use the given one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostureSelection {
    Auto,
    Cert,
    Emergency,
    Merits,
}

impl PostureSelection {
    /// The explicit posture, or `None` when detection should run
    pub fn explicit(&self) -> Option<Posture> {
        match self {
            PostureSelection::Auto => None,
            PostureSelection::Cert => Some(Posture::Cert),
            PostureSelection::Emergency => Some(Posture::Emergency),
            PostureSelection::Merits => Some(Posture::Merits),
        }
    }
}

impl Default for PostureSelection {
    fn default() -> Self {
        PostureSelection::Auto
    }
}

impl From<Posture> for PostureSelection {
    fn from(posture: Posture) -> Self {
        match posture {
            Posture::Cert => PostureSelection::Cert,
            Posture::Emergency => PostureSelection::Emergency,
            Posture::Merits => PostureSelection::Merits,
        }
    }
}

impl FromStr for PostureSelection {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(PostureSelection::Auto),
            "cert" => Ok(PostureSelection::Cert),
            "emergency" => Ok(PostureSelection::Emergency),
            "merits" => Ok(PostureSelection::Merits),
            other => Err(EngineError::UnknownPosture(other.to_string())),
        }
    }
}
