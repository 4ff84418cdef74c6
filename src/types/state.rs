//! Application state threaded through the session handlers

use crate::types::{
    AnalysisResult, ChatMessage, FileDescriptor, InputTier, Persona, Posture, RenderedBrief,
};

/// Everything a session knows between user actions.
///
/// Handlers take a `&AppState` and return a new one, so a failed action
/// leaves the caller's state untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Result of the last successful analysis
    pub current_analysis: Option<AnalysisResult>,
    /// Sample case the current brief came from, if any
    pub current_case_id: Option<String>,
    pub input_tier: Option<InputTier>,
    pub posture: Option<Posture>,
    pub selected_persona: Option<Persona>,
    pub selected_segment: Option<String>,
    pub chat_history: Vec<ChatMessage>,
    pub uploaded_files: Vec<FileDescriptor>,
    /// Canonical brief text, never rewritten by applied suggestions
    pub brief_text: Option<String>,
    pub brief: Option<RenderedBrief>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_analysis(&self) -> bool {
        self.current_analysis.is_some()
    }

    /// Most recent assistant reply
    pub fn last_reply(&self) -> Option<&str> {
        self.chat_history
            .iter()
            .rev()
            .find(|m| m.role == crate::types::ChatRole::Assistant)
            .map(|m| m.content.as_str())
    }
}
