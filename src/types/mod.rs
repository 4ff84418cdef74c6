//! Core types for the strategic engine

mod analysis;
mod brief;
mod chat;
mod input;
mod issues;
mod persona;
mod posture;
mod state;
mod tier;

pub use analysis::{
    AnalysisRequest, AnalysisResult, OverallRisk, PersonaQuestion, PrecedentEntry, RiskLevel,
    RiskRow, TrapEntry, TrapKind,
};
pub use brief::{Feedback, RenderedBrief, Run, Section, Segment, SegmentFeedback, Severity};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
pub use input::{ClassificationInput, FileDescriptor};
pub use issues::IssueFlags;
pub use persona::Persona;
pub use posture::{Posture, PostureSelection};
pub use state::AppState;
pub use tier::InputTier;
