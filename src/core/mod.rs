//! Core modules for the SCOTUS strategic engine

pub mod tier;
pub mod posture;
pub mod issues;
pub mod bench;
pub mod analysis;
pub mod samples;
pub mod feedback;
pub mod annotator;
pub mod chat;
pub mod backend;
pub mod session;
pub mod api;

pub use tier::TierClassifier;
pub use posture::PostureDetector;
pub use issues::IssueDetector;
pub use bench::{full_bench, generic_question, persona_questions, simulate_persona};
pub use analysis::AnalysisGenerator;
pub use samples::{sample, SampleCase, SAMPLE_CASES};
pub use annotator::BriefAnnotator;
pub use chat::ChatResponder;
pub use backend::{AnalysisBackend, BackendError, FallbackBackend, LocalBackend, RemoteBackend};
pub use session::{Pacing, Session};
pub use api::{create_router, run_server};
