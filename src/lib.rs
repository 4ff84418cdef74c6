//! SCOTUS Strategic Engine: adversarial appellate-strategy analysis
//!
//! Pipeline: input → tier + posture + issues → analysis → dashboard.
//! Sample briefs are annotated against a fixed feedback library, and a
//! scripted chat responder covers the case where no backend is reachable.

pub mod core;
pub mod error;
pub mod types;

pub use error::EngineError;

// =============================================================================
// TIER THRESHOLDS - characters of brief text
// =============================================================================

/// Text longer than this is Tier A material
pub const TIER_A_MIN_CHARS: usize = 5000;

/// Text longer than this is at least Tier B material
pub const TIER_B_MIN_CHARS: usize = 500;

/// Two or more attachments make the submission Tier A
pub const TIER_A_MIN_FILES: usize = 2;

// =============================================================================
// BRIEF RENDERING
// =============================================================================

/// A fully upper-case paragraph shorter than this renders as a heading
pub const HEADING_MAX_CHARS: usize = 100;

// =============================================================================
// NETWORK
// =============================================================================

/// Base URL of the optional analysis backend
pub const API_BASE: &str = "http://localhost:5000/api";

/// Default bind address for `--serve`
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:5000";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
