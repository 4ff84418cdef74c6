use thiserror::Error;

/// Errors surfaced to the user by the engine.
///
/// Backend failures never appear here: they are recovered locally
/// (see [`crate::core::backend::BackendError`]).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("please provide case materials, upload a PDF, or enter a docket number")]
    MissingInput,

    #[error("unknown sample case: {0}")]
    UnknownSample(String),

    #[error("unknown justice: {0}")]
    UnknownPersona(String),

    #[error("unknown posture: {0} (expected auto, cert, emergency or merits)")]
    UnknownPosture(String),

    #[error("no brief segment with id {0}")]
    UnknownSegment(String),

    #[error("no brief has been rendered yet")]
    NoBrief,

    #[error("no analysis has been run yet")]
    NoAnalysis,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
