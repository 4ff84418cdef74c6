//! HTTP API for the strategic engine
//!
//! Endpoints:
//! - GET  /health            - Health check
//! - POST /api/analyze       - Run an analysis
//! - POST /api/chat          - Chat reply
//! - POST /api/simulate      - One Justice's question
//! - POST /api/annotate      - Render and annotate a brief
//! - GET  /api/samples       - List sample cases
//! - GET  /api/samples/:id   - One sample case with its text

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::bench::{generic_question, simulate_persona};
use crate::core::samples::{sample, SAMPLE_CASES};
use crate::core::{BriefAnnotator, LocalBackend};
use crate::types::{
    AnalysisRequest, AnalysisResult, ChatRequest, ChatResponse, Persona, PersonaQuestion,
    Posture, RenderedBrief,
};
use crate::EngineError;

/// Shared, read-only engine
#[derive(Debug, Default)]
pub struct ApiState {
    pub engine: LocalBackend,
    pub annotator: BriefAnnotator,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub samples: usize,
}

/// Simulate request
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub justice: String,
    #[serde(default)]
    pub context: Option<AnalysisResult>,
}

/// Simulate response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    pub question: PersonaQuestion,
    /// True when the question is already part of `context`
    pub already_shown: bool,
}

/// Annotate request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateRequest {
    pub text: String,
    #[serde(default)]
    pub case_id: Option<String>,
}

/// Sample listing entry
#[derive(Debug, Serialize)]
pub struct SampleSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub docket: &'static str,
    pub posture: Posture,
}

/// Sample with its full text
#[derive(Debug, Serialize)]
pub struct SampleDetail {
    #[serde(flatten)]
    pub summary: SampleSummary,
    pub text: &'static str,
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(ApiState::default());

    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .route("/api/chat", post(chat))
        .route("/api/simulate", post(simulate))
        .route("/api/annotate", post(annotate))
        .route("/api/samples", get(list_samples))
        .route("/api/samples/:id", get(get_sample))
        .with_state(state)
}

fn status_for(err: &EngineError) -> StatusCode {
    match err {
        EngineError::MissingInput | EngineError::UnknownPersona(_) | EngineError::UnknownPosture(_) => {
            StatusCode::BAD_REQUEST
        }
        EngineError::UnknownSample(_) | EngineError::UnknownSegment(_) => StatusCode::NOT_FOUND,
        EngineError::NoBrief | EngineError::NoAnalysis => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: EngineError) -> StatusCode {
    let status = status_for(&err);
    warn!(error = %err, status = status.as_u16(), "request rejected");
    status
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        samples: SAMPLE_CASES.len(),
    })
}

/// Run an analysis on the local engine
async fn analyze(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, StatusCode> {
    if req.text.trim().is_empty() && req.docket.trim().is_empty() {
        return Err(reject(EngineError::MissingInput));
    }

    let result = state.engine.analyze_now(&req);
    debug!(tier = %result.tier, posture = %result.posture, "served analysis");
    Ok(Json(result))
}

/// Canned chat reply
async fn chat(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    if req.message.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok(Json(ChatResponse {
        response: state.engine.chat_now(&req),
    }))
}

/// One Justice's question, in context when an analysis is supplied
async fn simulate(Json(req): Json<SimulateRequest>) -> Result<Json<SimulateResponse>, StatusCode> {
    let persona: Persona = req.justice.parse().map_err(reject)?;

    let (question, already_shown) = match &req.context {
        Some(analysis) => simulate_persona(persona, analysis),
        None => (generic_question(persona), false),
    };

    Ok(Json(SimulateResponse {
        question,
        already_shown,
    }))
}

/// Render a brief with optional sample-case feedback
async fn annotate(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<AnnotateRequest>,
) -> Json<RenderedBrief> {
    Json(state.annotator.annotate(&req.text, req.case_id.as_deref()))
}

/// List sample cases
async fn list_samples() -> Json<Vec<SampleSummary>> {
    Json(
        SAMPLE_CASES
            .iter()
            .map(|c| SampleSummary {
                id: c.id,
                title: c.title,
                docket: c.docket,
                posture: c.posture,
            })
            .collect(),
    )
}

/// Get one sample case
async fn get_sample(Path(id): Path<String>) -> Result<Json<SampleDetail>, StatusCode> {
    let case = sample(&id).map_err(reject)?;

    Ok(Json(SampleDetail {
        summary: SampleSummary {
            id: case.id,
            title: case.title,
            docket: case.docket,
            posture: case.posture,
        },
        text: case.text,
    }))
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, "SCOTUS strategic engine API listening");
    println!("⚖ SCOTUS Strategic Engine API running on {}", addr);
    println!("  POST /api/analyze      - Run analysis");
    println!("  POST /api/chat         - Chat reply");
    println!("  POST /api/simulate     - Simulate a Justice");
    println!("  POST /api/annotate     - Annotate a brief");
    println!("  GET  /api/samples      - List samples");
    println!("  GET  /api/samples/:id  - Get sample");
    println!("  GET  /health           - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
