//! Session handlers: one function per user action
//!
//! Every handler takes the current `AppState` by reference and returns the
//! next one. Nothing is mutated in place, so an error leaves the caller's
//! state exactly as it was.

use std::time::Duration;

use tracing::info;

use crate::core::bench::{full_bench, simulate_persona};
use crate::core::chat::{analysis_summary, question_message, rewrite_note, FULL_BENCH_INTRO};
use crate::core::samples::sample;
use crate::core::{BriefAnnotator, FallbackBackend, PostureDetector, TierClassifier};
use crate::types::{
    AnalysisRequest, AppState, ChatMessage, ChatRequest, ClassificationInput, Persona,
    PersonaQuestion, PostureSelection, SegmentFeedback,
};
use crate::EngineError;

/// Progress reporting between pipeline stages
#[derive(Debug, Default, Clone, Copy)]
pub struct Pacing {
    enabled: bool,
}

impl Pacing {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn off() -> Self {
        Self { enabled: false }
    }

    /// Report `status`; wait `ms` when pacing is on
    pub async fn step(&self, status: &str, ms: u64) {
        info!(status, "analysis progress");
        if self.enabled && ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

pub struct Session {
    backend: FallbackBackend,
    pacing: Pacing,
    tiers: TierClassifier,
    postures: PostureDetector,
    annotator: BriefAnnotator,
}

impl Session {
    pub fn new(backend: FallbackBackend, pacing: Pacing) -> Self {
        Self {
            backend,
            pacing,
            tiers: TierClassifier::new(),
            postures: PostureDetector::new(),
            annotator: BriefAnnotator::new(),
        }
    }

    /// Local engine, no pacing
    pub fn local() -> Self {
        Self::new(FallbackBackend::local_only(), Pacing::off())
    }

    /// Classify, analyze and render a user submission
    pub async fn submit_analysis(
        &self,
        state: &AppState,
        input: ClassificationInput,
    ) -> Result<AppState, EngineError> {
        let input = input.trimmed();
        input.validate()?;

        self.pacing.step("Classifying input tier...", 0).await;
        let tier = self.tiers.classify_input(&input);

        self.pacing.step("Detecting posture...", 500).await;
        let posture = self.postures.resolve(input.posture, &input.text);

        self.pacing.step("Analyzing precedent architecture...", 800).await;
        let request = AnalysisRequest {
            text: input.text.clone(),
            title: input.title.clone(),
            posture: PostureSelection::from(posture),
            tier: Some(tier),
            docket: input.docket().to_string(),
        };
        let analysis = self.backend.analyze(&request).await;

        self.pacing.step("Simulating judicial pressure points...", 600).await;
        info!(
            %tier,
            %posture,
            files = input.files.len(),
            precedents = analysis.precedents.len(),
            "analysis complete"
        );

        let mut next = state.clone();
        next.current_case_id = None;
        next.input_tier = Some(tier);
        next.posture = Some(posture);
        next.selected_persona = None;
        next.selected_segment = None;
        next.uploaded_files = input.files;
        next.brief = if input.text.is_empty() {
            None
        } else {
            Some(self.annotator.annotate(&input.text, None))
        };
        next.brief_text = Some(input.text).filter(|t| !t.is_empty());
        next.chat_history.push(ChatMessage::assistant(analysis_summary(&analysis)));
        next.current_analysis = Some(analysis);

        Ok(next)
    }

    /// Run a built-in sample through the pipeline with its own posture
    pub async fn load_sample(&self, state: &AppState, case_id: &str) -> Result<AppState, EngineError> {
        let case = sample(case_id)?;

        self.pacing.step(&format!("Loading {}...", case.title), 300).await;
        let tier = self.tiers.classify(case.text, 0);

        self.pacing.step("Analyzing precedent architecture...", 600).await;
        let request = AnalysisRequest {
            text: case.text.to_string(),
            title: case.title.to_string(),
            posture: PostureSelection::from(case.posture),
            tier: Some(tier),
            docket: case.docket.to_string(),
        };
        let analysis = self.backend.analyze(&request).await;

        self.pacing.step("Simulating judicial pressure points...", 500).await;
        info!(case = case.id, %tier, "sample analysis complete");

        let mut next = state.clone();
        next.current_case_id = Some(case.id.to_string());
        next.input_tier = Some(tier);
        next.posture = Some(case.posture);
        next.selected_persona = None;
        next.selected_segment = None;
        next.uploaded_files = Vec::new();
        next.brief_text = Some(case.text.to_string());
        next.brief = Some(self.annotator.annotate(case.text, Some(case.id)));
        next.chat_history.push(ChatMessage::assistant(analysis_summary(&analysis)));
        next.current_analysis = Some(analysis);

        Ok(next)
    }

    /// Send a chat message; blank messages are ignored
    pub async fn send_chat(&self, state: &AppState, message: &str) -> AppState {
        let message = message.trim();
        if message.is_empty() {
            return state.clone();
        }

        let mut next = state.clone();
        next.chat_history.push(ChatMessage::user(message));

        let request = ChatRequest {
            message: message.to_string(),
            history: next.chat_history.clone(),
            context: next.current_analysis.clone(),
        };
        let reply = self.backend.chat(&request).await;
        next.chat_history.push(ChatMessage::assistant(reply));

        next
    }
}

// =============================================================================
// SYNCHRONOUS HANDLERS
// =============================================================================

/// Select a brief segment and surface its feedback
pub fn select_segment(state: &AppState, id: &str) -> Result<(AppState, SegmentFeedback), EngineError> {
    let brief = state.brief.as_ref().ok_or(EngineError::NoBrief)?;
    let panel = brief.select(id)?;

    let mut next = state.clone();
    next.selected_segment = Some(id.to_string());
    Ok((next, panel))
}

/// Display a segment's suggested rewrite and note it in chat.
///
/// The canonical brief text is not changed.
pub fn apply_rewrite(state: &AppState, id: &str) -> Result<AppState, EngineError> {
    let brief = state.brief.as_ref().ok_or(EngineError::NoBrief)?;
    let rewritten = brief.with_rewrite(id)?;

    let note = rewritten
        .segment(id)
        .map(|s| rewrite_note(&s.original, &s.feedback.rewrite))
        .ok_or_else(|| EngineError::UnknownSegment(id.to_string()))?;

    let mut next = state.clone();
    next.brief = Some(rewritten);
    next.selected_segment = None;
    next.chat_history.push(ChatMessage::assistant(note));
    Ok(next)
}

/// Put one Justice's question to the current analysis.
///
/// Questions already on the dashboard are returned without a chat message.
pub fn simulate(state: &AppState, persona: Persona) -> Result<(AppState, PersonaQuestion), EngineError> {
    let analysis = state.current_analysis.as_ref().ok_or(EngineError::NoAnalysis)?;
    let (question, already_shown) = simulate_persona(persona, analysis);

    let mut next = state.clone();
    next.selected_persona = Some(persona);
    if !already_shown {
        next.chat_history.push(ChatMessage::assistant(question_message(&question)));
    }
    Ok((next, question))
}

/// Post one question from each of the nine Justices
pub fn simulate_full_bench(state: &AppState) -> Result<(AppState, Vec<PersonaQuestion>), EngineError> {
    if !state.has_analysis() {
        return Err(EngineError::NoAnalysis);
    }

    let questions = full_bench();
    let mut next = state.clone();
    next.chat_history.push(ChatMessage::assistant(FULL_BENCH_INTRO));
    next.chat_history
        .extend(questions.iter().map(|q| ChatMessage::assistant(question_message(q))));
    Ok((next, questions))
}

/// Back to an empty session
pub fn reset(_state: &AppState) -> AppState {
    AppState::new()
}
