//! Analysis backends: optional remote service with local fallback
//!
//! The remote service speaks the same contract as `api::create_router`:
//! `POST {base}/analyze` and `POST {base}/chat`. Any transport error or
//! non-success status drops straight to the local engine. No retries.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::{AnalysisGenerator, ChatResponder};
use crate::types::{AnalysisRequest, AnalysisResult, ChatRequest, ChatResponse};

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, BackendError>;

    async fn chat(&self, req: &ChatRequest) -> Result<String, BackendError>;
}

// =============================================================================
// REMOTE
// =============================================================================

/// HTTP client for a remote analysis service
pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteBackend {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, BackendError>
    where
        B: serde::Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);

        info!(url = %url, "calling analysis backend");
        let resp = self.client.post(&url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl AnalysisBackend for RemoteBackend {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, BackendError> {
        self.post("analyze", req).await
    }

    async fn chat(&self, req: &ChatRequest) -> Result<String, BackendError> {
        let resp: ChatResponse = self.post("chat", req).await?;
        Ok(resp.response)
    }
}

// =============================================================================
// LOCAL
// =============================================================================

/// Rule engine running in-process. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalBackend {
    generator: AnalysisGenerator,
    responder: ChatResponder,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze_now(&self, req: &AnalysisRequest) -> AnalysisResult {
        self.generator.generate_request(req)
    }

    pub fn chat_now(&self, req: &ChatRequest) -> String {
        let context = req.context.as_ref();
        self.responder.respond(
            &req.message,
            &req.history,
            context,
            context.map(|c| c.tier),
            context.map(|c| c.posture),
        )
    }
}

#[async_trait]
impl AnalysisBackend for LocalBackend {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, BackendError> {
        Ok(self.analyze_now(req))
    }

    async fn chat(&self, req: &ChatRequest) -> Result<String, BackendError> {
        Ok(self.chat_now(req))
    }
}

// =============================================================================
// FALLBACK
// =============================================================================

/// Tries the primary backend once, then answers locally
pub struct FallbackBackend {
    primary: Option<Box<dyn AnalysisBackend>>,
    local: LocalBackend,
}

impl FallbackBackend {
    pub fn new(primary: Box<dyn AnalysisBackend>) -> Self {
        Self {
            primary: Some(primary),
            local: LocalBackend::new(),
        }
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        Self::new(Box::new(RemoteBackend::new(base_url)))
    }

    pub fn local_only() -> Self {
        Self {
            primary: None,
            local: LocalBackend::new(),
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn analyze(&self, req: &AnalysisRequest) -> AnalysisResult {
        if let Some(primary) = &self.primary {
            match primary.analyze(req).await {
                Ok(result) => {
                    debug!(backend = primary.name(), "analysis served by backend");
                    return result;
                }
                Err(e) => {
                    warn!(backend = primary.name(), error = %e, "analysis backend unavailable, using local engine");
                }
            }
        }
        self.local.analyze_now(req)
    }

    pub async fn chat(&self, req: &ChatRequest) -> String {
        if let Some(primary) = &self.primary {
            match primary.chat(req).await {
                Ok(reply) => return reply,
                Err(e) => {
                    warn!(backend = primary.name(), error = %e, "chat backend unavailable, using local responder");
                }
            }
        }
        self.local.chat_now(req)
    }
}

impl Default for FallbackBackend {
    fn default() -> Self {
        Self::local_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InputTier, OverallRisk, Posture, PostureSelection};

    struct Failing;

    #[async_trait]
    impl AnalysisBackend for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn analyze(&self, _req: &AnalysisRequest) -> Result<AnalysisResult, BackendError> {
            Err(BackendError::Server { status: 503, body: "down".to_string() })
        }

        async fn chat(&self, _req: &ChatRequest) -> Result<String, BackendError> {
            Err(BackendError::Server { status: 500, body: String::new() })
        }
    }

    struct Canned;

    #[async_trait]
    impl AnalysisBackend for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, BackendError> {
            let mut result = LocalBackend::new().analyze_now(req);
            result.risk_level = OverallRisk::Strong;
            Ok(result)
        }

        async fn chat(&self, _req: &ChatRequest) -> Result<String, BackendError> {
            Ok("from remote".to_string())
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            text: "Section 2 of the Voting Rights Act".to_string(),
            title: "Test".to_string(),
            posture: PostureSelection::Merits,
            tier: Some(InputTier::B),
            docket: String::new(),
        }
    }

    #[tokio::test]
    async fn test_failing_primary_falls_back() {
        let backend = FallbackBackend::new(Box::new(Failing));
        let result = backend.analyze(&request()).await;
        assert_eq!(result.risk_level, OverallRisk::Caution);
        assert_eq!(result.posture, Posture::Merits);
        assert_eq!(result.tier, InputTier::B);
        assert!(result.issues.vra);

        let reply = backend
            .chat(&ChatRequest { message: "what if".to_string(), ..Default::default() })
            .await;
        assert!(reply.starts_with("Interesting hypothetical."));
    }

    #[tokio::test]
    async fn test_successful_primary_wins() {
        let backend = FallbackBackend::new(Box::new(Canned));
        assert_eq!(backend.analyze(&request()).await.risk_level, OverallRisk::Strong);
        assert_eq!(backend.chat(&ChatRequest::default()).await, "from remote");
    }

    #[tokio::test]
    async fn test_local_chat_uses_context() {
        let context = LocalBackend::new().analyze_now(&AnalysisRequest {
            text: "x".repeat(6000),
            posture: PostureSelection::Emergency,
            ..Default::default()
        });
        let reply = FallbackBackend::local_only()
            .chat(&ChatRequest {
                message: "and then?".to_string(),
                history: vec![],
                context: Some(context),
            })
            .await;
        assert!(reply.contains("**Input Tier A**"));
        assert!(reply.contains("**emergency posture**"));
    }

    #[test]
    fn test_remote_trims_trailing_slash() {
        assert_eq!(RemoteBackend::new("http://localhost:5000/api/").base_url(), "http://localhost:5000/api");
    }
}
