//! FAQ Generation Pipeline
//!
//! Topic string in, exactly three question/answer pairs out. The remote
//! chat-completion call is the primary path; every failure along it
//! (missing credential, network error, timeout, malformed output) degrades
//! to the deterministic fallback result. The only error that crosses this
//! boundary is the empty-topic precondition, so rendering callers keep a
//! single code path.

mod fallback;

pub use fallback::fallback_faqs;

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::ai::{SharedProvider, create_provider, parse_faq_response, prompt, with_timeout};
use crate::config::Config;
use crate::types::{FaqError, FaqOutcome, FaqPair, Result};

/// Stateless FAQ generation pipeline.
///
/// Holds the injected provider (if any), the output language, and the
/// per-call timeout. Calls are independent; the pipeline is cheap to share
/// behind an `Arc` across concurrent handlers.
pub struct FaqPipeline {
    provider: Option<SharedProvider>,
    language: String,
    timeout: Duration,
}

impl FaqPipeline {
    pub fn new(provider: Option<SharedProvider>, language: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider,
            language: language.into(),
            timeout,
        }
    }

    /// Build a pipeline from configuration, constructing the provider when
    /// a credential is present.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = create_provider(&config.llm)?;
        match &provider {
            Some(p) => info!(provider = p.name(), model = p.model(), "Chat provider configured"),
            None => info!("No API key found, FAQ generation will serve fallback content"),
        }
        Ok(Self::new(
            provider,
            config.generation.language.clone(),
            Duration::from_secs(config.llm.timeout_secs),
        ))
    }

    /// Generate a FAQ result for a topic.
    ///
    /// Errors only on an empty or whitespace-only topic. Every downstream
    /// failure resolves to `FaqOutcome::Fallback`.
    pub async fn generate(&self, topic: &str) -> Result<FaqOutcome> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(FaqError::EmptyTopic);
        }

        let Some(provider) = &self.provider else {
            debug!(topic, "No chat provider, serving fallback FAQs");
            return Ok(FaqOutcome::Fallback(fallback_faqs(topic)));
        };

        match self.try_generate(provider, topic).await {
            Ok(pairs) => {
                debug!(topic, "Generated FAQs from chat provider");
                Ok(FaqOutcome::Generated(pairs))
            }
            Err(e) => {
                warn!(topic, error = %e, "FAQ generation failed, serving fallback");
                Ok(FaqOutcome::Fallback(fallback_faqs(topic)))
            }
        }
    }

    /// Single remote attempt: prompt, one bounded call, strict parse.
    async fn try_generate(&self, provider: &SharedProvider, topic: &str) -> Result<Vec<FaqPair>> {
        let system = prompt::system_prompt();
        let user = prompt::user_prompt(topic, &self.language);

        let raw = with_timeout(
            self.timeout,
            provider.chat(system, &user),
            "chat completion",
        )
        .await?;

        parse_faq_response(&raw)
    }
}
