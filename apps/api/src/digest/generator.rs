//! Digest generation: one completion call per topic, then best-effort parsing.

use tracing::{info, warn};

use crate::digest::prompts::compose_messages;
use crate::digest::reply::{parse_reply, ParsedReply};
use crate::digest::topic::Topic;
use crate::errors::AppError;
use crate::llm_client::CompletionService;

#[derive(Debug, Clone)]
pub struct GeneratedDigest {
    pub raw: String,
    pub parsed: ParsedReply,
    pub model: String,
}

/// Sends the composed conversation once and parses whatever comes back.
/// Parse problems are reported as warnings, never as errors.
pub async fn generate_digest(
    service: &dyn CompletionService,
    topic: &Topic,
) -> Result<GeneratedDigest, AppError> {
    let messages = compose_messages(topic);

    info!(
        model = service.model(),
        topic_chars = topic.char_len(),
        "Requesting digest"
    );
    let completion = service.complete(&messages).await?;

    let parsed = parse_reply(&completion.text);
    if parsed.outcome.is_complete() {
        info!(items = parsed.items.len(), "Digest parsed");
    } else {
        let warnings: Vec<String> = parsed
            .outcome
            .warnings()
            .iter()
            .map(|w| w.message())
            .collect();
        warn!(items = parsed.items.len(), ?warnings, "Digest reply degraded");
    }

    Ok(GeneratedDigest {
        raw: completion.text,
        parsed,
        model: service.model().to_string(),
    })
}
