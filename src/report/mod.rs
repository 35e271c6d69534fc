//! Weekly league report: Sleeper matchups summarized by a chat model.

pub mod markdown;
pub mod matchups;
pub mod openai;
pub mod owners;
pub mod prompt;

use tracing::error;

use crate::Result;

pub use markdown::{report_path, wrap_as_markdown};
pub use matchups::{player_names, summarize_matchups, MatchupSummary, PlayerNames};
pub use openai::{ChatMessage, OpenAiClient, DEFAULT_MODEL, OPENAI_BASE_URL};
pub use owners::{pretty_owner_name, roster_owner_map, OwnerAliases, OwnerInfo};
pub use prompt::{system_prompt, user_prompt, Language, Tone};

/// Report body used when the API key has no quota left.
pub fn quota_fallback_text(matchups: &[MatchupSummary]) -> Result<String> {
    Ok(format!(
        "*Hinweis: OpenAI-API-Quota erschöpft.*\n\nMatchups (Rohdaten):\n{}",
        serde_json::to_string_pretty(matchups)?
    ))
}

/// Ask the model for the report text. Quota exhaustion degrades to the raw
/// matchup data; every other error is returned.
pub async fn complete_or_fallback(
    client: &OpenAiClient,
    model: &str,
    messages: &[ChatMessage],
    matchups: &[MatchupSummary],
) -> Result<String> {
    match client.chat(model, messages).await {
        Ok(text) => Ok(text),
        Err(e) if e.is_insufficient_quota() => {
            error!("OpenAI quota exhausted, check billing/usage");
            quota_fallback_text(matchups)
        }
        Err(e) => Err(e),
    }
}
