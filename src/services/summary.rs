//! Prompt construction and provider orchestration for breach summaries.

use crate::error::AppError;
use crate::models::BreachSummaryInput;
use crate::services::providers::{ProviderError, TextProvider};
use std::fmt::Write as _;

/// System instruction sent alongside every summary request. The persona
/// and structural asks are a fixed contract with the model.
const SYSTEM_PROMPT: &str = "You are a world-class cybersecurity analyst. Your name is 'Cypher'. \
    You are providing a security briefing to a non-technical user whose banking information was \
    found in a data breach. Your tone should be serious, clear, and reassuring, like a security \
    expert in a hacker movie. Do not use emojis. Structure your response in Markdown.";

/// Render one numbered text block per breach, in input order. Missing
/// fields render as "N/A".
pub fn render_breach_details(breaches: &[BreachSummaryInput]) -> String {
    let mut text = String::new();
    for (i, breach) in breaches.iter().enumerate() {
        let _ = writeln!(text, "Breach {}:", i + 1);
        let _ = writeln!(text, "- Source: {}", field(&breach.source));
        let _ = writeln!(text, "- Date: {}", field(&breach.date));
        let _ = writeln!(text, "- Risk Level: {}", field(&breach.risk_level));
        let _ = writeln!(text, "- Description: {}", field(&breach.description));
        text.push('\n');
    }
    text
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// Wrap the rendered breach blocks in the instructional template: a brief
/// one-paragraph risk summary, then 3-5 prioritized recommendations under
/// a "Recommended Actions" heading.
pub fn build_user_prompt(breaches: &[BreachSummaryInput]) -> String {
    format!(
        "My banking detail was found in the following data breach(es):\n\n\
         {}First, provide a brief, one-paragraph summary of the situation and the overall risk. \
         Then, provide a clear, actionable, and prioritized list of 3-5 security recommendations \
         under a '## Recommended Actions' heading. For example: '1. Contact Your Bank \
         Immediately', '2. Enable Two-Factor Authentication (2FA)'. Keep the language direct and \
         easy to understand.",
        render_breach_details(breaches)
    )
}

/// Ask the provider for a summary of the given breach records.
pub async fn summarize(
    provider: &dyn TextProvider,
    breaches: &[BreachSummaryInput],
) -> Result<String, AppError> {
    let prompt = build_user_prompt(breaches);

    let response = provider
        .generate(SYSTEM_PROMPT, &prompt)
        .await
        .map_err(|e| match e {
            ProviderError::NotConfigured(msg) => AppError::ConfigError(anyhow::anyhow!(msg)),
            ProviderError::NetworkError(msg) | ProviderError::ApiError(msg) => {
                tracing::error!(error = %msg, "Upstream AI call failed");
                AppError::UpstreamUnavailable(msg)
            }
        })?;

    tracing::debug!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Received summary from provider"
    );

    response
        .text
        .filter(|text| !text.is_empty())
        .ok_or(AppError::UpstreamEmptyResponse)
}
