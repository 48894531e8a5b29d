//! Mock provider implementation for testing.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Canned behavior for the mock provider.
pub enum MockBehavior {
    /// Return a fixed summary.
    Respond(String),
    /// Return a response with no usable text.
    RespondEmpty,
    /// Fail as if the upstream API were unreachable.
    Fail(String),
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    behavior: MockBehavior,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self { behavior }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _system_instruction: &str,
        prompt: &str,
    ) -> Result<ProviderResponse, ProviderError> {
        match &self.behavior {
            MockBehavior::Respond(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: 10,
            }),
            MockBehavior::RespondEmpty => Ok(ProviderResponse {
                text: None,
                input_tokens: 0,
                output_tokens: 0,
            }),
            MockBehavior::Fail(reason) => Err(ProviderError::NetworkError(reason.clone())),
        }
    }
}
