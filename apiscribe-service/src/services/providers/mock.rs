//! Mock provider implementation for testing.

use super::{CompletionProvider, ProviderError, ProviderResponse};
use async_trait::async_trait;

/// Mock completion provider for testing and for running without an API key.
pub struct MockCompletionProvider {
    behavior: MockBehavior,
}

enum MockBehavior {
    /// Echo a canned reply.
    Reply(String),
    /// Succeed with zero choices.
    Empty,
    /// Fail the call.
    Failing,
}

impl MockCompletionProvider {
    /// Provider that answers every completion with the given text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.into()),
        }
    }

    /// Provider that succeeds but returns no choices.
    pub fn empty() -> Self {
        Self {
            behavior: MockBehavior::Empty,
        }
    }

    /// Provider whose calls fail with an API error.
    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Failing,
        }
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, _prompt: &str) -> Result<ProviderResponse, ProviderError> {
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
            }),
            MockBehavior::Empty => Ok(ProviderResponse { text: None }),
            MockBehavior::Failing => Err(ProviderError::ApiError(
                "Mock provider configured to fail".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::NotConfigured(
                "Mock provider configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
