//! Completion provider abstraction and implementations.
//!
//! This module provides a trait-based seam over the upstream completion
//! API, allowing the OpenAI backend to be swapped for a mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a completion call.
///
/// `text` is `None` when the upstream answered successfully but returned
/// zero choices.
#[derive(Debug)]
pub struct ProviderResponse {
    pub text: Option<String>,
}

/// Trait for chat-completion providers (e.g. OpenAI).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one user message and return the first choice's content.
    async fn complete(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
