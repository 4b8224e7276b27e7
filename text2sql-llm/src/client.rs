use crate::{
    error::LlmError,
    types::{ChatRequest, ChatResponse},
};
use async_trait::async_trait;

/// Core trait for completion-service clients
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a chat-completion request and return the raw answer
    async fn chat_complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;

    /// Get provider name (e.g., "modellake")
    fn provider_name(&self) -> &str;
}
