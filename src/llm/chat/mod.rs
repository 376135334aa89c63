pub mod gemini;

use async_trait::async_trait;
use std::sync::Arc;

use self::gemini::GeminiChatClient;
use super::{ LlmConfig, LlmError, ModelRequest };

/// Seam between the agent and the hosted model. One call per inbound chat
/// turn; no retries, no streaming.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, request: &ModelRequest) -> Result<String, LlmError>;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, LlmError> {
    let client = GeminiChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
