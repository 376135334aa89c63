use std::sync::Arc;

use log::{ info, warn };

use crate::cli::Args;
use crate::config::knowledge::knowledge_base;
use crate::config::prompt::{ build_model_request, AssemblyMode };
use crate::error::AgentError;
use crate::history;
use crate::llm::chat::{ new_client, ChatClient };
use crate::llm::LlmConfig;
use crate::models::chat::ConversationMessage;
use crate::normalize::{ render_markdown, render_reply };

/// Orchestrates one chat turn: credential check, recall short-circuit,
/// prompt assembly, the single upstream call, and response cleanup.
pub struct SupportAgent {
    chat_client: Option<Arc<dyn ChatClient>>,
    assembly_mode: AssemblyMode,
}

impl SupportAgent {
    pub fn new(args: &Args) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let assembly_mode: AssemblyMode = args.assembly_mode.parse()?;

        let chat_client = if args.chat_api_key.is_empty() {
            // Startup still succeeds so the route can answer with a proper
            // configuration error instead of the process refusing to boot.
            warn!("GEMINI_API_KEY is not set; chat requests will fail until it is configured");
            None
        } else {
            let config = LlmConfig {
                api_key: Some(args.chat_api_key.clone()),
                completion_model: args.chat_model.clone(),
                base_url: args.chat_base_url.clone(),
            };
            let client = new_client(&config)?;
            info!(
                "Chat client configured: Model={:?}, BaseURL={:?}",
                config.completion_model.as_deref().unwrap_or("adapter default"),
                config.base_url.as_deref().unwrap_or("adapter default")
            );
            Some(client)
        };

        Ok(Self { chat_client, assembly_mode })
    }

    pub fn with_client(chat_client: Option<Arc<dyn ChatClient>>, assembly_mode: AssemblyMode) -> Self {
        Self { chat_client, assembly_mode }
    }

    /// Handles one inbound transcript and returns rendered HTML for the widget.
    pub async fn handle_message(
        &self,
        messages: &[ConversationMessage]
    ) -> Result<String, AgentError> {
        let client = self.chat_client.as_ref().ok_or(AgentError::MissingCredential)?;

        let newest = messages.last().map(|m| m.text.as_str()).unwrap_or("");

        if history::is_recall_question(newest) {
            info!("Recall question answered locally, skipping model call");
            return Ok(render_markdown(&history::recall_reply(messages)));
        }

        let request = build_model_request(knowledge_base(), messages, self.assembly_mode);
        let raw = client.complete(&request).await?;
        Ok(render_reply(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{ AtomicUsize, Ordering };

    use crate::llm::{ LlmError, ModelRequest };
    use crate::models::chat::Sender;

    struct MockChatClient {
        calls: AtomicUsize,
        reply: Result<String, u16>,
    }

    impl MockChatClient {
        fn replying(text: &str) -> Self {
            Self { calls: AtomicUsize::new(0), reply: Ok(text.to_string()) }
        }

        fn failing(status: u16) -> Self {
            Self { calls: AtomicUsize::new(0), reply: Err(status) }
        }
    }

    #[async_trait]
    impl ChatClient for MockChatClient {
        async fn complete(&self, _request: &ModelRequest) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Upstream {
                    status: *status,
                    body: "upstream failed".to_string(),
                }),
            }
        }
    }

    fn user(text: &str) -> ConversationMessage {
        ConversationMessage { sender: Sender::User, text: text.to_string() }
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_model_call() {
        let agent = SupportAgent::with_client(None, AssemblyMode::Structured);
        let result = agent.handle_message(&[user("hi")]).await;
        assert!(matches!(result, Err(AgentError::MissingCredential)));
    }

    #[tokio::test]
    async fn recall_question_is_answered_without_a_model_call() {
        let mock = Arc::new(MockChatClient::replying("should not be used"));
        let agent = SupportAgent::with_client(Some(mock.clone() as Arc<dyn ChatClient>), AssemblyMode::Structured);

        let reply = agent.handle_message(&[user("what was my last message?")]).await.unwrap();
        assert!(reply.contains("previous messages"));
        assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_reply_is_normalized_and_rendered() {
        let mock = Arc::new(
            MockChatClient::replying("output: Join us at https://discord.com/invite/yGqSnBCdUW")
        );
        let agent = SupportAgent::with_client(Some(mock.clone() as Arc<dyn ChatClient>), AssemblyMode::Flattened);

        let reply = agent.handle_message(&[user("discord link?")]).await.unwrap();
        assert!(reply.contains("<a href=\"https://discord.com/invite/yGqSnBCdUW\">"));
        assert!(!reply.contains("output:"));
        assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn upstream_failures_propagate() {
        let mock = Arc::new(MockChatClient::failing(500));
        let agent = SupportAgent::with_client(Some(mock as Arc<dyn ChatClient>), AssemblyMode::Structured);

        let result = agent.handle_message(&[user("hi")]).await;
        assert!(matches!(result, Err(AgentError::Llm(LlmError::Upstream { status: 500, .. }))));
    }
}
