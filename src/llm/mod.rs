pub mod chat;

use thiserror::Error;

/// Side of a conversation turn as the generateContent wire format names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModelTurn {
    pub role: Role,
    pub text: String,
}

impl ModelTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

/// The assembled payload for one upstream call: ordered role-tagged turns.
/// The assembler guarantees the final turn is user-side.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub turns: Vec<ModelTurn>,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub completion_model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Gemini API key is required for GeminiChatClient")]
    MissingApiKey,
    #[error("model endpoint returned status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("model response did not contain a candidate reply")]
    MissingCandidate,
    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
