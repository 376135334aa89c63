use async_trait::async_trait;
use serde::{ Deserialize, Serialize };
use log::info;

use super::ChatClient;
use crate::llm::{ LlmConfig, LlmError, ModelRequest };

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GoogleCandidate>,
}

#[derive(Deserialize)]
struct GoogleCandidate {
    content: GoogleContent,
}

#[derive(Deserialize)]
struct GoogleContent {
    #[serde(default)]
    parts: Vec<GooglePart>,
}

#[derive(Deserialize)]
struct GooglePart {
    text: String,
}

pub struct GeminiChatClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiChatClient {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config.api_key.clone().ok_or(LlmError::MissingApiKey)?;
        Ok(Self::new(api_key, config.completion_model.clone(), config.base_url.clone()))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn complete(&self, request: &ModelRequest) -> Result<String, LlmError> {
        let contents = request.turns
            .iter()
            .map(|turn| GeminiContent {
                role: turn.role.as_wire_str().to_string(),
                parts: vec![GeminiPart { text: turn.text.clone() }],
            })
            .collect();

        info!(
            "GeminiChatClient::complete() → model={} turns={}",
            self.model,
            request.turns.len()
        );

        let resp = self.http
            .post(self.endpoint())
            .json(&GenerateContentRequest { contents })
            .send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Upstream { status: status.as_u16(), body });
        }

        let body: GenerateContentResponse = resp.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(LlmError::MissingCandidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ModelTurn;

    #[test]
    fn from_config_requires_api_key() {
        let config = LlmConfig {
            api_key: None,
            completion_model: None,
            base_url: None,
        };
        assert!(matches!(GeminiChatClient::from_config(&config), Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn endpoint_includes_model_and_key() {
        let client = GeminiChatClient::new(
            "secret".to_string(),
            Some("gemini-pro".to_string()),
            Some("https://example.test/models/".to_string())
        );
        assert_eq!(
            client.endpoint(),
            "https://example.test/models/gemini-pro:generateContent?key=secret"
        );
    }

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = ModelRequest {
            turns: vec![ModelTurn::user("input: hi"), ModelTurn::model("hello")],
        };
        let contents: Vec<GeminiContent> = request.turns
            .iter()
            .map(|turn| GeminiContent {
                role: turn.role.as_wire_str().to_string(),
                parts: vec![GeminiPart { text: turn.text.clone() }],
            })
            .collect();
        let json = serde_json::to_value(GenerateContentRequest { contents }).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][1]["role"], "model");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "input: hi");
    }
}
