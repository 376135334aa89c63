use thiserror::Error;

use crate::llm::LlmError;

/// Everything that can go wrong while handling one chat turn. All variants
/// surface to the caller as HTTP 500 with one of two coarse messages.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Gemini API key not configured")]
    MissingCredential,
    #[error(transparent)]
    Llm(#[from] LlmError),
}

const RETRY_MESSAGE: &str = "Oops, I think the message hasn't reached us. Please try again.";

impl AgentError {
    /// The message the widget shows. Rate-limit and server-side upstream
    /// failures get a friendly retry text; everything else is passed through.
    pub fn user_message(&self) -> String {
        match self {
            AgentError::MissingCredential => self.to_string(),
            other => {
                let details = other.to_string();
                if details.contains("rate limit") || details.contains("500") {
                    RETRY_MESSAGE.to_string()
                } else {
                    format!("Error: {}", details)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_maps_to_configuration_message() {
        assert_eq!(
            AgentError::MissingCredential.user_message(),
            "Gemini API key not configured"
        );
    }

    #[test]
    fn upstream_server_errors_get_the_retry_message() {
        let err = AgentError::Llm(LlmError::Upstream {
            status: 500,
            body: "internal".to_string(),
        });
        assert_eq!(err.user_message(), RETRY_MESSAGE);

        let err = AgentError::Llm(LlmError::Upstream {
            status: 429,
            body: "rate limit exceeded".to_string(),
        });
        assert_eq!(err.user_message(), RETRY_MESSAGE);
    }

    #[test]
    fn other_upstream_errors_keep_the_original_details() {
        let err = AgentError::Llm(LlmError::Upstream {
            status: 400,
            body: "invalid argument".to_string(),
        });
        let message = err.user_message();
        assert!(message.starts_with("Error: "));
        assert!(message.contains("invalid argument"));
    }

    #[test]
    fn shape_errors_fall_into_the_generic_bucket() {
        let err = AgentError::Llm(LlmError::MissingCandidate);
        assert_eq!(
            err.user_message(),
            "Error: model response did not contain a candidate reply"
        );
    }
}
