//! OpenRouter-compatible chat-completions gateway.
//!
//! # Responsibility
//! - POST one system+user message pair to a chat-completions endpoint.
//! - Map transport/status/decoding failures onto `GatewayError`.
//!
//! # Invariants
//! - The system instruction is fixed per gateway instance.
//! - A success response with no usable choice content degrades to a fixed
//!   apology string rather than an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;
use crate::gateway::{AssistantGateway, GatewayError};

/// System instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful productivity assistant for Mind Notes app. When users ask you to create task lists, respond with a clear title and numbered list of tasks. Keep responses concise and actionable. Focus on helping users organize their thoughts and tasks effectively.";

/// Reply used when the endpoint succeeds but returns no usable content.
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't process your request right now.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP gateway for an OpenAI-style chat-completions endpoint.
pub struct OpenRouterGateway {
    config: AssistantConfig,
    client: reqwest::Client,
}

impl OpenRouterGateway {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn request_body<'a>(&'a self, user_text: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                WireMessage {
                    role: "user",
                    content: user_text,
                },
            ],
        }
    }
}

#[async_trait]
impl AssistantGateway for OpenRouterGateway {
    async fn complete(&self, user_text: &str) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&self.request_body(user_text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|err| GatewayError::MalformedPayload(err.to_string()))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|text| !text.trim().is_empty());

        Ok(content.unwrap_or_else(|| EMPTY_REPLY.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{OpenRouterGateway, SYSTEM_INSTRUCTION};
    use crate::config::AssistantConfig;

    #[test]
    fn request_body_carries_system_then_user_message() {
        let gateway = OpenRouterGateway::new(AssistantConfig::new("key"));
        let body = gateway.request_body("plan my week");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], SYSTEM_INSTRUCTION);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "plan my week");
    }

    #[test]
    fn response_decoding_tolerates_missing_pieces() {
        let empty: super::ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.choices.is_empty());

        let no_content: super::ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {}}]}"#).unwrap();
        assert!(no_content.choices[0]
            .message
            .as_ref()
            .unwrap()
            .content
            .is_none());
    }
}
