// Azure OpenAI chat-completions agent
//
// One agent instance wraps one deployment plus a fixed system instruction.
// The classifier and the specialist are both built from this type; only
// their configuration differs.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::{AgentError, AgentRequest, TextAgent};

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Agent backed by an Azure OpenAI chat-completions deployment.
#[derive(Clone)]
pub struct AzureAgent {
    client: Client,
    name: String,
    endpoint: String,
    deployment: String,
    api_version: String,
    api_key: String,
    system_message: String,
}

impl AzureAgent {
    /// Create an agent against a specific deployment.
    ///
    /// `endpoint` is the Azure resource base URL; `system_message` is the
    /// fixed instruction that shapes this agent's role.
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
        deployment: impl Into<String>,
        system_message: impl Into<String>,
    ) -> Result<Self, AgentError> {
        let name = name.into();
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AgentError::Unavailable {
                agent: name.clone(),
                reason: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            name,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_version: api_version.into(),
            deployment: deployment.into(),
            system_message: system_message.into(),
        })
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }

    async fn send_once(&self, request: &AgentRequest) -> Result<String, AgentError> {
        let body = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.system_message.clone(),
                },
                ChatMessage {
                    role: request.source.clone(),
                    content: request.content.clone(),
                },
            ],
        };

        tracing::debug!("Sending request to Azure OpenAI deployment '{}'", self.deployment);

        let response = self
            .client
            .post(self.chat_url())
            .header("api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Unavailable {
                agent: self.name.clone(),
                reason: format!("Request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AgentError::Unavailable {
                agent: self.name.clone(),
                reason: format!("API returned {}: {}", status, error_body),
            });
        }

        let chat_response: ChatResponse =
            response.json().await.map_err(|e| AgentError::Unavailable {
                agent: self.name.clone(),
                reason: format!("Failed to parse response: {}", e),
            })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty());

        match content {
            Some(text) => Ok(text),
            None => Err(AgentError::EmptyResponse {
                agent: self.name.clone(),
            }),
        }
    }
}

#[async_trait]
impl TextAgent for AzureAgent {
    async fn respond(
        &self,
        request: &AgentRequest,
        cancel: &CancellationToken,
    ) -> Result<String, AgentError> {
        if cancel.is_cancelled() {
            return Err(AgentError::Cancelled {
                agent: self.name.clone(),
            });
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(AgentError::Cancelled {
                agent: self.name.clone(),
            }),
            result = self.send_once(request) => result,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ── Azure OpenAI wire format ─────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
