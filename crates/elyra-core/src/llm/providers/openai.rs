use crate::config::LlmConfig;
use crate::core_types::{LLMResponse, Message, Role, Usage};
use crate::errors::ElyraError;
use crate::llm::LLM;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    max_tokens: Option<u32>,
}

impl OpenAIClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base: "https://api.openai.com/v1".to_string(),
            model,
            max_tokens: None,
        }
    }

    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Rebuilds the HTTP client with a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });
        self
    }

    fn build_request_body(&self, messages: &[Message]) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.format_messages(messages),
        });

        if let Some(max_tokens) = self.max_tokens {
            body["max_completion_tokens"] = max_tokens.into();
        }

        body
    }

    fn format_messages(&self, messages: &[Message]) -> Vec<Value> {
        messages
            .iter()
            .map(|msg| {
                json!({
                    "role": self.format_role(&msg.role),
                    "content": msg.content
                })
            })
            .collect()
    }

    fn format_role(&self, role: &Role) -> &'static str {
        match role {
            Role::System => "system",
            Role::User => "user",
        }
    }

    fn parse_response(&self, response: Value) -> Result<LLMResponse, ElyraError> {
        let choices = response["choices"]
            .as_array()
            .ok_or_else(|| ElyraError::ParsingError("No choices in response".to_string()))?;

        // An empty choice list is a valid completion with no content; the
        // caller substitutes its own fallback text.
        let Some(choice) = choices.first() else {
            return Ok(LLMResponse::default());
        };

        let content = choice["message"]["content"].as_str().map(|s| s.to_string());
        let finish_reason = choice["finish_reason"].as_str().map(|s| s.to_string());
        let usage = serde_json::from_value::<Usage>(response["usage"].clone()).ok();

        Ok(LLMResponse {
            content,
            finish_reason,
            usage,
        })
    }
}

#[async_trait]
impl LLM for OpenAIClient {
    async fn generate(&self, messages: Vec<Message>) -> Result<LLMResponse, ElyraError> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = self.build_request_body(&messages);

        log::debug!("OpenAI API request to {} with {} messages", url, messages.len());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ElyraError::LLMError(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ElyraError::LLMError(format!("Failed to read response: {}", e)))?;

        log::debug!("OpenAI API response ({}): {}", status, response_text);

        if !status.is_success() {
            return Err(ElyraError::LLMError(format!(
                "API request failed with status {}: {}",
                status, response_text
            )));
        }

        let response_json: Value = serde_json::from_str(&response_text)
            .map_err(|e| ElyraError::ParsingError(format!("Invalid JSON response: {}", e)))?;

        self.parse_response(response_json)
    }
}

/// Create an OpenAI-compatible LLM client from configuration
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LLM>, ElyraError> {
    let api_key = config.auth.api_key.clone().ok_or_else(|| {
        ElyraError::ConfigError(
            "No API key found for the LLM provider. Set api_key or api_key_env".to_string(),
        )
    })?;

    let mut client = OpenAIClient::new(api_key, config.model.clone())
        .with_max_tokens(config.max_tokens)
        .with_timeout(config.timeout());

    if let Some(api_base) = &config.api_base {
        client = client.with_api_base(api_base.clone());
    }

    Ok(Arc::new(client))
}
