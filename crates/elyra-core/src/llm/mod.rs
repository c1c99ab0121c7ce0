//! Language model provider abstraction.
//!
//! The terminal's `ask` command only ever sends a system prompt and one user
//! question, so the trait stays a single `generate` call over a message list.

pub use crate::core_types::{LLMResponse, Message, Role};
use crate::errors::ElyraError;
use async_trait::async_trait;

pub mod providers;

pub use providers::openai::OpenAIClient;

#[async_trait]
pub trait LLM: Send + Sync {
    async fn generate(&self, messages: Vec<Message>) -> Result<LLMResponse, ElyraError>;
}
