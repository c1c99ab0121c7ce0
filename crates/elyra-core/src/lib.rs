//! Core library behind the ElyraOS terminal and its market-data backend.
//!
//! The crate owns everything that is not tied to a particular surface:
//!
//! - **Formatting**: currency magnitudes, live prices and signed percentages
//! - **Market data**: the DexScreener client and the risk scoring applied to
//!   a token snapshot
//! - **Language model access**: a provider-agnostic `LLM` trait with an
//!   OpenAI-compatible implementation
//! - **Terminal service**: reshapes upstream data into the payloads served
//!   by the HTTP backend and consumed by the terminal
//! - **Chat responder**: the canned keyword replies of the chat screen
//! - **Configuration**: YAML configuration with environment resolution

pub mod chat;
pub mod config;
pub mod core_types;
pub mod errors;
pub mod format;
pub mod llm;
pub mod market;
pub mod service;

pub use config::{ConfigLoader, ElyraConfig};
pub use errors::ElyraError;
pub use llm::LLM;
pub use market::{MarketData, RiskAssessment, RiskLevel, TokenSnapshot};
pub use service::TerminalService;
