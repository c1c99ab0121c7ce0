//! Line-oriented command console for ElyraOS.
//!
//! The terminal parses a small fixed command grammar, dispatches commands to
//! a market-data gateway and renders ASCII panels into an append-only session
//! transcript. The gateway either talks HTTP to `elyra-server` or calls
//! `elyra-core` in-process.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;

pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Command, GatewayError, Line, LineKind, ParsedCommand, TerminalGateway,
};
pub use domain::services::{Interpreter, SessionBuffer, Submission};
