//! Core domain logic for the terminal.
//!
//! Parsing, dispatch and rendering live here, independent of how lines reach
//! the screen or where market data comes from.

pub mod models;
pub mod services;
