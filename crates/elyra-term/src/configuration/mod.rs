//! Process-wide terminal settings.

mod config;

pub use config::*;
