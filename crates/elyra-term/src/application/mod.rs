//! Application layer: command-line parsing, the interactive loop, the boot
//! sequence, the chat screen and the live monitor.

pub mod boot;
pub mod chat;
pub mod cli;
pub mod monitor;
pub mod ui;
