//! Configuration for the ElyraOS backend and terminal.
//!
//! Configuration comes from an optional YAML file. Secrets are resolved from
//! environment variables (optionally seeded from `.env` files) so that the
//! file itself can be committed.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests;
