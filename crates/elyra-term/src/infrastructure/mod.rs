//! Infrastructure layer providing the gateway implementations.

pub mod clients;
