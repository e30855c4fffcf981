//! Outbound service clients

pub mod numbers_client;

pub use numbers_client::{FactError, FunFactClient};
