//! HTTP API handlers for numclass

pub mod classify;
pub mod health;

pub use classify::classify_number;
pub use health::health_routes;
