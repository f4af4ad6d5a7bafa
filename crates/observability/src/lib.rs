//! Observability wiring for stockpulse services.

pub mod tracing;

pub use crate::tracing::init;
