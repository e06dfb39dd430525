//! Logging helpers shared across the application.

pub mod pii;
