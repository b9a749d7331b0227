//! Common utilities and abstractions for services

/// Shared type aliases
pub mod types;
