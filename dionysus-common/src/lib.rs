//! Common types and utilities shared across Dionysus crates.
//!
//! This crate defines the shared error type and observability helpers used
//! throughout the Dionysus workspace. It is intentionally lightweight so that
//! every crate can depend on it without pulling in the HTTP or chat stacks.
//!
//! # Overview
//!
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`DionysusError`] and [`Result`]: Shared error handling
//!
//! # Examples
//!
//! ```rust
//! use dionysus_common::DionysusError;
//!
//! let err = DionysusError::NotFound("channel `nobody`".into());
//! assert!(err.is_not_found());
//! assert_eq!(err.to_string(), "Not found: channel `nobody`");
//! ```

pub mod observability;

/// Error types used across the Dionysus system.
#[derive(thiserror::Error, Debug)]
pub enum DionysusError {
    /// A channel, video or page the user asked for does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An upstream service answered, but not successfully.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Configuration was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DionysusError {
    /// `NotFound` is a user-facing outcome, not a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Convenient alias for results that use [`DionysusError`].
pub type Result<T> = std::result::Result<T, DionysusError>;
