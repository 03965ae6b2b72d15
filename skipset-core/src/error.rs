//! Error types for the skip set crates
//!
//! This module defines the error type shared by `skipset-core` and
//! `skipset`. The concurrent algorithm itself has no recoverable error
//! conditions (see `skipset`'s crate docs); the only place a `Result`
//! appears is configuration validation.

use thiserror::Error;

/// The error type for skip set configuration and construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// `max_level` must be at least 1.
    #[error("max_level must be at least 1, got {0}")]
    InvalidMaxLevel(usize),

    /// `promotion_probability` must lie in the open interval `(0.0, 1.0)`.
    #[error("promotion_probability must be in (0.0, 1.0), got {0}")]
    InvalidPromotionProbability(f64),
}

/// A specialized `Result` type for skip set operations.
pub type Result<T> = std::result::Result<T, Error>;
