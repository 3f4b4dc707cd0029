//! Error types for tokencost
//!
//! This module defines the error types used throughout the tokencost crates.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! Pricing itself has exactly one failure mode, [`TokencostError::UnknownModel`].
//! The remaining variants only surface at the command-line boundary.
//!
//! # Example
//!
//! ```
//! use tokencost_core::error::{TokencostError, Result};
//! use tokencost_core::types::ModelName;
//!
//! fn lookup(name: &str) -> Result<()> {
//!     Err(TokencostError::UnknownModel(ModelName::new(name)))
//! }
//!
//! assert_eq!(
//!     lookup("unknown-model-xyz").unwrap_err().to_string(),
//!     "Unknown model: unknown-model-xyz"
//! );
//! ```

use thiserror::Error;

use crate::types::ModelName;

/// Main error type for tokencost operations
#[derive(Error, Debug)]
pub enum TokencostError {
    /// Model name is not in any catalog, or resolved to a name with no price entry
    #[error("Unknown model: {0}")]
    UnknownModel(ModelName),

    /// Invalid call date
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in tokencost
///
/// # Example
///
/// ```
/// use tokencost_core::Result;
///
/// fn total_tokens() -> Result<u64> {
///     Ok(1_000_000)
/// }
/// ```
pub type Result<T> = std::result::Result<T, TokencostError>;
