//! Detail collections and error types for rulekit.
//!
//! This crate provides:
//! - [`Details`] - Ordered, duplicate-free failure explanations
//! - [`ValidationFailure`] - The single-message failure a specification reports
//! - [`Error`] - Usage errors raised while composing rules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod details;
pub mod error;

pub use details::Details;
pub use error::{Error, ErrorContext, ErrorKind, ValidationFailure};

/// Result type for rulekit operations.
pub type Result<T> = std::result::Result<T, Error>;
