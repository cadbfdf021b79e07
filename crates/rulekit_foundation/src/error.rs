//! Error types for rulekit.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Two unrelated things live here. [`ValidationFailure`] is what a
//! specification returns when an object does not satisfy it; it is an
//! expected outcome and never leaves rule evaluation. [`Error`] covers
//! usage mistakes made while composing rules.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed error usable as the cause of a [`ValidationFailure`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// =============================================================================
// Validation Failure
// =============================================================================

/// A specification's explanation of why an object was rejected.
///
/// Carries exactly one message, which becomes a detail entry on the rule
/// that wrapped the specification.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ValidationFailure {
    /// Creates a failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a failure with a message and an underlying cause.
    #[must_use]
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates a failure whose message is the cause's display text.
    #[must_use]
    pub fn from_source(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<String> for ValidationFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ValidationFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

// =============================================================================
// Usage Errors
// =============================================================================

/// The main error type for rule composition.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a combinator asked to join zero rules.
    #[must_use]
    pub fn empty_composition(combinator: &'static str) -> Self {
        Self::new(ErrorKind::EmptyComposition { combinator })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A combinator was given no operands.
    #[error("cannot build {combinator} from an empty set of rules")]
    EmptyComposition {
        /// The combinator being built.
        combinator: &'static str,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Calls that were building the rule, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.stack {
            writeln!(f, "  in {frame}")?;
        }
        Ok(())
    }
}
