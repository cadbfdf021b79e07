//! Specifications, rule combinators, and evaluation for rulekit.
//!
//! This crate provides:
//! - [`Specification`] - A single predicate that explains its own failure
//! - [`Rule`] - Immutable AND/OR/NOT trees over specifications
//! - [`Evaluation`] - The outcome of checking one object against a rule
//! - [`EvaluationObserver`] - Hooks for watching an evaluation node by node
//!
//! ```
//! use rulekit_engine::{Rule, ensure};
//!
//! let positive = Rule::create(|n: &i32| ensure(*n > 0, "must be positive"));
//! let even = Rule::create(|n: &i32| ensure(n % 2 == 0, "must be even"));
//! let rule = positive.and(&even);
//!
//! let evaluation = rule.evaluate(&-3);
//! assert!(!evaluation.is_satisfied());
//! assert_eq!(
//!     evaluation.details().to_vec(),
//!     vec!["must be positive".to_string(), "must be even".to_string()],
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod evaluation;
pub mod observer;
pub mod rule;
pub mod specification;

pub use evaluation::Evaluation;
pub use observer::{EvaluationObserver, NoopObserver};
pub use rule::{NodeKind, Rule, RuleKind};
pub use rulekit_foundation::{
    Details, Error, ErrorContext, ErrorKind, Result, ValidationFailure,
};
pub use specification::{Named, Specification, Verdict, ensure, named};
