//! rulekit - Composable validation rules
//!
//! This crate re-exports all layers of the rulekit system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: rulekit_debug      - Evaluation tracing, explanation trees
//! Layer 1: rulekit_engine     - Specifications, rules, combinators, evaluation
//! Layer 0: rulekit_foundation - Core types (Details, ValidationFailure, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use rulekit::engine::{Rule, ensure};
//!
//! let adult = Rule::create(|age: &u32| ensure(*age >= 18, "must be an adult"));
//! let senior = Rule::create(|age: &u32| ensure(*age >= 65, "must be a senior"));
//! let working_age = adult.and(&senior.not());
//!
//! assert!(working_age.is_satisfied_by(&30));
//!
//! let evaluation = working_age.evaluate(&12);
//! assert!(!evaluation.is_satisfied());
//! assert_eq!(evaluation.details().to_vec(), vec!["must be an adult".to_string()]);
//! ```

pub use rulekit_debug as debug;
pub use rulekit_engine as engine;
pub use rulekit_foundation as foundation;
