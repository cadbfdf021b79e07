//! The result of evaluating a rule against one object.

use rulekit_foundation::Details;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether an object satisfied a rule, and the reasons collected on the way.
///
/// Each evaluation owns its details, so a rule can be evaluated again (or
/// from another thread) without disturbing earlier results.
///
/// A satisfied evaluation is not guaranteed to have empty details: an OR
/// keeps the reasons of a failing branch even when the other branch passed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    satisfied: bool,
    details: Details<String>,
}

impl Evaluation {
    /// Creates an evaluation from its parts.
    #[must_use]
    pub fn new(satisfied: bool, details: Details<String>) -> Self {
        Self { satisfied, details }
    }

    /// A satisfied evaluation with no details.
    #[must_use]
    pub fn passed() -> Self {
        Self::new(true, Details::new())
    }

    /// An unsatisfied evaluation explained by a single message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        let mut details = Details::new();
        details.add(message.into());
        Self::new(false, details)
    }

    /// Combines the evaluations of two operands.
    ///
    /// Details of each unsatisfied operand are merged, left first.
    pub(crate) fn from_operands(satisfied: bool, left: &Self, right: &Self) -> Self {
        let mut details = Details::new();
        for operand in [left, right] {
            if !operand.satisfied {
                details.merge(&operand.details);
            }
        }
        Self::new(satisfied, details)
    }

    /// Returns true if the object satisfied the rule.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    /// Returns the collected failure reasons, in first-seen order.
    #[must_use]
    pub fn details(&self) -> &Details<String> {
        &self.details
    }

    /// Consumes the evaluation, returning its details.
    #[must_use]
    pub fn into_details(self) -> Details<String> {
        self.details
    }
}
