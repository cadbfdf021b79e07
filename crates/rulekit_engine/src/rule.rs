//! Rule trees built from specifications.
//!
//! A [`Rule`] is an immutable node of one of four kinds:
//! - `Leaf` - delegates to a single [`Specification`]
//! - `And` / `Or` - combine two sub-rules
//! - `Not` - inverts one sub-rule
//!
//! Nodes are reference counted, so a rule can be reused in any number of
//! larger trees and cloning one is O(1). Combinators never modify the rule
//! they are called on.
//!
//! # Evaluation
//!
//! AND and OR always evaluate both operands, left first, so that every
//! failing leaf contributes its reason. Details from unsatisfied operands
//! are merged without duplicates. NOT passes its operand's details through
//! when the operand failed, and reports none when the operand passed.

use std::fmt;
use std::sync::Arc;

use rulekit_foundation::{Details, Error, ErrorContext, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::evaluation::Evaluation;
use crate::observer::{EvaluationObserver, NoopObserver};
use crate::specification::Specification;

// =============================================================================
// Node Kind
// =============================================================================

/// The kind of a rule node, without its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeKind {
    /// Wraps a specification.
    Leaf,
    /// Satisfied when both operands are.
    And,
    /// Satisfied when either operand is.
    Or,
    /// Satisfied when its operand is not.
    Not,
}

impl NodeKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Rule
// =============================================================================

/// A node with its operands.
pub enum RuleKind<T: ?Sized> {
    /// A single specification.
    Leaf(Arc<dyn Specification<T>>),
    /// Conjunction of two rules.
    And(Rule<T>, Rule<T>),
    /// Disjunction of two rules.
    Or(Rule<T>, Rule<T>),
    /// Negation of a rule.
    Not(Rule<T>),
}

/// An immutable, shareable validation rule over `T`.
pub struct Rule<T: ?Sized> {
    node: Arc<RuleKind<T>>,
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T: ?Sized> Rule<T> {
    fn from_kind(kind: RuleKind<T>) -> Self {
        Self {
            node: Arc::new(kind),
        }
    }

    /// Wraps a specification as a leaf rule.
    #[must_use]
    pub fn create<S>(spec: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        Self::from_shared(Arc::new(spec))
    }

    /// Wraps an already shared specification as a leaf rule.
    #[must_use]
    pub fn from_shared(spec: Arc<dyn Specification<T>>) -> Self {
        Self::from_kind(RuleKind::Leaf(spec))
    }

    /// Returns a rule satisfied when both `self` and `other` are.
    #[must_use]
    pub fn and(&self, other: &Rule<T>) -> Self {
        Self::from_kind(RuleKind::And(self.clone(), other.clone()))
    }

    /// Like [`and`](Self::and), wrapping `spec` as a leaf first.
    #[must_use]
    pub fn and_spec<S>(&self, spec: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        self.and(&Self::create(spec))
    }

    /// Returns a rule satisfied when `self` or `other` is.
    #[must_use]
    pub fn or(&self, other: &Rule<T>) -> Self {
        Self::from_kind(RuleKind::Or(self.clone(), other.clone()))
    }

    /// Like [`or`](Self::or), wrapping `spec` as a leaf first.
    #[must_use]
    pub fn or_spec<S>(&self, spec: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        self.or(&Self::create(spec))
    }

    /// Returns a rule satisfied when `self` is not.
    ///
    /// Negating a NOT returns the rule it wraps (the same node, see
    /// [`ptr_eq`](Self::ptr_eq)) instead of stacking a second negation.
    #[must_use]
    pub fn not(&self) -> Self {
        match self.kind() {
            RuleKind::Not(inner) => inner.clone(),
            _ => Self::from_kind(RuleKind::Not(self.clone())),
        }
    }

    /// Chains `rules` with AND, left to right.
    ///
    /// # Errors
    /// Returns [`ErrorKind::EmptyComposition`](rulekit_foundation::ErrorKind::EmptyComposition)
    /// if `rules` is empty.
    pub fn all<I>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        Self::join_all(rules, NodeKind::And, "Rule::all", Self::and)
    }

    /// Chains `rules` with OR, left to right.
    ///
    /// # Errors
    /// Returns [`ErrorKind::EmptyComposition`](rulekit_foundation::ErrorKind::EmptyComposition)
    /// if `rules` is empty.
    pub fn any<I>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        Self::join_all(rules, NodeKind::Or, "Rule::any", Self::or)
    }

    fn join_all<I>(
        rules: I,
        kind: NodeKind,
        caller: &'static str,
        join: fn(&Self, &Self) -> Self,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        let mut rules = rules.into_iter();
        let first = rules.next().ok_or_else(|| {
            Error::empty_composition(kind.as_str())
                .with_context(ErrorContext::new().with_frame(caller))
        })?;
        Ok(rules.fold(first, |acc, rule| join(&acc, &rule)))
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Returns this node with its operands.
    #[must_use]
    pub fn kind(&self) -> &RuleKind<T> {
        &self.node
    }

    /// Returns the kind of this node.
    #[must_use]
    pub fn node_kind(&self) -> NodeKind {
        match self.kind() {
            RuleKind::Leaf(_) => NodeKind::Leaf,
            RuleKind::And(..) => NodeKind::And,
            RuleKind::Or(..) => NodeKind::Or,
            RuleKind::Not(_) => NodeKind::Not,
        }
    }

    /// Specification name for leaves, the kind name otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        match self.kind() {
            RuleKind::Leaf(spec) => spec.name(),
            _ => self.node_kind().as_str(),
        }
    }

    /// Returns true if both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.node, &b.node)
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self.kind() {
            RuleKind::Leaf(_) => 1,
            RuleKind::And(left, right) | RuleKind::Or(left, right) => {
                1 + left.depth().max(right.depth())
            }
            RuleKind::Not(inner) => 1 + inner.depth(),
        }
    }

    /// Number of leaves, counting shared leaves once per occurrence.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self.kind() {
            RuleKind::Leaf(_) => 1,
            RuleKind::And(left, right) | RuleKind::Or(left, right) => {
                left.leaf_count() + right.leaf_count()
            }
            RuleKind::Not(inner) => inner.leaf_count(),
        }
    }

    // -------------------------------------------------------------------------
    // Evaluation
    // -------------------------------------------------------------------------

    /// Evaluates the rule against `object`.
    #[must_use]
    pub fn evaluate(&self, object: &T) -> Evaluation {
        self.evaluate_observed(object, &mut NoopObserver)
    }

    /// Returns true if `object` satisfies the rule.
    ///
    /// Use [`evaluate`](Self::evaluate) to also get the failure details.
    #[must_use]
    pub fn is_satisfied_by(&self, object: &T) -> bool {
        self.evaluate(object).is_satisfied()
    }

    /// Evaluates the rule, reporting each node to `observer`.
    pub fn evaluate_observed<O>(&self, object: &T, observer: &mut O) -> Evaluation
    where
        O: EvaluationObserver<T> + ?Sized,
    {
        self.evaluate_at(object, observer, 0)
    }

    fn evaluate_at<O>(&self, object: &T, observer: &mut O, depth: usize) -> Evaluation
    where
        O: EvaluationObserver<T> + ?Sized,
    {
        observer.enter(self, depth);

        let evaluation = match self.kind() {
            RuleKind::Leaf(spec) => match spec.verify(object) {
                Ok(()) => Evaluation::passed(),
                Err(failure) => Evaluation::failed(failure.into_message()),
            },
            RuleKind::And(left, right) => {
                let left = left.evaluate_at(object, observer, depth + 1);
                let right = right.evaluate_at(object, observer, depth + 1);
                let satisfied = left.is_satisfied() && right.is_satisfied();
                Evaluation::from_operands(satisfied, &left, &right)
            }
            RuleKind::Or(left, right) => {
                let left = left.evaluate_at(object, observer, depth + 1);
                let right = right.evaluate_at(object, observer, depth + 1);
                let satisfied = left.is_satisfied() || right.is_satisfied();
                Evaluation::from_operands(satisfied, &left, &right)
            }
            RuleKind::Not(inner) => {
                let inner = inner.evaluate_at(object, observer, depth + 1);
                if inner.is_satisfied() {
                    Evaluation::new(false, Details::new())
                } else {
                    Evaluation::new(true, inner.into_details())
                }
            }
        };

        observer.leave(self, depth, &evaluation);
        evaluation
    }
}

/// S-expression form, e.g. `(and NameFormat (not AgeRange))`.
impl<T: ?Sized> fmt::Display for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            RuleKind::Leaf(spec) => f.write_str(spec.name()),
            RuleKind::And(left, right) => write!(f, "(and {left} {right})"),
            RuleKind::Or(left, right) => write!(f, "(or {left} {right})"),
            RuleKind::Not(inner) => write!(f, "(not {inner})"),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({self})")
    }
}

// =============================================================================
// Tests
// =============================================================================
