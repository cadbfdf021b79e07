//! Hooks for watching an evaluation as it walks the rule tree.
//!
//! Evaluation calls [`EvaluationObserver::enter`] before a node evaluates its
//! children and [`EvaluationObserver::leave`] once the node's result is
//! known, so leave calls arrive in post-order. The plain
//! [`Rule::evaluate`](crate::Rule::evaluate) path uses [`NoopObserver`],
//! which compiles away.

use crate::evaluation::Evaluation;
use crate::rule::Rule;

/// Receives node-by-node notifications during evaluation.
pub trait EvaluationObserver<T: ?Sized> {
    /// Called when evaluation reaches `rule`. The root has depth 0.
    fn enter(&mut self, _rule: &Rule<T>, _depth: usize) {}

    /// Called when `rule` has produced its evaluation.
    fn leave(&mut self, _rule: &Rule<T>, _depth: usize, _evaluation: &Evaluation) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<T: ?Sized> EvaluationObserver<T> for NoopObserver {}
