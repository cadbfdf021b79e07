//! Explanation trees for rule evaluations.
//!
//! Answers "why did this object pass or fail?" by rebuilding the evaluated
//! rule tree with each node's result and details attached.
//!
//! ```
//! use rulekit_debug::explain;
//! use rulekit_engine::{Rule, ensure, named};
//!
//! let positive = Rule::create(named("positive", |n: &i32| ensure(*n > 0, "must be positive")));
//! let even = Rule::create(named("even", |n: &i32| ensure(n % 2 == 0, "must be even")));
//!
//! let explanation = explain(&positive.and(&even), &-3);
//! assert!(!explanation.satisfied);
//! assert_eq!(explanation.failing_leaves().len(), 2);
//! ```

mod render;

use rulekit_engine::{Evaluation, EvaluationObserver, NodeKind, Rule};
use rulekit_foundation::Details;

pub use render::ExplainConfig;

// =============================================================================
// Explanation
// =============================================================================

/// One evaluated node and its evaluated children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    /// The node kind.
    pub kind: NodeKind,
    /// Specification name for leaves, the kind name otherwise.
    pub label: String,
    /// Whether the node was satisfied.
    pub satisfied: bool,
    /// The node's details.
    pub details: Details<String>,
    /// Evaluated operands, left to right.
    pub children: Vec<Explanation>,
}

impl Explanation {
    /// Returns the leaves that were not satisfied, left to right.
    #[must_use]
    pub fn failing_leaves(&self) -> Vec<&Explanation> {
        let mut out = Vec::new();
        self.collect_failing_leaves(&mut out);
        out
    }

    fn collect_failing_leaves<'a>(&'a self, out: &mut Vec<&'a Explanation>) {
        if self.kind == NodeKind::Leaf {
            if !self.satisfied {
                out.push(self);
            }
            return;
        }
        for child in &self.children {
            child.collect_failing_leaves(out);
        }
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Returns the evaluation this node produced.
    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        Evaluation::new(self.satisfied, self.details.clone())
    }

    /// Renders the tree as indented text.
    #[must_use]
    pub fn render(&self, config: &ExplainConfig) -> String {
        render::render(self, config)
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&ExplainConfig::default()))
    }
}

// =============================================================================
// Explainer
// =============================================================================

struct Frame {
    kind: NodeKind,
    label: String,
    children: Vec<Explanation>,
}

/// Observer that builds an [`Explanation`] while a rule is evaluated.
#[derive(Default)]
pub struct Explainer {
    stack: Vec<Frame>,
    root: Option<Explanation>,
}

impl Explainer {
    /// Creates an explainer with no recorded evaluation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the explanation of the last completed evaluation.
    #[must_use]
    pub fn finish(self) -> Option<Explanation> {
        self.root
    }
}

impl<T: ?Sized> EvaluationObserver<T> for Explainer {
    fn enter(&mut self, rule: &Rule<T>, _depth: usize) {
        self.stack.push(Frame {
            kind: rule.node_kind(),
            label: rule.label().to_string(),
            children: Vec::new(),
        });
    }

    fn leave(&mut self, _rule: &Rule<T>, _depth: usize, evaluation: &Evaluation) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let node = Explanation {
            kind: frame.kind,
            label: frame.label,
            satisfied: evaluation.is_satisfied(),
            details: evaluation.details().clone(),
            children: frame.children,
        };
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root = Some(node),
        }
    }
}

/// Evaluates `rule` against `object` and returns the explanation tree.
#[must_use]
pub fn explain<T: ?Sized>(rule: &Rule<T>, object: &T) -> Explanation {
    let mut explainer = Explainer::new();
    let evaluation = rule.evaluate_observed(object, &mut explainer);
    explainer.finish().unwrap_or_else(|| Explanation {
        kind: rule.node_kind(),
        label: rule.label().to_string(),
        satisfied: evaluation.is_satisfied(),
        details: evaluation.into_details(),
        children: Vec::new(),
    })
}
