//! Trace event and record types.
//!
//! This module defines the events that can be traced while a rule is evaluated.

use rulekit_engine::NodeKind;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during rule evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// An evaluation has started.
    EvaluationStart {
        /// The evaluation number.
        evaluation: u64,
        /// The rule being evaluated, in s-expression form.
        rule: String,
    },

    /// An evaluation has ended.
    EvaluationEnd {
        /// The evaluation number.
        evaluation: u64,
        /// Whether the object satisfied the rule.
        satisfied: bool,
        /// Number of details on the root.
        detail_count: usize,
    },

    /// Evaluation reached a node.
    NodeEnter {
        /// The node kind.
        kind: NodeKind,
        /// The node label (specification name for leaves).
        label: String,
        /// Distance from the root.
        depth: usize,
    },

    /// A node produced its result.
    NodeExit {
        /// The node kind.
        kind: NodeKind,
        /// The node label (specification name for leaves).
        label: String,
        /// Distance from the root.
        depth: usize,
        /// Whether the node was satisfied.
        satisfied: bool,
        /// The node's details.
        details: Vec<String>,
    },
}

impl TraceEvent {
    /// Returns the event type name, used for filtering.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::EvaluationStart { .. } => "evaluation-start",
            Self::EvaluationEnd { .. } => "evaluation-end",
            Self::NodeEnter { .. } => "node-enter",
            Self::NodeExit { .. } => "node-exit",
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A recorded event with its position in the trace.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Monotonic record ID.
    pub id: u64,
    /// Evaluation this record belongs to.
    pub evaluation: u64,
    /// Nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: u64, evaluation: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            evaluation,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
