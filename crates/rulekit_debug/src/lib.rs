//! Evaluation tracing and explanation trees for rulekit.
//!
//! This crate provides:
//! - [`Tracer`] - Records node-by-node evaluation events into a ring buffer
//! - [`Explainer`] - Rebuilds an evaluation as an [`Explanation`] tree
//! - [`DebugConfig`] - One place to configure both

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod explain;
pub mod trace;

pub use config::DebugConfig;
pub use explain::{ExplainConfig, Explainer, Explanation, explain};
pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
