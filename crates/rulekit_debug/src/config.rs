//! Configuration for the debugging tools.

use crate::explain::ExplainConfig;
use crate::trace::{TraceOutput, TracerConfig};

/// Configuration for tracing and explanations.
///
/// Produces a [`TracerConfig`] and an [`ExplainConfig`] from one set of
/// settings.
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Whether tracing is enabled (false = zero overhead).
    pub enabled: bool,

    /// Trace buffer size (number of records to retain).
    pub buffer_size: usize,

    /// Output trace to stderr.
    pub trace_to_stderr: bool,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,

    /// Default depth for rendered explanations (None = unlimited).
    pub explain_depth: Option<usize>,

    /// Whether explanations show satisfied nodes.
    pub show_passing: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            trace_to_stderr: false,
            json_output: false,
            explain_depth: None,
            show_passing: true,
        }
    }
}

impl DebugConfig {
    /// Creates a configuration with tracing disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Creates a configuration for development: tracing to stderr.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            buffer_size: 10000,
            trace_to_stderr: true,
            json_output: false,
            explain_depth: Some(3),
            show_passing: false,
        }
    }

    /// Creates a configuration that records and shows everything.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            enabled: true,
            buffer_size: 100_000,
            trace_to_stderr: true,
            json_output: false,
            explain_depth: None,
            show_passing: true,
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to enable/disable stderr tracing.
    #[must_use]
    pub fn with_trace_to_stderr(mut self, trace: bool) -> Self {
        self.trace_to_stderr = trace;
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Builder method to set explanation depth.
    #[must_use]
    pub fn with_explain_depth(mut self, depth: Option<usize>) -> Self {
        self.explain_depth = depth;
        self
    }

    /// Builder method to show or hide satisfied nodes in explanations.
    #[must_use]
    pub fn with_show_passing(mut self, show: bool) -> Self {
        self.show_passing = show;
        self
    }

    /// Returns the matching tracer configuration.
    #[must_use]
    pub fn tracer_config(&self) -> TracerConfig {
        TracerConfig {
            enabled: self.enabled,
            buffer_size: self.buffer_size,
            output: if self.trace_to_stderr {
                TraceOutput::Stderr
            } else {
                TraceOutput::None
            },
            json_format: self.json_output,
            event_filter: Vec::new(),
        }
    }

    /// Returns the matching explanation configuration.
    #[must_use]
    pub fn explain_config(&self) -> ExplainConfig {
        ExplainConfig {
            max_depth: self.explain_depth,
            show_passing: self.show_passing,
            ..ExplainConfig::default()
        }
    }
}
