//! Tracing system for rule evaluation.
//!
//! Records every node a rule evaluation visits, with zero overhead when
//! disabled. Supports both human-readable and JSON output formats.
//!
//! # Example
//!
//! ```
//! use rulekit_debug::{Tracer, TracerConfig};
//! use rulekit_engine::{Rule, ensure};
//!
//! let positive = Rule::create(|n: &i32| ensure(*n > 0, "must be positive"));
//! let mut tracer = Tracer::new(TracerConfig::new().enabled());
//!
//! let evaluation = tracer.trace(&positive.not(), &3);
//! assert!(!evaluation.is_satisfied());
//! assert_eq!(tracer.buffer().len(), 6);
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use rulekit_engine::{Evaluation, EvaluationObserver, Rule};

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records rule evaluations event by event.
///
/// Designed for zero overhead when disabled: [`trace`](Self::trace) falls
/// back to a plain evaluation and `record` returns immediately.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_evaluation: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_evaluation: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new().with_timestamps(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the number of the most recent traced evaluation.
    #[must_use]
    pub fn current_evaluation(&self) -> u64 {
        self.current_evaluation
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Evaluates `rule` against `object`, recording every node visited.
    pub fn trace<T: ?Sized>(&mut self, rule: &Rule<T>, object: &T) -> Evaluation {
        if !self.config.enabled {
            return rule.evaluate(object);
        }

        self.current_evaluation += 1;
        let evaluation_id = self.current_evaluation;
        self.record(TraceEvent::EvaluationStart {
            evaluation: evaluation_id,
            rule: rule.to_string(),
        });

        let evaluation = rule.evaluate_observed(object, self);

        self.record(TraceEvent::EvaluationEnd {
            evaluation: evaluation_id,
            satisfied: evaluation.is_satisfied(),
            detail_count: evaluation.details().len(),
        });
        evaluation
    }

    /// Records a trace event.
    ///
    /// This is the main entry point for recording events. It's designed
    /// to be as fast as possible when tracing is disabled.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer
            .push(self.current_evaluation, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl<T: ?Sized> EvaluationObserver<T> for Tracer {
    fn enter(&mut self, rule: &Rule<T>, depth: usize) {
        if !self.config.enabled {
            return;
        }
        self.record_internal(TraceEvent::NodeEnter {
            kind: rule.node_kind(),
            label: rule.label().to_string(),
            depth,
        });
    }

    fn leave(&mut self, rule: &Rule<T>, depth: usize, evaluation: &Evaluation) {
        if !self.config.enabled {
            return;
        }
        self.record_internal(TraceEvent::NodeExit {
            kind: rule.node_kind(),
            label: rule.label().to_string(),
            depth,
            satisfied: evaluation.is_satisfied(),
            details: evaluation.details().to_vec(),
        });
    }
}

// =============================================================================
// Tests
// =============================================================================
