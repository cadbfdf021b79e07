//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn outcome(satisfied: bool) -> &'static str {
    if satisfied { "PASS" } else { "FAIL" }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn indent(depth: usize) -> String {
        "  ".repeat(depth + 1)
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut line = String::new();

        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }

        let _ = write!(line, "E{:04} ", record.evaluation);

        if self.show_timestamps {
            let _ = write!(line, "{:>10} ", Self::format_timestamp(record.timestamp_ns));
        }

        match &record.event {
            TraceEvent::EvaluationStart { evaluation, rule } => {
                let _ = write!(line, "=== EVALUATION {evaluation} START {rule} ===");
            }
            TraceEvent::EvaluationEnd {
                evaluation,
                satisfied,
                detail_count,
            } => {
                let _ = write!(
                    line,
                    "=== EVALUATION {evaluation} END ({}, {detail_count} details) ===",
                    outcome(*satisfied)
                );
            }
            TraceEvent::NodeEnter { kind, label, depth } => {
                let _ = write!(line, "{}>> {kind}", Self::indent(*depth));
                if kind.as_str() != label {
                    let _ = write!(line, " {label}");
                }
            }
            TraceEvent::NodeExit {
                kind,
                label,
                depth,
                satisfied,
                details,
            } => {
                let _ = write!(line, "{}<< {kind}", Self::indent(*depth));
                if kind.as_str() != label {
                    let _ = write!(line, " {label}");
                }
                let _ = write!(line, " {}", outcome(*satisfied));
                if !details.is_empty() {
                    let _ = write!(line, " [{}]", details.join("; "));
                }
            }
        }

        line
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as one JSON object per line.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        let mut escaped = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '"' => escaped.push_str("\\\""),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(escaped, "\\u{:04x}", u32::from(c));
                }
                c => escaped.push(c),
            }
        }
        escaped
    }

    fn string(s: &str) -> String {
        format!("\"{}\"", Self::escape_string(s))
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let event_data = match &record.event {
            TraceEvent::EvaluationStart { rule, .. } => {
                format!("\"rule\":{}", Self::string(rule))
            }
            TraceEvent::EvaluationEnd {
                satisfied,
                detail_count,
                ..
            } => format!("\"satisfied\":{satisfied},\"detail_count\":{detail_count}"),
            TraceEvent::NodeEnter { kind, label, depth } => format!(
                "\"kind\":\"{kind}\",\"label\":{},\"depth\":{depth}",
                Self::string(label)
            ),
            TraceEvent::NodeExit {
                kind,
                label,
                depth,
                satisfied,
                details,
            } => {
                let details_json: Vec<_> = details.iter().map(|d| Self::string(d)).collect();
                format!(
                    "\"kind\":\"{kind}\",\"label\":{},\"depth\":{depth},\"satisfied\":{satisfied},\"details\":[{}]",
                    Self::string(label),
                    details_json.join(",")
                )
            }
        };

        format!(
            "{{\"id\":{},\"evaluation\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id,
            record.evaluation,
            record.timestamp_ns,
            record.event_type(),
            event_data
        )
    }
}
