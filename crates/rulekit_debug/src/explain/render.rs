//! Text rendering for explanation trees.

use std::fmt::Write;

use rulekit_engine::NodeKind;

use super::Explanation;

/// Controls how an [`Explanation`] is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainConfig {
    /// Deepest level rendered; deeper nodes collapse to `...` (None = all).
    pub max_depth: Option<usize>,
    /// Whether satisfied nodes below the root are shown.
    pub show_passing: bool,
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_passing: true,
            indent: 2,
        }
    }
}

impl ExplainConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to limit rendering depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builder method to show or hide satisfied nodes.
    #[must_use]
    pub fn with_show_passing(mut self, show: bool) -> Self {
        self.show_passing = show;
        self
    }

    /// Builder method to set indent width.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

pub(super) fn render(root: &Explanation, config: &ExplainConfig) -> String {
    let mut out = String::new();
    render_node(&mut out, root, config, 0);
    out
}

fn render_node(out: &mut String, node: &Explanation, config: &ExplainConfig, depth: usize) {
    let pad = " ".repeat(depth * config.indent);
    let status = if node.satisfied { "PASS" } else { "FAIL" };

    let _ = write!(out, "{pad}[{status}] {}", node.kind);
    if node.kind == NodeKind::Leaf {
        let _ = write!(out, " {}", node.label);
    }
    if !node.details.is_empty() {
        let _ = write!(out, ": {}", node.details);
    }
    out.push('\n');

    if node.children.is_empty() {
        return;
    }
    if config.max_depth.is_some_and(|max| depth >= max) {
        let pad = " ".repeat((depth + 1) * config.indent);
        let _ = writeln!(out, "{pad}...");
        return;
    }
    for child in &node.children {
        if child.satisfied && !config.show_passing {
            continue;
        }
        render_node(out, child, config, depth + 1);
    }
}
