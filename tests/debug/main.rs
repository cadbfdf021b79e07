//! Integration tests for Layer 2: Debug
//!
//! Tests for tracing and explanations over real rule trees.
