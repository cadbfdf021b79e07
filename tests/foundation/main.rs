//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Details and the error types.

mod details;
