//! Property-based tests for outcomes and normalization.
