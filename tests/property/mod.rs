//! Property-based tests for tree operations

mod path_ops;
