//! Property-based tests for the fileguard baseline engine

mod determinism;
mod diffing;
