//! Integration tests for the fileguard baseline engine

mod config_integration;
mod hasher_verification;
mod test_utils;
