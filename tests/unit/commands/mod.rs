//! Tests for command-line arguments

pub mod args;
