//! Tests for the sequence module

pub mod partition;
