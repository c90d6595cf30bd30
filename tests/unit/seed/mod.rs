//! Tests for seed enumeration
