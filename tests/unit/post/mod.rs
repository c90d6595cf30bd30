//! Tests for HSP and target culling

pub mod culling;
pub mod streaming;
