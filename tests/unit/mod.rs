//! Integration tests for seedcull
//!
//! Tests are organized by module:
//! - `sequence/` - packed collection and partitioning
//! - `seed/` - seed enumeration strategies
//! - `post/` - HSP and target culling, streaming culling
//! - `commands/` - command-line argument parsing

pub mod commands;
pub mod helpers;
pub mod post;
pub mod seed;
pub mod sequence;
