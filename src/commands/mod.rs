//! Subcommands of the `seedcull` binary

pub mod common;
pub mod cull;
pub mod seeds;
