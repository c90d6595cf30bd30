pub mod error;
pub mod sequence;

pub mod align;
pub mod config;
pub mod post;
pub mod report;
pub mod seed;

pub mod commands;

pub use error::{Result, SeedError, TableError};
