//! Alignment results consumed by the culling pipeline
//!
//! - `hsp` - a single local alignment and its best-first order
//! - `target` - all HSPs of a query against one target
//! - `reference` - target title/length lookup

pub mod hsp;
pub mod reference;
pub mod target;

pub use hsp::{score_compare_hsps, Hsp};
pub use reference::{ReferenceStore, ReferenceTable};
pub use target::{compare_targets, Match};
