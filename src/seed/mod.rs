//! Seed enumeration
//!
//! - `shape` - spaced seed patterns
//! - `reduction` - reduced amino acid alphabets
//! - `iterators` - per-offset key extraction (generic, contiguous, hashed)
//! - `sink` - seed consumers, filters and positions
//! - `enumerate` - strategy selection and the parallel engine

pub mod enumerate;
pub mod iterators;
pub mod reduction;
pub mod shape;
pub mod sink;

pub use enumerate::{ContiguousSeed, HashedSeed, SeedEngine, SeedStrategy};
pub use reduction::Reduction;
pub use shape::{Shape, ShapeTable};
pub use sink::{NoFilter, Position, SeedCollector, SeedCounter, SeedFilter, SeedSink, SinkFlow};
