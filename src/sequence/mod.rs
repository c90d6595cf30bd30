//! Sequence storage and coordinates
//!
//! - `alphabet` - amino acid letter encoding
//! - `collection` - packed, delimiter separated sequence collection
//! - `interval` - half-open coordinate ranges
//! - `translated` - reading frames and frame to source coordinate mapping

pub mod alphabet;
pub mod collection;
pub mod interval;
pub mod translated;

pub use collection::SequenceCollection;
pub use interval::Interval;
pub use translated::{Frame, Strand, TranslatedPosition, TranslatedSequence};
