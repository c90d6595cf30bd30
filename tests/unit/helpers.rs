//! Test fixtures and proptest strategies shared by the test modules

use proptest::prelude::*;

use seedcull::align::{Hsp, Match, ReferenceTable};
use seedcull::config::SeedOptions;
use seedcull::seed::{NoFilter, Position, Reduction, SeedCollector, SeedEngine, SeedStrategy, ShapeTable};
use seedcull::sequence::alphabet::encode_seq;
use seedcull::sequence::{Interval, SequenceCollection};
use seedcull::SeedError;

pub const STANDARD: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

pub fn protein_collection(seqs: &[&str]) -> SequenceCollection {
    SequenceCollection::from_sequences(seqs.iter().map(|s| encode_seq(s.as_bytes())))
}

pub fn hsp(score: i32, q: (i32, i32), s: (i32, i32)) -> Hsp {
    Hsp::new(score, Interval::new(q.0, q.1), Interval::new(s.0, s.1))
}

/// Target with one HSP of `score`
pub fn scored_match(target_id: usize, score: i32) -> Match {
    Match::new(target_id, vec![hsp(score, (0, 10), (0, 10))])
}

pub fn refs(n: usize, len: usize) -> ReferenceTable {
    let mut refs = ReferenceTable::new();
    for i in 0..n {
        refs.push(format!("target{}", i), len);
    }
    refs
}

/// Enumerate into `n_part` collectors and return the strategy and every
/// emitted seed, sorted.
pub fn collect_seeds(
    seqs: &SequenceCollection,
    shapes: &ShapeTable,
    reduction: &Reduction,
    options: SeedOptions,
    n_part: usize,
    contiguous_hint: bool,
) -> Result<(SeedStrategy, Vec<(u64, Position, usize)>), SeedError> {
    let partition = seqs.partition(n_part);
    let mut sinks = vec![SeedCollector::new(); n_part];
    let engine = SeedEngine::new(seqs, shapes, reduction, options);
    let strategy = engine.enumerate(&mut sinks, &partition, 0..shapes.count(), &NoFilter, contiguous_hint)?;
    let mut seeds: Vec<_> = sinks.into_iter().flat_map(|s| s.seeds).collect();
    seeds.sort();
    Ok((strategy, seeds))
}

/// Protein sequence over the 20 standard amino acids
pub fn standard_protein(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(STANDARD), 0..max_len)
}

/// Protein sequence that may contain masked letters
pub fn masked_protein(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![9 => prop::sample::select(STANDARD), 1 => Just(b'X')],
        0..max_len,
    )
}
