//! Parallel seed enumeration over a sequence collection
//!
//! `SeedEngine::enumerate` runs one rayon task per partition. Every task owns
//! one sink and one scratch buffer and reads the shared collection, shapes and
//! reduction without locking. The extraction algorithm is chosen once per call
//! (see [`SeedStrategy`]) and configuration mismatches are rejected before any
//! task starts.

use std::ops::Range;

use rayon::prelude::*;

use super::iterators::{ContiguousSeedIterator, HashedSeedIterator, SeedIterator};
use super::reduction::Reduction;
use super::shape::ShapeTable;
use super::sink::{Position, SeedFilter, SeedSink, SinkFlow};
use crate::config::{AlgoMode, SeedOptions};
use crate::error::{Result, SeedError};
use crate::sequence::SequenceCollection;

/// Window length / bit width pairs the contiguous fast path is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContiguousSeed {
    Len5Bits4,
    Len6Bits4,
    Len7Bits4,
}

impl ContiguousSeed {
    fn new(length: usize, bits: u32) -> Option<Self> {
        match (length, bits) {
            (5, 4) => Some(Self::Len5Bits4),
            (6, 4) => Some(Self::Len6Bits4),
            (7, 4) => Some(Self::Len7Bits4),
            _ => None,
        }
    }

    pub fn length(&self) -> usize {
        match self {
            Self::Len5Bits4 => 5,
            Self::Len6Bits4 => 6,
            Self::Len7Bits4 => 7,
        }
    }
}

/// Reduction widths supported by hashed seeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashedSeed {
    Bits4,
}

/// Seed extraction algorithm of one `enumerate` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStrategy {
    /// Single gapless shape, rolling packed key over raw letters
    Contiguous(ContiguousSeed),
    /// Rolling hash over raw letters
    Hashed(HashedSeed),
    /// Reduce into a scratch buffer, then pack every shape at every offset
    Generic,
}

impl SeedStrategy {
    /// Pick and validate the strategy for `shape_range`.
    ///
    /// The contiguous path is taken when the table holds exactly one shape,
    /// that shape is gapless and either the search is query-indexed or the
    /// caller asked for it. An unsupported width there, or for hashed seeds,
    /// is an error rather than a fallback to the generic path.
    pub fn select(
        shapes: &ShapeTable,
        shape_range: &Range<usize>,
        reduction: &Reduction,
        options: &SeedOptions,
        contiguous_hint: bool,
    ) -> Result<Self> {
        if shape_range.start > shape_range.end || shape_range.end > shapes.count() {
            return Err(SeedError::ShapeRange {
                begin: shape_range.start,
                end: shape_range.end,
                count: shapes.count(),
            });
        }
        let bits = reduction.bit_size();

        if shape_range.len() == 1
            && shapes.count() == 1
            && shapes[shape_range.start].is_contiguous()
            && (options.algo == AlgoMode::QueryIndexed || contiguous_hint)
        {
            let length = shapes[shape_range.start].length();
            return ContiguousSeed::new(length, bits)
                .map(SeedStrategy::Contiguous)
                .ok_or(SeedError::UnsupportedContiguousSeed { length, bits });
        }

        if options.hashed_seeds {
            let hashed = match bits {
                4 => HashedSeed::Bits4,
                _ => return Err(SeedError::UnsupportedReduction { bits }),
            };
            for id in shape_range.clone() {
                check_key_width(shapes[id].length(), bits)?;
            }
            return Ok(SeedStrategy::Hashed(hashed));
        }

        for id in shape_range.clone() {
            check_key_width(shapes[id].weight(), bits)?;
        }
        Ok(SeedStrategy::Generic)
    }
}

fn check_key_width(letters: usize, bits: u32) -> Result<()> {
    if letters as u64 * bits as u64 > u64::BITS as u64 {
        return Err(SeedError::ShapeSpanTooWide { letters, bits });
    }
    Ok(())
}

/// Seed enumeration over one immutable collection and configuration
pub struct SeedEngine<'a> {
    seqs: &'a SequenceCollection,
    shapes: &'a ShapeTable,
    reduction: &'a Reduction,
    options: SeedOptions,
}

impl<'a> SeedEngine<'a> {
    pub fn new(
        seqs: &'a SequenceCollection,
        shapes: &'a ShapeTable,
        reduction: &'a Reduction,
        options: SeedOptions,
    ) -> Self {
        Self {
            seqs,
            shapes,
            reduction,
            options,
        }
    }

    /// Emit the seeds of every sequence in every partition.
    ///
    /// `partition` holds `sinks.len() + 1` boundaries (see
    /// [`SequenceCollection::partition`]); worker `i` enumerates sequences
    /// `partition[i]..partition[i + 1]` into `sinks[i]` and calls its
    /// `finish()` once, also when the sink stopped early. Within a worker
    /// sequences are visited in index order and offsets left to right; there is
    /// no order across workers. Returns the strategy that was used.
    pub fn enumerate<S, F>(
        &self,
        sinks: &mut [S],
        partition: &[usize],
        shape_range: Range<usize>,
        filter: &F,
        contiguous_hint: bool,
    ) -> Result<SeedStrategy>
    where
        S: SeedSink + Send,
        F: SeedFilter + Sync + ?Sized,
    {
        // DIAMOND reference: diamond/src/data/sequence_set.h:109-145
        if partition.len() != sinks.len() + 1 {
            return Err(SeedError::PartitionMismatch {
                sinks: sinks.len(),
                boundaries: partition.len(),
            });
        }
        let strategy = SeedStrategy::select(
            self.shapes,
            &shape_range,
            self.reduction,
            &self.options,
            contiguous_hint,
        )?;
        log::debug!(
            "Enumerating seeds: strategy {:?}, shapes {:?}, {} partitions",
            strategy,
            shape_range,
            sinks.len()
        );

        sinks.par_iter_mut().enumerate().for_each(|(worker, sink)| {
            let end = partition[worker + 1].min(self.seqs.len());
            let begin = partition[worker].min(end);
            let emitted = match strategy {
                SeedStrategy::Contiguous(ContiguousSeed::Len5Bits4) => {
                    self.enum_contiguous::<S, F, 5, 4>(sink, begin..end, shape_range.start, filter)
                }
                SeedStrategy::Contiguous(ContiguousSeed::Len6Bits4) => {
                    self.enum_contiguous::<S, F, 6, 4>(sink, begin..end, shape_range.start, filter)
                }
                SeedStrategy::Contiguous(ContiguousSeed::Len7Bits4) => {
                    self.enum_contiguous::<S, F, 7, 4>(sink, begin..end, shape_range.start, filter)
                }
                SeedStrategy::Hashed(HashedSeed::Bits4) => {
                    self.enum_hashed::<S, F, 4>(sink, begin..end, shape_range.clone(), filter)
                }
                SeedStrategy::Generic => self.enum_generic(sink, begin..end, shape_range.clone(), filter),
            };
            log::trace!("worker {}: {} seeds from sequences {}..{}", worker, emitted, begin, end);
        });

        Ok(strategy)
    }

    fn enum_generic<S, F>(&self, sink: &mut S, range: Range<usize>, shape_range: Range<usize>, filter: &F) -> usize
    where
        S: SeedSink,
        F: SeedFilter + ?Sized,
    {
        let bits = self.reduction.bit_size();
        let mut buf = Vec::with_capacity(self.seqs.max_len(range.clone()));
        let mut emitted = 0;
        'seqs: for i in range {
            let seq = self.seqs.get(i);
            self.reduction.reduce_seq(seq, &mut buf);
            for shape_id in shape_range.clone() {
                let shape = &self.shapes[shape_id];
                if seq.len() < shape.length() {
                    continue;
                }
                for (j, key) in SeedIterator::new(&buf, shape, bits).enumerate() {
                    let Some(key) = key else { continue };
                    if filter.contains(key, shape_id) {
                        emitted += 1;
                        if sink.emit(key, Position::new(i, j), shape_id) == SinkFlow::Stop {
                            break 'seqs;
                        }
                    }
                }
            }
        }
        sink.finish();
        emitted
    }

    fn enum_hashed<S, F, const B: u32>(
        &self,
        sink: &mut S,
        range: Range<usize>,
        shape_range: Range<usize>,
        filter: &F,
    ) -> usize
    where
        S: SeedSink,
        F: SeedFilter + ?Sized,
    {
        let mut emitted = 0;
        'seqs: for i in range {
            let seq = self.seqs.get(i);
            for shape_id in shape_range.clone() {
                let shape = &self.shapes[shape_id];
                if seq.len() < shape.length() {
                    continue;
                }
                for (j, key) in HashedSeedIterator::<B>::new(seq, shape, self.reduction).enumerate() {
                    if filter.contains(key, shape_id) {
                        emitted += 1;
                        if sink.emit(key, Position::new(i, j), shape_id) == SinkFlow::Stop {
                            break 'seqs;
                        }
                    }
                }
            }
        }
        sink.finish();
        emitted
    }

    fn enum_contiguous<S, F, const L: usize, const B: u32>(
        &self,
        sink: &mut S,
        range: Range<usize>,
        shape_id: usize,
        filter: &F,
    ) -> usize
    where
        S: SeedSink,
        F: SeedFilter + ?Sized,
    {
        let mut emitted = 0;
        'seqs: for i in range {
            let seq = self.seqs.get(i);
            if seq.len() < ContiguousSeedIterator::<L, B>::length() {
                continue;
            }
            for (j, key) in ContiguousSeedIterator::<L, B>::new(seq, self.reduction).enumerate() {
                let Some(key) = key else { continue };
                if filter.contains(key, shape_id) {
                    emitted += 1;
                    if sink.emit(key, Position::new(i, j), shape_id) == SinkFlow::Stop {
                        break 'seqs;
                    }
                }
            }
        }
        sink.finish();
        emitted
    }
}
