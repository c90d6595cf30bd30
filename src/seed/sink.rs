//! Seed consumers and filters
//!
//! The engine hands every accepted seed to a [`SeedSink`]. Each worker owns its
//! sink, so implementations need no synchronization; results are merged by the
//! caller after `enumerate` returns.

use rustc_hash::FxHashMap;

/// Location of a seed occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub seq_index: u32,
    pub offset: u32,
}

impl Position {
    #[inline]
    pub fn new(seq_index: usize, offset: usize) -> Self {
        Self {
            seq_index: seq_index as u32,
            offset: offset as u32,
        }
    }

    /// Single integer form, sequence index in the high half
    #[inline]
    pub fn packed(&self) -> u64 {
        (self.seq_index as u64) << 32 | self.offset as u64
    }
}

/// Whether enumeration should go on after a seed was emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkFlow {
    Continue,
    Stop,
}

pub trait SeedSink {
    fn emit(&mut self, key: u64, pos: Position, shape_id: usize) -> SinkFlow;

    /// Called once per worker after its last `emit`.
    fn finish(&mut self) {}
}

pub trait SeedFilter {
    fn contains(&self, key: u64, shape_id: usize) -> bool;
}

/// Accepts every seed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl SeedFilter for NoFilter {
    #[inline]
    fn contains(&self, _key: u64, _shape_id: usize) -> bool {
        true
    }
}

impl<F> SeedFilter for F
where
    F: Fn(u64, usize) -> bool,
{
    #[inline]
    fn contains(&self, key: u64, shape_id: usize) -> bool {
        self(key, shape_id)
    }
}

/// Counts seed occurrences per shape and key
#[derive(Debug, Clone, Default)]
pub struct SeedCounter {
    per_shape: Vec<FxHashMap<u64, u32>>,
    finished: bool,
}

impl SeedCounter {
    pub fn new(shape_count: usize) -> Self {
        Self {
            per_shape: vec![FxHashMap::default(); shape_count],
            finished: false,
        }
    }

    /// Total seeds seen for `shape_id`
    pub fn seeds(&self, shape_id: usize) -> u64 {
        self.per_shape
            .get(shape_id)
            .map_or(0, |m| m.values().map(|&c| c as u64).sum())
    }

    /// Number of distinct keys for `shape_id`
    pub fn distinct(&self, shape_id: usize) -> usize {
        self.per_shape.get(shape_id).map_or(0, |m| m.len())
    }

    /// Highest multiplicity of a single key for `shape_id`
    pub fn max_multiplicity(&self, shape_id: usize) -> u32 {
        self.per_shape
            .get(shape_id)
            .and_then(|m| m.values().copied().max())
            .unwrap_or(0)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fold the counters of all workers into one. The result is finished iff
    /// every worker was.
    pub fn merge_all<I>(shape_count: usize, counters: I) -> Self
    where
        I: IntoIterator<Item = SeedCounter>,
    {
        let mut total = Self {
            finished: true,
            ..Self::new(shape_count)
        };
        for counter in counters {
            total.merge(counter);
        }
        total
    }

    /// Fold another worker's counts into this one.
    pub fn merge(&mut self, other: SeedCounter) {
        if self.per_shape.len() < other.per_shape.len() {
            self.per_shape.resize_with(other.per_shape.len(), FxHashMap::default);
        }
        for (mine, theirs) in self.per_shape.iter_mut().zip(other.per_shape) {
            for (key, count) in theirs {
                *mine.entry(key).or_insert(0) += count;
            }
        }
        self.finished &= other.finished;
    }
}

impl SeedSink for SeedCounter {
    fn emit(&mut self, key: u64, _pos: Position, shape_id: usize) -> SinkFlow {
        if shape_id >= self.per_shape.len() {
            self.per_shape.resize_with(shape_id + 1, FxHashMap::default);
        }
        *self.per_shape[shape_id].entry(key).or_insert(0) += 1;
        SinkFlow::Continue
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

/// Stores every emitted seed, optionally stopping after `limit` seeds.
#[derive(Debug, Clone, Default)]
pub struct SeedCollector {
    pub seeds: Vec<(u64, Position, usize)>,
    pub finish_calls: usize,
    limit: Option<usize>,
}

impl SeedCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

impl SeedSink for SeedCollector {
    fn emit(&mut self, key: u64, pos: Position, shape_id: usize) -> SinkFlow {
        self.seeds.push((key, pos, shape_id));
        match self.limit {
            Some(limit) if self.seeds.len() >= limit => SinkFlow::Stop,
            _ => SinkFlow::Continue,
        }
    }

    fn finish(&mut self) {
        self.finish_calls += 1;
    }
}
