//! Command-line arguments for seed statistics

use clap::Args;
use std::path::PathBuf;

use crate::config::{AlgoMode, SeedOptions};

/// Count the seeds of a protein FASTA file
#[derive(Args, Debug)]
pub struct SeedsArgs {
    /// Protein FASTA input
    #[arg(short, long)]
    pub input: PathBuf,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Seed shape as a 0/1 code; repeat for several shapes
    #[arg(long = "shape")]
    pub shapes: Vec<String>,
    /// Use one contiguous shape of this length instead of spaced shapes
    #[arg(long, conflicts_with = "shapes")]
    pub contiguous: Option<usize>,
    /// Reduced alphabet as space separated letter groups
    #[arg(long)]
    pub reduction: Option<String>,
    /// Derive seed keys by hashing the sampled letters
    #[arg(long, default_value_t = false)]
    pub hashed_seeds: bool,
    /// Indexing mode: double-indexed or query-indexed
    #[arg(long, default_value = "double-indexed")]
    pub algo: AlgoMode,
    /// Request the contiguous fast path in double-indexed mode
    #[arg(long, default_value_t = false)]
    pub contiguous_hint: bool,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    /// Number of partitions (0 = one per thread)
    #[arg(long, default_value_t = 0)]
    pub partitions: usize,
}

impl SeedsArgs {
    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            hashed_seeds: self.hashed_seeds,
            algo: self.algo,
        }
    }
}
