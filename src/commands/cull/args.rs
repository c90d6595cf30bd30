//! Command-line arguments for hit culling

use clap::Args;
use std::path::PathBuf;

use crate::config::CullingConfig;

/// Cull a table of HSPs per query
#[derive(Args, Debug)]
pub struct CullArgs {
    /// HSP table (`-` for stdin)
    #[arg(short, long)]
    pub input: PathBuf,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Percent of an HSP's extent a better HSP must cover to remove it
    #[arg(long, default_value_t = 50.0)]
    pub inner_culling_overlap: f64,
    /// Maximum HSPs per target (0 = unlimited)
    #[arg(long, default_value_t = 1)]
    pub max_hsps: usize,
    /// Report targets within this percentage of the best score
    #[arg(long, default_value_t = 100.0)]
    pub top: f64,
    /// Maximum number of targets per query
    #[arg(short = 'k', long, default_value_t = 25)]
    pub max_target_seqs: usize,
    /// Minimum percent identity
    #[arg(long, default_value_t = 0.0)]
    pub id: f64,
    /// Minimum percent query coverage
    #[arg(long, default_value_t = 0.0)]
    pub query_cover: f64,
    /// Minimum percent subject coverage
    #[arg(long, default_value_t = 0.0)]
    pub subject_cover: f64,
    /// Suppress perfect full-length hits of a query against itself
    #[arg(long, default_value_t = false)]
    pub no_self_hits: bool,
    /// Query ranges are in translated frame coordinates
    #[arg(long, default_value_t = false)]
    pub translated: bool,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(short, long, default_value_t = false)]
    pub progress: bool,
}

impl From<&CullArgs> for CullingConfig {
    fn from(args: &CullArgs) -> Self {
        CullingConfig {
            inner_culling_overlap: args.inner_culling_overlap,
            max_hsps: args.max_hsps,
            toppercent: args.top,
            max_alignments: args.max_target_seqs,
            min_id: args.id,
            query_cover: args.query_cover,
            subject_cover: args.subject_cover,
            no_self_hits: args.no_self_hits,
            query_translated: args.translated,
        }
    }
}
