//! Run configuration shared by the seed engine and the culling pipeline.
//!
//! Both structs are plain values built once (usually from command line
//! arguments) and passed by reference into every component. Nothing here is
//! global.

/// Which side of the search is indexed.
///
/// The contiguous seed fast path is only taken automatically in
/// [`AlgoMode::QueryIndexed`]; in double-indexed mode the caller has to ask
/// for it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgoMode {
    #[default]
    DoubleIndexed,
    QueryIndexed,
}

impl std::str::FromStr for AlgoMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "double-indexed" | "double" | "0" => Ok(AlgoMode::DoubleIndexed),
            "query-indexed" | "query" | "1" => Ok(AlgoMode::QueryIndexed),
            _ => Err(format!(
                "Unknown algorithm mode: {}. Use 'double-indexed' or 'query-indexed'",
                s
            )),
        }
    }
}

/// Options for seed enumeration
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// Derive keys with a rolling hash over the raw letters
    pub hashed_seeds: bool,
    pub algo: AlgoMode,
}

/// Policy knobs for HSP and target culling
#[derive(Debug, Clone)]
pub struct CullingConfig {
    /// Percent of an HSP's own extent that a better HSP must cover to cull it
    pub inner_culling_overlap: f64,
    /// Maximum HSPs kept per target (0 = unlimited)
    pub max_hsps: usize,
    /// Report targets within this percentage of the best score (100 = fixed-count mode)
    pub toppercent: f64,
    /// Maximum number of targets in fixed-count mode
    pub max_alignments: usize,
    /// Minimum percent identity (0 = disabled)
    pub min_id: f64,
    /// Minimum percent query coverage (0 = disabled)
    pub query_cover: f64,
    /// Minimum percent subject coverage (0 = disabled)
    pub subject_cover: f64,
    /// Drop perfect full-length hits of a query against itself
    pub no_self_hits: bool,
    /// HSP query ranges are in translated frame coordinates
    pub query_translated: bool,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            inner_culling_overlap: 50.0,
            max_hsps: 1,
            toppercent: 100.0,
            max_alignments: 25,
            min_id: 0.0,
            query_cover: 0.0,
            subject_cover: 0.0,
            no_self_hits: false,
            query_translated: false,
        }
    }
}

impl CullingConfig {
    /// Fixed-count mode: keep at most `max_alignments` targets.
    pub fn is_fixed_count(&self) -> bool {
        self.toppercent >= 100.0
    }

    /// Any filter besides plain score selection is active.
    ///
    /// These filters can reject high scoring targets, so lower scoring batches
    /// may still end up in the result.
    pub fn has_quality_filters(&self) -> bool {
        self.min_id > 0.0 || self.query_cover > 0.0 || self.subject_cover > 0.0 || self.no_self_hits
    }

    /// Lowest score still inside the top-percent window around `best`.
    ///
    /// Truncates like an integer cast. Callers that need a strictly positive
    /// cutoff clamp the result themselves.
    pub fn toppercent_cutoff(&self, best: i32) -> i32 {
        ((1.0 - self.toppercent / 100.0) * best as f64) as i32
    }
}
