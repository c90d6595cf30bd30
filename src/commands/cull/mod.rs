//! `cull`: per-query culling of a precomputed HSP table

pub mod args;

pub use args::CullArgs;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;

use crate::align::ReferenceTable;
use crate::config::CullingConfig;
use crate::post::Culler;
use crate::report::{read_table, write_table};

use super::common::{init_thread_pool, output_writer, progress_bar};

pub fn run(args: CullArgs) -> Result<()> {
    init_thread_pool(args.num_threads)?;
    let config = CullingConfig::from(&args);
    if !(0.0..=100.0).contains(&config.toppercent) {
        bail!("--top must be within 0..=100, got {}", config.toppercent);
    }

    let reader: Box<dyn BufRead> = if args.input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin().lock()))
    } else {
        let file = File::open(&args.input).with_context(|| format!("Failed to open {}", args.input.display()))?;
        Box::new(BufReader::new(file))
    };
    let mut refs = ReferenceTable::new();
    let mut queries = read_table(reader, &mut refs).context("Failed to read HSP table")?;
    log::info!("Read {} queries against {} targets", queries.len(), refs.len());

    let culler = Culler::new(&config, &refs);
    let bar = progress_bar(queries.len() as u64, args.progress);
    queries.par_iter_mut().for_each(|q| {
        culler.cull_query(&mut q.targets, q.len, &q.title);
        bar.inc(1);
    });
    bar.finish_and_clear();

    let kept: usize = queries.iter().map(|q| q.targets.len()).sum();
    log::info!("Kept {} query-target pairs", kept);

    let mut out = output_writer(args.out.as_ref())?;
    write_table(&mut out, &queries, &refs)?;
    out.flush()?;
    Ok(())
}
