//! `seeds`: per-shape seed statistics of a protein collection

pub mod args;

pub use args::SeedsArgs;

use std::io::Write;

use anyhow::{bail, Context, Result};
use bio::io::fasta;

use crate::seed::{NoFilter, Reduction, SeedCounter, SeedEngine, Shape, ShapeTable};
use crate::sequence::alphabet::encode_seq;
use crate::sequence::SequenceCollection;

use super::common::{init_thread_pool, output_writer};

fn shape_table(args: &SeedsArgs) -> Result<ShapeTable> {
    if let Some(len) = args.contiguous {
        return Ok(ShapeTable::new(vec![Shape::contiguous(len)?]));
    }
    if args.shapes.is_empty() {
        return Ok(ShapeTable::spaced_default()?);
    }
    Ok(ShapeTable::from_codes(&args.shapes)?)
}

pub fn run(args: SeedsArgs) -> Result<()> {
    let num_threads = init_thread_pool(args.num_threads)?;
    let shapes = shape_table(&args)?;
    let reduction = match &args.reduction {
        Some(groups) => Reduction::from_groups(groups)?,
        None => Reduction::diamond_default()?,
    };
    log::info!("Reduction: {}", reduction);

    let reader = fasta::Reader::from_file(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let mut seqs = SequenceCollection::new();
    for record in reader.records() {
        let record = record.context("Failed to parse FASTA record")?;
        seqs.push(&encode_seq(record.seq()));
    }
    if seqs.is_empty() {
        bail!("No sequences in {}", args.input.display());
    }
    seqs.log_stats();

    let n_part = if args.partitions == 0 {
        num_threads
    } else {
        args.partitions
    };
    let partition = seqs.partition(n_part);
    let mut counters = vec![SeedCounter::new(shapes.count()); n_part];

    let engine = SeedEngine::new(&seqs, &shapes, &reduction, args.seed_options());
    let strategy = engine.enumerate(&mut counters, &partition, 0..shapes.count(), &NoFilter, args.contiguous_hint)?;
    log::info!("Enumerated seeds of {} sequences with {:?}", seqs.len(), strategy);

    let total = SeedCounter::merge_all(shapes.count(), counters);
    log::debug!("All workers finished: {}", total.is_finished());

    let mut out = output_writer(args.out.as_ref())?;
    writeln!(out, "#shape\tcode\tweight\tseeds\tdistinct\tmax_multiplicity")?;
    for (i, shape) in shapes.iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            i,
            shape,
            shape.weight(),
            total.seeds(i),
            total.distinct(i),
            total.max_multiplicity(i)
        )?;
    }
    out.flush()?;
    Ok(())
}
