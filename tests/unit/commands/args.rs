//! Argument parsing of the `seeds` and `cull` subcommands

use clap::{Args, Command, FromArgMatches};
use std::path::PathBuf;

use seedcull::commands::cull::CullArgs;
use seedcull::commands::seeds::SeedsArgs;
use seedcull::config::{AlgoMode, CullingConfig};

fn parse<A: Args + FromArgMatches>(name: &'static str, args: &[&str]) -> A {
    let mut all_args = vec!["seedcull".to_string(), name.to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));
    let cmd = Command::new("seedcull").subcommand(A::augment_args(Command::new(name)));
    let matches = cmd.get_matches_from(all_args);
    let sub_matches = matches.subcommand_matches(name).unwrap();
    A::from_arg_matches(sub_matches).unwrap()
}

fn try_parse<A: Args + FromArgMatches>(name: &'static str, args: &[&str]) -> Result<A, clap::Error> {
    let mut all_args = vec!["seedcull".to_string(), name.to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));
    let cmd = Command::new("seedcull").subcommand(A::augment_args(Command::new(name)));
    let matches = cmd.try_get_matches_from(all_args)?;
    let sub_matches = matches.subcommand_matches(name).unwrap();
    A::from_arg_matches(sub_matches)
}

#[test]
fn test_seeds_defaults() {
    let args: SeedsArgs = parse("seeds", &["-i", "proteins.fasta"]);
    assert_eq!(args.input, PathBuf::from("proteins.fasta"));
    assert!(args.shapes.is_empty());
    assert_eq!(args.contiguous, None);
    assert!(!args.hashed_seeds);
    assert_eq!(args.algo, AlgoMode::DoubleIndexed);
    assert_eq!(args.num_threads, 0);
    assert_eq!(args.partitions, 0);
}

#[test]
fn test_seeds_options() {
    let args: SeedsArgs = parse(
        "seeds",
        &["-i", "p.fa", "--shape", "1101", "--shape", "111", "--algo", "query-indexed", "--hashed-seeds"],
    );
    assert_eq!(args.shapes, vec!["1101", "111"]);
    let options = args.seed_options();
    assert!(options.hashed_seeds);
    assert_eq!(options.algo, AlgoMode::QueryIndexed);
}

#[test]
fn test_seeds_shape_conflicts_with_contiguous() {
    let res: Result<SeedsArgs, _> = try_parse("seeds", &["-i", "p.fa", "--shape", "1101", "--contiguous", "5"]);
    assert!(res.is_err());
}

#[test]
fn test_cull_defaults_match_config() {
    let args: CullArgs = parse("cull", &["-i", "hits.tsv"]);
    let config = CullingConfig::from(&args);
    let defaults = CullingConfig::default();
    assert_eq!(config.inner_culling_overlap, defaults.inner_culling_overlap);
    assert_eq!(config.max_hsps, defaults.max_hsps);
    assert_eq!(config.toppercent, defaults.toppercent);
    assert_eq!(config.max_alignments, defaults.max_alignments);
    assert_eq!(config.min_id, 0.0);
    assert!(!config.no_self_hits);
    assert!(!config.query_translated);
}

#[test]
fn test_cull_options() {
    let args: CullArgs = parse(
        "cull",
        &["-i", "-", "--top", "10", "-k", "5", "--id", "40", "--no-self-hits", "--translated", "--max-hsps", "0"],
    );
    let config = CullingConfig::from(&args);
    assert_eq!(config.toppercent, 10.0);
    assert_eq!(config.max_alignments, 5);
    assert_eq!(config.min_id, 40.0);
    assert_eq!(config.max_hsps, 0);
    assert!(config.no_self_hits);
    assert!(config.query_translated);
    assert!(!config.is_fixed_count());
    assert!(config.has_quality_filters());
}
