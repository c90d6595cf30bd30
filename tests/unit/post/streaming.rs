//! Streaming culling against whole-set culling

use proptest::prelude::*;

use seedcull::align::{compare_targets, Match};
use seedcull::config::CullingConfig;
use seedcull::post::Culler;

use super::super::helpers::{refs, scored_match};

fn stream(culler: &Culler<'_, seedcull::align::ReferenceTable>, sorted: &[Match], batch_size: usize) -> Vec<Match> {
    let mut kept = Vec::new();
    for batch in sorted.chunks(batch_size) {
        if !culler.score_only_cull(&mut kept, batch, 0) {
            break;
        }
    }
    kept
}

#[test]
fn test_streaming_stops_early() {
    let config = CullingConfig {
        max_alignments: 2,
        ..Default::default()
    };
    let refs = refs(6, 500);
    let culler = Culler::new(&config, &refs);
    let mut kept = Vec::new();
    assert!(culler.score_only_cull(&mut kept, &[scored_match(0, 90), scored_match(1, 80)], 0));
    assert!(!culler.score_only_cull(&mut kept, &[scored_match(2, 70), scored_match(3, 60)], 0));
    let ids: Vec<_> = kept.iter().map(|t| t.target_id).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn test_low_score_bound_rejects() {
    let config = CullingConfig::default();
    let refs = refs(3, 500);
    let culler = Culler::new(&config, &refs);
    let mut kept = Vec::new();
    assert!(culler.score_only_cull(&mut kept, &[scored_match(0, 90)], 0));
    assert!(!culler.score_only_cull(&mut kept, &[scored_match(1, 30)], 30));
    assert_eq!(kept.len(), 1);
}

proptest! {
    #[test]
    fn prop_streaming_matches_full_fixed_count(
        scores in prop::collection::vec(0i32..60, 1..40),
        k in 1usize..8,
        batch_size in 1usize..6,
    ) {
        let config = CullingConfig {
            max_alignments: k,
            ..Default::default()
        };
        let refs = refs(scores.len(), 500);
        let culler = Culler::new(&config, &refs);
        let mut all: Vec<Match> = scores.iter().enumerate().map(|(i, &s)| scored_match(i, s)).collect();
        all.sort_by(compare_targets);

        let streamed = stream(&culler, &all, batch_size);
        let mut full = all.clone();
        culler.cull_targets(&mut full, 100, "query");
        prop_assert_eq!(streamed, full);
    }

    #[test]
    fn prop_streaming_matches_full_top_percent(
        scores in prop::collection::vec(0i32..60, 1..40),
        top in 1u32..100,
        batch_size in 1usize..6,
    ) {
        let config = CullingConfig {
            toppercent: top as f64,
            ..Default::default()
        };
        let refs = refs(scores.len(), 500);
        let culler = Culler::new(&config, &refs);
        let mut all: Vec<Match> = scores.iter().enumerate().map(|(i, &s)| scored_match(i, s)).collect();
        all.sort_by(compare_targets);

        let streamed = stream(&culler, &all, batch_size);
        let mut full = all.clone();
        culler.cull_targets(&mut full, 100, "query");
        prop_assert_eq!(streamed, full);
    }
}
