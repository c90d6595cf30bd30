//! Inner culling, quality filters and target selection

use proptest::prelude::*;

use seedcull::align::{Hsp, Match, ReferenceTable};
use seedcull::config::CullingConfig;
use seedcull::post::Culler;
use seedcull::sequence::Interval;

use super::super::helpers::{hsp, refs, scored_match};

fn arb_hsp() -> impl Strategy<Value = Hsp> {
    (1i32..100, 0i32..300, 1i32..80, 0i32..300, 1i32..80, 0u8..6).prop_map(|(score, qb, ql, sb, sl, frame)| {
        Hsp::new(score, Interval::new(qb, qb + ql), Interval::new(sb, sb + sl)).with_frame(frame)
    })
}

#[test]
fn test_top_percent_boundary() {
    let config = CullingConfig {
        toppercent: 70.0,
        ..Default::default()
    };
    let refs = refs(4, 500);
    let culler = Culler::new(&config, &refs);
    let mut targets = vec![scored_match(0, 100), scored_match(1, 80), scored_match(2, 50), scored_match(3, 10)];
    culler.cull_targets(&mut targets, 200, "query");
    let scores: Vec<_> = targets.iter().map(|t| t.filter_score).collect();
    assert_eq!(scores, vec![100, 80, 50]);
}

#[test]
fn test_top_percent_cutoff_at_least_one() {
    // 1% of 3 truncates to 0; the cutoff is raised to 1
    let config = CullingConfig {
        toppercent: 99.0,
        ..Default::default()
    };
    let refs = refs(3, 500);
    let culler = Culler::new(&config, &refs);
    let mut targets = vec![scored_match(0, 3), scored_match(1, 1), Match::score_only(2, 0)];
    culler.cull_targets(&mut targets, 200, "query");
    let ids: Vec<_> = targets.iter().map(|t| t.target_id).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn test_self_hit_suppression() {
    let mut refs = ReferenceTable::new();
    refs.push("target0", 80);
    refs.push("query", 120);
    let self_hit = Match::new(1, vec![hsp(500, (0, 120), (0, 120)).with_identities(120, 120)]);
    let other = Match::new(0, vec![hsp(90, (0, 80), (0, 80)).with_identities(60, 80)]);

    let config = CullingConfig {
        no_self_hits: true,
        ..Default::default()
    };
    let culler = Culler::new(&config, &refs);
    let mut targets = vec![self_hit.clone(), other.clone()];
    culler.cull_targets(&mut targets, 120, "query");
    assert_eq!(targets, vec![other.clone()]);

    let config = CullingConfig::default();
    let culler = Culler::new(&config, &refs);
    let mut targets = vec![other.clone(), self_hit.clone()];
    culler.cull_targets(&mut targets, 120, "query");
    assert_eq!(targets, vec![self_hit, other]);
}

#[test]
fn test_partial_self_hit_kept() {
    let mut refs = ReferenceTable::new();
    refs.push("query", 120);
    let config = CullingConfig {
        no_self_hits: true,
        ..Default::default()
    };
    let culler = Culler::new(&config, &refs);
    let mut m = Match::new(0, vec![hsp(300, (0, 100), (0, 100)).with_identities(100, 100)]);
    culler.apply_filters(&mut m, 120, "query");
    assert_eq!(m.filter_score, 300);
}

#[test]
fn test_cull_query_translated() {
    let mut refs = ReferenceTable::new();
    refs.push("target0", 100);
    let config = CullingConfig {
        query_translated: true,
        max_hsps: 0,
        query_cover: 50.0,
        ..Default::default()
    };
    let culler = Culler::new(&config, &refs);
    // frame +1 codons 0..20 cover nt 0..60 of 90; frame -1 codons 0..5 cover nt 75..90
    let mut targets = vec![Match::new(
        0,
        vec![
            hsp(60, (0, 20), (0, 20)).with_frame(0),
            hsp(40, (0, 5), (50, 55)).with_frame(3),
        ],
    )];
    culler.cull_query(&mut targets, 90, "query");
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].hsps.len(), 1);
    assert_eq!(targets[0].hsps[0].query_source_range, Interval::new(0, 60));
}

#[test]
fn test_fixed_count_zero_keeps_nothing() {
    let config = CullingConfig {
        max_alignments: 0,
        ..Default::default()
    };
    let refs = refs(2, 500);
    let culler = Culler::new(&config, &refs);
    let mut targets = vec![scored_match(0, 10), scored_match(1, 20)];
    culler.cull_targets(&mut targets, 100, "query");
    assert!(targets.is_empty());
}

proptest! {
    #[test]
    fn prop_inner_cull_idempotent(
        hsps in prop::collection::vec(arb_hsp(), 0..20),
        overlap in 0.0f64..100.0,
        max_hsps in 0usize..4,
        translated in any::<bool>(),
    ) {
        let config = CullingConfig {
            inner_culling_overlap: overlap,
            max_hsps,
            query_translated: translated,
            ..Default::default()
        };
        let refs = refs(1, 1000);
        let culler = Culler::new(&config, &refs);

        let mut once = Match::new(0, hsps);
        culler.inner_cull(&mut once, 1200);
        let mut twice = once.clone();
        culler.inner_cull(&mut twice, 1200);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_fixed_count_bounded(scores in prop::collection::vec(0i32..50, 0..40), k in 1usize..10) {
        let config = CullingConfig {
            max_alignments: k,
            ..Default::default()
        };
        let refs = refs(scores.len(), 500);
        let culler = Culler::new(&config, &refs);
        let mut targets: Vec<Match> = scores.iter().enumerate().map(|(i, &s)| scored_match(i, s)).collect();
        culler.cull_targets(&mut targets, 100, "query");

        prop_assert!(targets.len() <= k);
        prop_assert!(targets.iter().all(|t| t.filter_score > 0));
        prop_assert!(targets.windows(2).all(|w| w[0].filter_score >= w[1].filter_score));
        let positive = scores.iter().filter(|&&s| s > 0).count();
        prop_assert_eq!(targets.len(), positive.min(k));
    }
}
