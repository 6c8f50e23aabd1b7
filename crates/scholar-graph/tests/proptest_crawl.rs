//! Property-based tests for crawl invariants on random related-paper graphs.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use common::FakeArxiv;
use scholar_graph::crawler::{CrawlLimits, CrawlOutcome, GraphCrawler};

/// A random graph of `n` papers; paper `i` lives in category `c{i}` and lists
/// the papers in `edges[i]` as related.
fn arb_graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..8).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0..n, 0..5), n))
}

/// Ids that should fail to resolve.
fn arb_failures() -> impl Strategy<Value = HashSet<usize>> {
    prop::collection::hash_set(1usize..8, 0..3)
}

fn build_fake(edges: &[Vec<usize>], failures: &HashSet<usize>) -> Arc<FakeArxiv> {
    let mut fake = FakeArxiv::new();
    for (i, related) in edges.iter().enumerate() {
        let id = format!("p{i}");
        let category = format!("c{i}");
        fake = fake.with_paper(&id, &category, &[], "");
        let related: Vec<String> = related.iter().map(|j| format!("p{j}")).collect();
        let related: Vec<&str> = related.iter().map(String::as_str).collect();
        fake = fake.with_related(&category, &related);
        if failures.contains(&i) {
            fake = fake.failing_paper(&id);
        }
    }
    Arc::new(fake)
}

fn run_crawl(fake: &Arc<FakeArxiv>, limits: CrawlLimits) -> CrawlOutcome {
    let crawler = GraphCrawler::new(fake.clone(), fake.clone());
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(crawler.crawl("p0", limits))
        .expect("seed always resolves")
}

proptest! {
    /// Node identifiers are unique and each identifier is fetched at most once.
    #[test]
    fn nodes_unique_and_fetched_once(
        edges in arb_graph(),
        failures in arb_failures(),
        depth in 0u32..5,
        fan_out in 1usize..5,
    ) {
        let fake = build_fake(&edges, &failures);
        let outcome = run_crawl(&fake, CrawlLimits::new(depth, fan_out));

        let ids: HashSet<_> = outcome.graph.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(ids.len(), outcome.graph.nodes.len());

        let calls = fake.paper_calls();
        let unique: HashSet<_> = calls.iter().collect();
        prop_assert_eq!(unique.len(), calls.len());
    }

    /// Every materialized node has a depth, and nothing else does.
    #[test]
    fn depths_track_nodes(
        edges in arb_graph(),
        failures in arb_failures(),
        depth in 0u32..5,
        fan_out in 1usize..5,
    ) {
        let fake = build_fake(&edges, &failures);
        let outcome = run_crawl(&fake, CrawlLimits::new(depth, fan_out));

        prop_assert_eq!(outcome.depths.len(), outcome.graph.nodes.len());
        for node in &outcome.graph.nodes {
            prop_assert!(outcome.depths[&node.id] <= depth);
        }
    }

    /// Lookup counts never exceed the worst case for the limits.
    #[test]
    fn lookups_within_worst_case(
        edges in arb_graph(),
        depth in 0u32..5,
        fan_out in 1usize..5,
    ) {
        let fake = build_fake(&edges, &HashSet::new());
        let limits = CrawlLimits::new(depth, fan_out);
        let outcome = run_crawl(&fake, limits);

        let issued = (outcome.stats.record_lookups + outcome.stats.related_lookups) as u64;
        prop_assert!(issued <= limits.worst_case_lookups());
        for (_, _, requested) in fake.related_calls() {
            prop_assert_eq!(requested, fan_out);
        }
    }

    /// Links only leave materialized nodes, and every non-seed node was
    /// reached through a link.
    #[test]
    fn links_connect_materialized_nodes(
        edges in arb_graph(),
        failures in arb_failures(),
        depth in 0u32..5,
        fan_out in 1usize..5,
    ) {
        let fake = build_fake(&edges, &failures);
        let outcome = run_crawl(&fake, CrawlLimits::new(depth, fan_out));

        for link in &outcome.graph.links {
            prop_assert!(outcome.graph.contains(&link.source));
            prop_assert_ne!(&link.source, &link.target);
        }
        for node in outcome.graph.nodes.iter().skip(1) {
            prop_assert!(outcome.graph.links.iter().any(|l| l.target == node.id));
        }
    }

    /// Depth zero materializes exactly the seed.
    #[test]
    fn depth_zero_is_seed_only(edges in arb_graph(), fan_out in 1usize..5) {
        let fake = build_fake(&edges, &HashSet::new());
        let outcome = run_crawl(&fake, CrawlLimits::new(0, fan_out));

        prop_assert_eq!(outcome.graph.nodes.len(), 1);
        prop_assert!(outcome.graph.links.is_empty());
        prop_assert!(fake.related_calls().is_empty());
    }
}
