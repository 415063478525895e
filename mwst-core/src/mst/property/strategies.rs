//! Fixture generators for the MST property suite.
//!
//! Each generator produces raw `(source, target, weight)` triples with
//! 1-based node ids and assembles them into labelled [`Edge`] values at the
//! end, so labels always reflect the final input order. Every generator may
//! sprinkle a few self-loops into the list; the builder must skip them
//! regardless of distribution.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 4;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs, kept small to bound the edge count.
const DENSE_MAX_NODES: usize = 24;

/// Generates fixtures covering all weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific distribution; used by the rstest
/// cases where the distribution is chosen explicitly.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let triples = match distribution {
        WeightDistribution::Unique => pairwise_graph(rng, MAX_NODES, (0.2, 0.6), uniform_weight),
        WeightDistribution::ManyIdentical => identical_weights(rng),
        WeightDistribution::Sparse => sparse_connected(rng),
        WeightDistribution::Dense => {
            pairwise_graph(rng, DENSE_MAX_NODES, (0.7, 0.95), uniform_weight)
        }
        WeightDistribution::Disconnected => disconnected(rng),
    };
    assemble(distribution, triples, rng)
}

/// Reassigns labels after shuffling `fixture`'s edge list, modelling the
/// same graph being fed to the builder in a different input order.
pub(super) fn shuffled(fixture: &MstFixture, rng: &mut SmallRng) -> MstFixture {
    let mut triples: Vec<(usize, usize, f64)> = fixture
        .edges
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.weight()))
        .collect();
    for i in (1..triples.len()).rev() {
        let j = rng.gen_range(0..=i);
        triples.swap(i, j);
    }
    MstFixture {
        node_count: fixture.node_count,
        edges: label_in_order(&triples),
        distribution: fixture.distribution,
    }
}

/// Raw triples plus the node count they were generated over.
struct RawGraph {
    node_count: usize,
    triples: Vec<(usize, usize, f64)>,
}

fn uniform_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1_f64..100.0)
}

/// Generates a graph by probabilistically adding an edge between every
/// unique node pair, with weights drawn from `weight_of`.
fn pairwise_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    mut weight_of: impl FnMut(&mut SmallRng) -> f64,
) -> RawGraph {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut triples = Vec::new();

    for source in 1..=node_count {
        for target in (source + 1)..=node_count {
            if rng.gen_bool(edge_probability) {
                triples.push((source, target, weight_of(rng)));
            }
        }
    }

    if triples.is_empty() && node_count >= 2 {
        triples.push((1, 2, weight_of(rng)));
    }

    RawGraph {
        node_count,
        triples,
    }
}

/// Large groups of edges sharing a handful of integral weights; the
/// tie-break stress case.
fn identical_weights(rng: &mut SmallRng) -> RawGraph {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    pairwise_graph(rng, MAX_NODES, (0.3, 0.7), move |r| {
        pool[r.gen_range(0..pool.len())]
    })
}

/// A random spanning tree (guaranteeing connectivity) plus extra edges.
fn sparse_connected(rng: &mut SmallRng) -> RawGraph {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut triples = Vec::new();

    let mut order: Vec<usize> = (1..=node_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    for window in order.windows(2) {
        triples.push((window[0], window[1], uniform_weight(rng)));
    }

    let extra = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra {
        let source = rng.gen_range(1..=node_count);
        let target = rng.gen_range(1..=node_count);
        if source != target {
            triples.push((source, target, uniform_weight(rng)));
        }
    }

    RawGraph {
        node_count,
        triples,
    }
}

/// Two to five components with random internal structure and no cross
/// edges.
fn disconnected(rng: &mut SmallRng) -> RawGraph {
    let component_sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(3..=10))
        .collect();
    let node_count: usize = component_sizes.iter().sum();
    let mut triples = Vec::new();
    let mut offset = 1;

    for &size in &component_sizes {
        let edge_probability = rng.gen_range(0.3..=0.8);
        let before = triples.len();
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(edge_probability) {
                    triples.push((offset + i, offset + j, uniform_weight(rng)));
                }
            }
        }
        // Every multi-node component gets at least one edge.
        if size >= 2 && triples.len() == before {
            triples.push((offset, offset + 1, uniform_weight(rng)));
        }
        offset += size;
    }

    RawGraph {
        node_count,
        triples,
    }
}

/// Inserts a few self-loops at random positions and assigns labels in final
/// list order.
fn assemble(
    distribution: WeightDistribution,
    raw: RawGraph,
    rng: &mut SmallRng,
) -> MstFixture {
    let RawGraph {
        node_count,
        mut triples,
    } = raw;

    for _ in 0..rng.gen_range(0..=3) {
        let node = rng.gen_range(1..=node_count);
        let position = rng.gen_range(0..=triples.len());
        triples.insert(position, (node, node, uniform_weight(rng)));
    }

    MstFixture {
        node_count,
        edges: label_in_order(&triples),
        distribution,
    }
}

fn label_in_order(triples: &[(usize, usize, f64)]) -> Vec<Edge> {
    triples
        .iter()
        .enumerate()
        .map(|(index, &(source, target, weight))| Edge::new(source, target, weight, index + 1))
        .collect()
}
