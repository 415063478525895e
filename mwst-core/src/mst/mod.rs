//! Kruskal minimum spanning tree/forest construction.
//!
//! Sorts the edge list by ascending weight and scans it once, accepting each
//! edge whose endpoints lie in distinct components of a path-compressing
//! disjoint-set. Self-loops fail that check trivially and are skipped by the
//! same code path; no pre-filtering is needed.

use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{MstError, Result},
    union_find::DisjointSet,
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Selected edges appear in processing order, i.e. ascending weight.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the selected edges in ascending-weight processing order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Node ids are 1-based: every endpoint must lie in `[1, node_count]`. The
/// input slice is never mutated; the builder sorts a working copy by
/// ascending weight, breaking ties by input label so repeated runs select
/// the same edges. A disconnected input yields a spanning forest with fewer
/// than `node_count - 1` edges; zero edges yield an empty forest.
///
/// # Errors
///
/// Returns an error when:
/// - `node_count == 0`
/// - an edge references a node id outside `[1, node_count]`
/// - an edge weight is non-finite
///
/// # Examples
/// ```
/// use mwst_core::{Edge, kruskal};
///
/// let edges = [
///     Edge::new(1, 2, 1.0, 1),
///     Edge::new(2, 3, 2.0, 2),
///     Edge::new(3, 4, 3.0, 3),
///     Edge::new(1, 4, 4.0, 4),
/// ];
/// let forest = kruskal(4, &edges)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges().len(), 3);
/// assert_eq!(forest.total_weight(), 6.0);
/// # Ok::<(), mwst_core::MstError>(())
/// ```
#[instrument(skip(edges), fields(edge_count = edges.len()))]
pub fn kruskal(node_count: usize, edges: &[Edge]) -> Result<SpanningForest> {
    if node_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    validate_edges(node_count, edges)?;

    let mut sorted: Vec<Edge> = edges.to_vec();
    sorted.sort_unstable();

    // Slot 0 of the table is an inert singleton; node ids start at 1.
    let mut sets = DisjointSet::new(node_count + 1);
    let mut selected = Vec::with_capacity(node_count.saturating_sub(1));
    let mut total_weight = 0.0_f64;

    for edge in sorted {
        if sets.same_set(edge.source(), edge.target()) {
            continue;
        }
        sets.union(edge.source(), edge.target());
        total_weight += edge.weight();
        selected.push(edge);
    }

    // The table holds node_count + 1 slots; subtract the inert slot 0.
    let component_count = sets.components() - 1;
    debug!(
        selected = selected.len(),
        total_weight, component_count, "kruskal scan complete"
    );

    Ok(SpanningForest {
        edges: selected,
        total_weight,
        component_count,
    })
}

fn validate_edges(node_count: usize, edges: &[Edge]) -> Result<()> {
    for edge in edges {
        for node in [edge.source(), edge.target()] {
            if node == 0 || node > node_count {
                return Err(MstError::InvalidNodeId {
                    node,
                    node_count,
                    label: edge.label(),
                });
            }
        }
        if !edge.weight().is_finite() {
            return Err(MstError::NonFiniteWeight {
                left: edge.source(),
                right: edge.target(),
                label: edge.label(),
            });
        }
    }
    Ok(())
}
