//! Weighted undirected edge as supplied by the caller.

use std::cmp::Ordering;

/// A weighted undirected edge of the input graph.
///
/// Endpoints are 1-based node identifiers and are stored exactly as supplied;
/// the rendering boundary reports them verbatim. `label` preserves the edge's
/// 1-based position in the original input list, independent of sort order.
///
/// # Examples
/// ```
/// use mwst_core::Edge;
///
/// let edge = Edge::new(1, 2, 4.5, 1);
/// assert_eq!(edge.source(), 1);
/// assert_eq!(edge.target(), 2);
/// assert_eq!(edge.weight(), 4.5);
/// assert_eq!(edge.label(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
    label: usize,
}

impl Edge {
    /// Creates an edge between `source` and `target` with the given weight
    /// and 1-based input label.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64, label: usize) -> Self {
        Self {
            source,
            target,
            weight,
            label,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the 1-based position of the edge in the original input list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn label(&self) -> usize { self.label }

    /// Returns `true` when both endpoints name the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl Eq for Edge {}

// Ascending weight with a deterministic tie-break on the input label, so
// repeated runs select the same edges among equal weights. Labels are unique
// per input list, so the ordering is total.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
