//! Shared fixture types for the MST property suite.

use proptest::prelude::*;

use crate::Edge;

/// A generated graph together with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub node_count: usize,
    pub edges: Vec<Edge>,
    pub distribution: WeightDistribution,
}

/// Weight/topology families the strategies generate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Distinct continuous weights; the MST is unique.
    Unique,
    /// Few weight values shared by many edges; stresses tie-breaking.
    ManyIdentical,
    /// A random spanning tree plus a few extras; connected by construction.
    Sparse,
    /// Near-complete graph on a small node count.
    Dense,
    /// Several components with no cross edges.
    Disconnected,
}

// Manual Arbitrary so ManyIdentical (the tie-break stress case) is sampled
// more often than the rest.
impl Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<Just<Self>>,
        proptest::strategy::WA<Just<Self>>,
        proptest::strategy::WA<Just<Self>>,
        proptest::strategy::WA<Just<Self>>,
        proptest::strategy::WA<Just<Self>>,
    )>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
