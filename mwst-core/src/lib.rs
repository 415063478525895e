//! Minimum weight spanning tree core library.
//!
//! Computes a minimum spanning tree (or forest, when the input graph is
//! disconnected) of a weighted undirected graph with Kruskal's algorithm,
//! driven by a path-compressing disjoint-set. The library works entirely on
//! in-memory graphs: callers supply a node count and an edge list and receive
//! the selected edges plus the total weight. Reading graph descriptions and
//! rendering results belong to the boundary crates.

mod edge;
mod error;
mod mst;
mod union_find;

pub use crate::{
    edge::Edge,
    error::{MstError, MstErrorCode, Result},
    mst::{SpanningForest, kruskal},
    union_find::DisjointSet,
};
