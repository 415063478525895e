//! Disjoint-set (union-find) with path compression.
//!
//! Tracks a partition of ids `0..len` into components. `find` compresses the
//! traversed path; `union` attaches the root of the first argument's
//! component to the root of the second (asymmetric attach, no rank or size
//! heuristic). Path compression alone keeps amortised lookups near-constant
//! for the workloads the MST builder produces.

/// Partition of ids `0..len` into disjoint components.
///
/// # Examples
/// ```
/// use mwst_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(!sets.same_set(1, 3));
/// assert!(sets.union(1, 3));
/// assert!(sets.same_set(1, 3));
/// assert_eq!(sets.components(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates a partition of `len` singleton components, one per id.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            components: len,
        }
    }

    /// Returns the representative of `id`'s component, compressing the
    /// traversed path so every visited id points directly at the root.
    ///
    /// # Panics
    /// Panics when `id >= len`. Callers index within the capacity given to
    /// [`Self::new`]; the MST builder validates endpoints before any lookup.
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = id;
        while self.parent[current] != current {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the components containing `first` and `second` by attaching
    /// `first`'s root to `second`'s root. Returns `true` when two distinct
    /// components were merged and `false` for the no-op case.
    ///
    /// # Panics
    /// Panics when either id is `>= len`, as for [`Self::find`].
    pub fn union(&mut self, first: usize, second: usize) -> bool {
        let first_root = self.find(first);
        let second_root = self.find(second);
        if first_root == second_root {
            return false;
        }
        self.parent[first_root] = second_root;
        self.components -= 1;
        true
    }

    /// Returns whether both ids currently belong to the same component.
    ///
    /// # Panics
    /// Panics when either id is `>= len`, as for [`Self::find`].
    pub fn same_set(&mut self, first: usize, second: usize) -> bool {
        self.find(first) == self.find(second)
    }

    /// Returns the number of remaining components. Decreases by exactly one
    /// on each merging [`Self::union`]; never increases.
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }
}
