//! Disjoint-set forest with path compression.
//!
//! A plain parent array: no union-by-rank, since grids are small and `find`
//! flattens every path it walks.  `find` is iterative, so pathological chains
//! cannot overflow the stack.

/// Disjoint sets over the integers `0..n`.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Every element starts as its own singleton set.
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s set.  Every node visited on the way up is
    /// re-parented directly onto the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`.  Returns `false` (and changes nothing)
    /// if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        self.parent[x_root] = y_root;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of distinct sets.
    pub fn component_count(&mut self) -> usize {
        (0..self.parent.len()).filter(|&x| self.find(x) == x).count()
    }
}
