//! Union-Find (Disjoint Set Union) over a dense index space
//!
//! The intersection grouper indexes one page's classified lines as
//! `0..n` (all horizontal lines first, then all vertical) and unions every
//! intersecting pair; connected components of that relation are the
//! candidate tables. Indices are dense by construction, so the structure is
//! backed by flat vectors rather than hash maps.

/// Disjoint-set structure with path compression and union by rank.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Create a new `UnionFind` over indices `0..n`, each in its own set.
    #[must_use = "returns a new disjoint-set structure"]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements.
    #[inline]
    #[must_use = "returns the element count"]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure is empty.
    #[inline]
    #[must_use = "returns whether the structure is empty"]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the root of element `x` with path compression.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression: point every node on the walk at the root
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Union the sets containing `a` and `b` by rank.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_b] = root_a;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_a] = root_b;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
    }

    /// Partition all elements into `(root, members)` groups.
    ///
    /// Groups are ordered by ascending root index, and members within a
    /// group by ascending element index. This is the reproducible component
    /// order the rest of the pipeline relies on.
    #[must_use = "returns the connected components"]
    pub fn groups(&mut self) -> Vec<(usize, Vec<usize>)> {
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); self.len()];
        for x in 0..self.len() {
            let root = self.find(x);
            by_root[root].push(x);
        }
        by_root
            .into_iter()
            .enumerate()
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }
}
