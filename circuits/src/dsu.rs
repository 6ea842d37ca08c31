/// A Disjoint Set Union (DSU) with path compression and union by size.
///
/// Every index in `0..n` starts out as its own singleton root. Components only
/// ever merge, so the number of live components is monotonically decreasing.
#[derive(Debug, Clone)]
pub struct Dsu {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    /// Tracks how many disjoint sets currently exist.
    components: usize,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
            components: n,
        }
    }

    /// Number of live components.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of `i`, repointing every node on the way directly at it.
    ///
    /// Panics if `i` is out of range.
    pub fn find(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }

        root
    }

    /// Unifies sets. Returns `true` if a merge actually occurred (sets were disjoint).
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.sizes[root_i] < self.sizes[root_j] {
            self.parent[root_i] = root_j;
            self.sizes[root_j] += self.sizes[root_i];
        } else {
            self.parent[root_j] = root_i;
            self.sizes[root_i] += self.sizes[root_j];
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// Size of the component containing `i`.
    pub fn size_of(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.sizes[root]
    }

    /// One size per live component, in root index order.
    pub fn sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .map(|(i, _)| self.sizes[i])
            .collect()
    }
}
