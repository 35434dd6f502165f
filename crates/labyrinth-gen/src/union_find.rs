/// Disjoint-set forest over `0..n`.
///
/// `find` is iterative and compresses the whole path it walks; `union`
/// hangs the smaller tree under the larger one.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`. Returns `false` if they were
    /// already the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.sets -= 1;
        true
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_merges_once() {
        let mut ds = DisjointSet::new(5);
        assert_eq!(ds.count(), 5);
        assert!(ds.union(0, 1));
        assert!(ds.union(1, 2));
        assert!(!ds.union(0, 2));
        assert_eq!(ds.find(0), ds.find(2));
        assert_ne!(ds.find(0), ds.find(3));
        assert_eq!(ds.count(), 3);
    }

    #[test]
    fn find_compresses_long_chain() {
        let n = 100_000;
        let mut ds = DisjointSet::new(n);
        // Build a chain by hand, deeper than any recursion would survive.
        for i in 1..n {
            ds.parent[i] = i - 1;
        }
        assert_eq!(ds.find(n - 1), 0);
        assert!(ds.parent.iter().all(|&p| p == 0));
    }

    #[test]
    fn empty_forest() {
        let ds = DisjointSet::new(0);
        assert_eq!(ds.count(), 0);
    }
}
