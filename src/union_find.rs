// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use crate::error::{PercolationError, Result};

/// Weighted quick-union with path compression over a fixed universe `0..len`.
#[derive(Debug, Clone)]
pub struct DisjointSetUnion {
    parent: Vec<usize>,
    /// Set size, only meaningful at roots
    size: Vec<usize>,
    count: usize,
}

impl DisjointSetUnion {
    /// Create `len` singleton sets
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(PercolationError::invalid(
                "union-find universe must contain at least one element",
            ));
        }
        Ok(Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        })
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn count(&self) -> usize {
        self.count
    }

    fn validate(&self, index: usize) -> Result<()> {
        if index >= self.parent.len() {
            return Err(PercolationError::IndexOutOfRange {
                index,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Canonical representative of the set containing `x`.
    ///
    /// Every node on the walked path is re-pointed at the root.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.validate(x)?;
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merge the sets containing `a` and `b`. Returns false if they were
    /// already joined.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let mut a_root = self.find(a)?;
        let mut b_root = self.find(b)?;
        if a_root == b_root {
            return Ok(false);
        }
        if self.size[a_root] < self.size[b_root] {
            std::mem::swap(&mut a_root, &mut b_root);
        }
        self.parent[b_root] = a_root;
        self.size[a_root] += self.size[b_root];
        self.count -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of elements in the set containing `x`
    pub fn set_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }
}
