use crate::error::{PercolationError, Result};
use crate::union_find::DisjointSetUnion;
use log::trace;

/// Orthogonal neighbor offsets as (row, col)
const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// n-by-n percolation system.
///
/// Connectivity is tracked twice. `percolation` owns both a virtual top and a
/// virtual bottom node so `percolates()` is a single query. `fullness` only has
/// the virtual top, so a bottom-row site never becomes full by routing through
/// the virtual bottom (backwash).
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    n: usize,
    /// Row-major open flags
    open: Vec<bool>,
    open_sites: usize,
    percolation: DisjointSetUnion,
    fullness: DisjointSetUnion,
    top: usize,
    bottom: usize,
}

impl PercolationGrid {
    /// Create an n-by-n grid with every site closed
    pub fn new(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(PercolationError::invalid(format!(
                "grid size must be positive, got {}",
                n
            )));
        }
        let n = n as usize;
        let sites = n
            .checked_mul(n)
            .ok_or_else(|| PercolationError::invalid(format!("grid size {} is too large", n)))?;

        Ok(Self {
            n,
            open: vec![false; sites],
            open_sites: 0,
            percolation: DisjointSetUnion::new(sites + 2)?,
            fullness: DisjointSetUnion::new(sites + 1)?,
            top: sites,
            bottom: sites + 1,
        })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.n
    }

    fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.n as i64 && col >= 0 && col < self.n as i64
    }

    /// Bounds-check and map (row, col) to its flat site id
    fn index(&self, row: i64, col: i64) -> Result<usize> {
        if !self.in_bounds(row, col) {
            return Err(PercolationError::OutOfRange { row, col, n: self.n });
        }
        Ok(row as usize * self.n + col as usize)
    }

    /// Open the site at (row, col) if it is not open already
    pub fn open(&mut self, row: i64, col: i64) -> Result<()> {
        let idx = self.index(row, col)?;
        if self.open[idx] {
            return Ok(());
        }
        self.open[idx] = true;
        self.open_sites += 1;

        for &(dr, dc) in &NEIGHBORS {
            let (nr, nc) = (row + dr, col + dc);
            if !self.in_bounds(nr, nc) {
                continue;
            }
            let nidx = nr as usize * self.n + nc as usize;
            if self.open[nidx] {
                self.percolation.union(idx, nidx)?;
                self.fullness.union(idx, nidx)?;
            }
        }

        if row == 0 {
            self.percolation.union(idx, self.top)?;
            self.fullness.union(idx, self.top)?;
        }
        // Virtual bottom lives in the percolation structure only
        if row as usize == self.n - 1 {
            self.percolation.union(idx, self.bottom)?;
        }

        trace!("opened ({}, {}), {} open", row, col, self.open_sites);
        Ok(())
    }

    pub fn is_open(&self, row: i64, col: i64) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.open[idx])
    }

    /// An open site connected to the top row through open sites
    pub fn is_full(&mut self, row: i64, col: i64) -> Result<bool> {
        let idx = self.index(row, col)?;
        self.fullness.connected(idx, self.top)
    }

    pub fn percolates(&mut self) -> bool {
        // Both ids are fixed members of the universe
        self.percolation
            .connected(self.top, self.bottom)
            .unwrap_or(false)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Fraction of all sites currently open
    pub fn open_fraction(&self) -> f64 {
        self.open_sites as f64 / self.open.len() as f64
    }
}
