//! Percolation on an n-by-n grid and Monte Carlo estimation of the
//! percolation threshold.

pub mod config;
pub mod error;
pub mod percolation;
pub mod settings;
pub mod stats;
pub mod union_find;

pub use config::RunConfig;
pub use error::{PercolationError, Result};
pub use percolation::PercolationGrid;
pub use settings::SamplingPolicy;
pub use stats::{PercolationStats, StatsSummary};
pub use union_find::DisjointSetUnion;
