use std::fmt;

/// Errors raised by the grid, the union-find and the estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// Non-positive grid size, universe size or trial count
    InvalidArgument(String),
    /// Grid coordinate outside [0, n)
    OutOfRange { row: i64, col: i64, n: usize },
    /// Union-find element outside [0, len)
    IndexOutOfRange { index: usize, len: usize },
}

impl PercolationError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        PercolationError::InvalidArgument(msg.into())
    }

    /// True for both coordinate and raw index range failures
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            PercolationError::OutOfRange { .. } | PercolationError::IndexOutOfRange { .. }
        )
    }
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            PercolationError::OutOfRange { row, col, n } => write!(
                f,
                "site ({}, {}) is out of range for a {}x{} grid",
                row, col, n, n
            ),
            PercolationError::IndexOutOfRange { index, len } => {
                write!(f, "element {} is out of range [0, {})", index, len)
            }
        }
    }
}

impl std::error::Error for PercolationError {}

pub type Result<T> = std::result::Result<T, PercolationError>;
