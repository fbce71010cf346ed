//! Error types for adjacency building and coloring.

/// Main error type for chromap
#[derive(Debug, thiserror::Error)]
pub enum ChromapError {
    /// A palette must hold at least one color token.
    #[error("palette is empty")]
    EmptyPalette,

    /// The greedy colorer exhausted every palette color for this region.
    ///
    /// This is the expected failure mode of the heuristic, not a bug:
    /// recover externally by rerunning with a different seed or a larger
    /// palette. The core performs no backtracking.
    #[error("no available color for region '{0}'")]
    NoColorFor(String),
}

pub type Result<T> = std::result::Result<T, ChromapError>;
