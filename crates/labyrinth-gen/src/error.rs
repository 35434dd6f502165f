use thiserror::Error;

/// Invalid arguments passed to maze construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("special cell fraction must be within [0, 1], got {0}")]
    InvalidFraction(f64),
    #[error("unknown generator `{0}`, expected one of: prim, kruskal, backtracker")]
    UnknownGenerator(String),
}
