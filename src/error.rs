use thiserror::Error;

use crate::geometry::Brick;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed brick on line {line}: {content:?}")]
    MalformedInput { line: usize, content: String },

    #[error("invariant violated: {0}")]
    InvariantViolation(#[from] Violation),
}

/// Internal-consistency failures. Well-formed input never produces these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("brick {brick} has a negative coordinate")]
    NegativeCoordinate { brick: Brick },

    #[error("brick {brick} is not above the floor at z={floor}")]
    BelowFloor { brick: Brick, floor: i32 },

    #[error("settling did not finish within {limit} steps")]
    StepLimitExceeded { limit: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
