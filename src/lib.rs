pub mod chain;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod parse;
pub mod settle;
pub mod stability;

#[cfg(test)]
pub(crate) const EXAMPLE: &str = include_str!("../tests/example.txt");

pub use config::{Config, FLOOR};
pub use error::{Error, Result, Violation};
pub use geometry::{Axis, Brick, Coord};
pub use graph::{SupportGraph, Supporters};

/// Number of bricks that can be safely disintegrated once everything has settled.
pub fn solve_part1(bricks: &[Brick]) -> Result<usize> {
    let graph = settle::settle(bricks, &Config::default())?;
    Ok(stability::safe_count(&graph))
}

/// Total number of other bricks that would fall, summed over disintegrating
/// each brick on its own.
pub fn solve_part2(bricks: &[Brick]) -> Result<usize> {
    let graph = settle::settle(bricks, &Config::default())?;
    Ok(chain::chain_total(&graph))
}
