use fxhash::{FxHashMap, FxHashSet};
use rayon::prelude::*;

use crate::{
    geometry::Brick,
    graph::{SupportGraph, Supporters},
};

/// How many other bricks come down if `brick` is disintegrated.
///
/// Each pass collects every remaining brick whose supporters have all fallen,
/// checked against the fallen set as it was when the pass started. So the
/// order of entries within a pass can't change the outcome, and a whole batch
/// of bricks can fall at once. Bricks on the ground have no supporters and
/// never fall.
pub fn chain_count(graph: &SupportGraph, brick: &Brick) -> usize {
    let mut fallen = FxHashSet::from_iter([*brick]);

    let mut remaining: FxHashMap<&Brick, &Supporters> = graph
        .as_map()
        .iter()
        .filter(|(above, _)| *above != brick)
        .collect();

    loop {
        let (falling, standing): (FxHashMap<_, _>, FxHashMap<_, _>) =
            remaining.into_iter().partition(|(_, below)| {
                !below.is_empty() && below.iter().all(|b| fallen.contains(b))
            });

        if falling.is_empty() {
            break;
        }

        fallen.extend(falling.into_keys().copied());
        remaining = standing;
    }

    fallen.len() - 1
}

/// Sum of [`chain_count`] over every brick in the graph.
pub fn chain_total(graph: &SupportGraph) -> usize {
    let bricks = graph.bricks().collect::<Vec<_>>();

    let total: usize = bricks
        .par_iter()
        .map(|brick| chain_count(graph, brick))
        .sum();

    log::debug!("{total} bricks fall across {} chain reactions", bricks.len());

    total
}
