use fxhash::FxHashSet;

use crate::{geometry::Brick, graph::SupportGraph};

/// Bricks that are the only thing holding up some other brick.
pub fn unsafe_bricks(graph: &SupportGraph) -> FxHashSet<Brick> {
    graph
        .iter()
        .filter(|(_, below)| below.len() == 1)
        .flat_map(|(_, below)| below.iter().copied())
        .collect()
}

/// How many bricks can be disintegrated without anything else falling.
pub fn safe_count(graph: &SupportGraph) -> usize {
    let load_bearing = unsafe_bricks(graph);

    let safe = graph
        .bricks()
        .filter(|brick| !load_bearing.contains(*brick))
        .count();

    log::debug!(
        "{safe} of {} bricks are safe to disintegrate, {} are load-bearing",
        graph.len(),
        load_bearing.len()
    );

    safe
}
