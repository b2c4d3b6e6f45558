use crate::{
    config::Config,
    error::{Result, Violation},
    geometry::Brick,
    graph::{SupportGraph, Supporters},
};

fn validate(bricks: &[Brick], floor: i32) -> Result<()> {
    for &brick in bricks {
        if brick.has_negative_coord() {
            return Err(Violation::NegativeCoordinate { brick }.into());
        }

        if brick.min_z() <= floor {
            return Err(Violation::BelowFloor { brick, floor }.into());
        }
    }

    Ok(())
}

/// Lets every brick fall one unit at a time until it's blocked by the ground
/// or by an already settled brick, and records what it ended up resting on.
///
/// Bricks are handled lowest first, so whatever a brick could land on has
/// already settled by the time it starts falling.
pub fn settle(bricks: &[Brick], config: &Config) -> Result<SupportGraph> {
    validate(bricks, config.floor)?;

    let limit = config.step_limit_for(bricks);
    let mut steps = 0;

    // top of the stack is the lowest brick
    let mut falling = bricks.to_vec();
    falling.sort_by_key(|b| std::cmp::Reverse(b.min_z()));

    let mut graph = SupportGraph::default();

    while let Some(brick) = falling.pop() {
        steps += 1;
        if steps > limit {
            return Err(Violation::StepLimitExceeded { limit }.into());
        }

        let lowered = brick.dropped();

        let below = graph
            .bricks()
            .filter(|settled| settled.overlaps(&lowered))
            .copied()
            .collect::<Supporters>();

        if lowered.touches_ground(config.floor) || !below.is_empty() {
            log::trace!("{brick} rests on {} brick(s)", below.len());
            graph.insert(brick, below);
        } else {
            falling.push(lowered);
        }
    }

    log::debug!("settled {} bricks in {steps} steps", graph.len());

    Ok(graph)
}
