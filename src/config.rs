use crate::geometry::Brick;

/// The ground plane. Bricks come to rest one unit above it.
pub const FLOOR: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub floor: i32,
    /// Upper bound on settle iterations, derived from the input when `None`
    pub step_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            floor: FLOOR,
            step_limit: None,
        }
    }
}

impl Config {
    /// Every brick rests at most `min_z - floor - 1` steps lower than where it
    /// started, plus one final step to find out it's blocked.
    pub fn step_limit_for(&self, bricks: &[Brick]) -> usize {
        self.step_limit.unwrap_or_else(|| {
            bricks
                .iter()
                .map(|b| (i64::from(b.min_z()) - i64::from(self.floor)).max(0) as usize)
                .sum::<usize>()
                + bricks.len()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coord;

    #[test]
    fn derived_step_limit() {
        let bricks = [
            Brick::new(Coord::new(0, 0, 1), Coord::new(0, 0, 1)),
            Brick::new(Coord::new(0, 0, 5), Coord::new(0, 0, 7)),
        ];

        assert_eq!(Config::default().step_limit_for(&bricks), 1 + 5 + 2);
        assert_eq!(
            Config {
                step_limit: Some(3),
                ..Config::default()
            }
            .step_limit_for(&bricks),
            3
        );
    }

    #[test]
    fn step_limit_with_lowest_floor() {
        let bricks = [Brick::new(Coord::new(0, 0, 1), Coord::new(0, 0, 1))];
        let config = Config {
            floor: i32::MIN,
            step_limit: None,
        };

        // 1 - i32::MIN, plus one step for the brick itself
        assert_eq!(config.step_limit_for(&bricks), (1usize << 31) + 1 + 1);
    }
}
