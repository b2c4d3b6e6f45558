use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32, z: i32) -> Coord {
        Coord { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// A 1x1xN cuboid spanning every cell between its two corners, inclusive.
///
/// The corners are not normalized: `start` may lie above or beyond `end` on any
/// axis, so everything goes through [`Brick::min`] and [`Brick::max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Brick {
    pub start: Coord,
    pub end: Coord,
}

impl Brick {
    pub fn new(start: Coord, end: Coord) -> Brick {
        Brick { start, end }
    }

    pub fn min(&self, axis: Axis) -> i32 {
        self.start.get(axis).min(self.end.get(axis))
    }

    pub fn max(&self, axis: Axis) -> i32 {
        self.start.get(axis).max(self.end.get(axis))
    }

    pub fn min_z(&self) -> i32 {
        self.min(Axis::Z)
    }

    #[cfg(test)]
    pub(crate) fn volume(&self) -> usize {
        Axis::ALL
            .iter()
            .map(|&axis| (self.max(axis) - self.min(axis) + 1) as usize)
            .product()
    }

    /// Closed-interval intersection on every axis.
    pub fn overlaps(&self, other: &Brick) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.max(axis) >= other.min(axis) && other.max(axis) >= self.min(axis))
    }

    pub fn touches_ground(&self, floor: i32) -> bool {
        self.min_z() == floor
    }

    /// The same brick, one unit lower.
    pub fn dropped(&self) -> Brick {
        Brick {
            start: Coord::new(self.start.x, self.start.y, self.start.z - 1),
            end: Coord::new(self.end.x, self.end.y, self.end.z - 1),
        }
    }

    pub fn has_negative_coord(&self) -> bool {
        Axis::ALL.iter().any(|&axis| self.min(axis) < 0)
    }
}

impl fmt::Display for Brick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick((x1, y1, z1): (i32, i32, i32), (x2, y2, z2): (i32, i32, i32)) -> Brick {
        Brick::new(Coord::new(x1, y1, z1), Coord::new(x2, y2, z2))
    }

    fn flipped(b: Brick) -> Brick {
        Brick::new(b.end, b.start)
    }

    fn samples() -> Vec<Brick> {
        vec![
            brick((1, 0, 1), (1, 2, 1)),
            brick((0, 0, 2), (2, 0, 2)),
            brick((0, 2, 3), (2, 2, 3)),
            brick((0, 0, 4), (0, 2, 4)),
            brick((1, 1, 8), (1, 1, 9)),
            brick((1, 1, 9), (1, 1, 9)),
            brick((0, 1, 1), (2, 1, 1)),
            brick((5, 5, 5), (5, 5, 5)),
        ]
    }

    #[test]
    fn overlap_is_symmetric() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn endpoint_order_does_not_matter() {
        for a in samples() {
            for b in samples() {
                let expected = a.overlaps(&b);
                assert_eq!(flipped(a).overlaps(&b), expected);
                assert_eq!(a.overlaps(&flipped(b)), expected);
                assert_eq!(flipped(a).overlaps(&flipped(b)), expected);
            }

            assert_eq!(flipped(a).touches_ground(1), a.touches_ground(1));
            assert_eq!(flipped(a).min_z(), a.min_z());
            assert_eq!(flipped(a).volume(), a.volume());
        }
    }

    #[test]
    fn overlap() {
        // crossing in the middle cell
        assert!(brick((1, 0, 1), (1, 2, 1)).overlaps(&brick((0, 1, 1), (2, 1, 1))));
        // touching ends count, the intervals are closed
        assert!(brick((0, 0, 0), (0, 0, 3)).overlaps(&brick((0, 0, 3), (0, 0, 5))));
        // stacked, not overlapping
        assert!(!brick((0, 0, 2), (2, 0, 2)).overlaps(&brick((0, 0, 3), (2, 0, 3))));
        // same height, parallel
        assert!(!brick((0, 0, 2), (2, 0, 2)).overlaps(&brick((0, 1, 2), (2, 1, 2))));
    }

    #[test]
    fn ground_contact_through_either_endpoint() {
        let upright = brick((3, 3, 0), (3, 3, 4));
        assert!(upright.touches_ground(0));
        assert!(flipped(upright).touches_ground(0));

        let flat = brick((0, 0, 0), (0, 4, 0));
        assert!(flat.touches_ground(0));
        assert!(!flat.touches_ground(1));

        assert!(!brick((1, 1, 8), (1, 1, 9)).touches_ground(0));
    }

    #[test]
    fn dropping() {
        let b = brick((1, 1, 9), (1, 1, 8));
        assert_eq!(b.dropped(), brick((1, 1, 8), (1, 1, 7)));
        assert_eq!(b.dropped().min_z(), b.min_z() - 1);
        assert_eq!(b.dropped().volume(), b.volume());
    }

    #[test]
    fn volume() {
        assert_eq!(brick((0, 0, 1), (0, 0, 1)).volume(), 1);
        assert_eq!(brick((2, 0, 1), (0, 0, 1)).volume(), 3);
        assert_eq!(brick((1, 1, 8), (1, 1, 9)).volume(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(brick((1, 0, 1), (1, 2, 1)).to_string(), "1,0,1~1,2,1");
    }
}
