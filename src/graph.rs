use fxhash::{FxHashMap, FxHashSet};

use crate::geometry::Brick;

pub type Supporters = FxHashSet<Brick>;

/// Settled bricks, each with the bricks it rests directly on.
///
/// Support is contact only, never transitive. An empty set of supporters means
/// the brick lies on the ground.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportGraph {
    supports: FxHashMap<Brick, Supporters>,
}

impl SupportGraph {
    pub(crate) fn insert(&mut self, brick: Brick, supporters: Supporters) {
        self.supports.insert(brick, supporters);
    }

    pub(crate) fn as_map(&self) -> &FxHashMap<Brick, Supporters> {
        &self.supports
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn bricks(&self) -> impl Iterator<Item = &Brick> {
        self.supports.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Brick, &Supporters)> {
        self.supports.iter()
    }

    pub fn supporters(&self, brick: &Brick) -> Option<&Supporters> {
        self.supports.get(brick)
    }

    /// Entries ordered bottom-up, for stable output.
    pub fn sorted(&self) -> Vec<(&Brick, Vec<&Brick>)> {
        let mut entries = self
            .supports
            .iter()
            .map(|(brick, below)| {
                let mut below = below.iter().collect::<Vec<_>>();
                below.sort_by_key(|b| (b.min_z(), **b));
                (brick, below)
            })
            .collect::<Vec<_>>();

        entries.sort_by_key(|(brick, _)| (brick.min_z(), **brick));
        entries
    }
}

impl FromIterator<(Brick, Supporters)> for SupportGraph {
    fn from_iter<I: IntoIterator<Item = (Brick, Supporters)>>(iter: I) -> Self {
        SupportGraph {
            supports: iter.into_iter().collect(),
        }
    }
}
