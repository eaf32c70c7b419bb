//! Terrain surrounding a town

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::object::Item;
use crate::player::Hunter;
use crate::rng::RandomSource;

/// The obstacle around a town. Each kind is crossed with exactly one item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl Terrain {
    /// Item needed to cross
    pub const fn required_item(&self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Jungle => Item::Machete,
            Terrain::Marsh => Item::Boots,
        }
    }

    /// Roll a terrain, each kind a sixth of the time
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        let r = rng.roll();
        if r < 1.0 / 6.0 {
            Terrain::Mountains
        } else if r < 2.0 / 6.0 {
            Terrain::Ocean
        } else if r < 3.0 / 6.0 {
            Terrain::Plains
        } else if r < 4.0 / 6.0 {
            Terrain::Desert
        } else if r < 5.0 / 6.0 {
            Terrain::Jungle
        } else {
            Terrain::Marsh
        }
    }

    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        hunter.has_item_in_kit(self.required_item())
    }
}
