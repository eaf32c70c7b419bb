//! Town treasures

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::RandomSource;

/// What lies hidden in a town
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    /// Nothing worth keeping
    Dust,
}

impl Treasure {
    /// Roll a town's treasure, each outcome a quarter of the time
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        let r = rng.roll();
        if r < 0.25 {
            Treasure::Crown
        } else if r < 0.50 {
            Treasure::Trophy
        } else if r < 0.75 {
            Treasure::Gem
        } else {
            Treasure::Dust
        }
    }

    /// Whether this counts towards the win
    pub const fn is_collectible(&self) -> bool {
        !matches!(self, Treasure::Dust)
    }
}
