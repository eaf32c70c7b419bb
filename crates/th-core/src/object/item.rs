//! Kit items

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::news::Tint;

/// Everything a hunter can carry in the kit
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Boots,
    Horse,
    Boat,
    Shovel,
    Sword,
}

impl Item {
    /// Tint used when the item is shown in the kit
    pub const fn tint(&self) -> Tint {
        match self {
            Item::Sword => Tint::Red,
            _ => Tint::Purple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Item::from_str("Rope"), Ok(Item::Rope));
        assert_eq!(Item::from_str("SHOVEL"), Ok(Item::Shovel));
        assert!(Item::from_str("lantern").is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for item in Item::iter() {
            assert_eq!(Item::from_str(&item.to_string()), Ok(item));
        }
    }

    #[test]
    fn test_sword_is_red() {
        assert_eq!(Item::Sword.tint(), Tint::Red);
        assert_eq!(Item::Boat.tint(), Tint::Purple);
    }
}
