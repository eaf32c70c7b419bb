//! Core game constants
//!
//! Capacities and the fixed probability tables used by towns.

/// Kit slots for a fresh hunter
pub const KIT_CAPACITY: usize = 7;
/// Kit slots after the capacity upgrade
pub const UPGRADED_KIT_CAPACITY: usize = 8;

/// Distinct treasures needed to win
pub const TREASURES_TO_WIN: usize = 3;

/// Largest starting purse a config may ask for
pub const MAX_STARTING_GOLD: i32 = 100_000;

/// Price that marks an item the shop will not trade
pub const UNAVAILABLE: i32 = -1;

/// Chance of a dig turning up gold
pub const DIG_SUCCESS_CHANCE: f64 = 0.5;
/// Largest gold award from a dig
pub const DIG_MAX_GOLD: u32 = 20;

/// Chance the crossing item breaks when leaving town
pub const ITEM_BREAK_CHANCE: f64 = 0.5;

/// No-trouble thresholds for brawls
pub const TOUGH_NO_TROUBLE_CHANCE: f64 = 0.66;
pub const MILD_NO_TROUBLE_CHANCE: f64 = 0.33;
/// Easy mode scales the brawl-win threshold by this factor
pub const EASY_BRAWL_FACTOR: f64 = 0.75;
/// Largest gold stake in a brawl
pub const BRAWL_MAX_GOLD: u32 = 10;
