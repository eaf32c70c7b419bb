//! th-core: Core game logic for Treasure Hunt
//!
//! A hunter travels from town to town buying gear, digging for gold, getting
//! into brawls and searching for the three treasures that win the game. This
//! crate holds the rules and no I/O: every roll comes from an injected
//! [`RandomSource`], every message is a [`News`], and the win and loss
//! endings are returned as values rather than ending the process.

pub mod config;
pub mod errors;
pub mod news;
pub mod object;
pub mod player;
pub mod shop;
pub mod town;

mod consts;
mod gameloop;
mod rng;

pub use config::{Difficulty, GameConfig};
pub use consts::*;
pub use errors::{ConfigError, TownError, TradeError};
pub use gameloop::{Command, GameLoop, GameLoopResult, GameState};
pub use news::{News, Span, Tint};
pub use object::{Item, Treasure};
pub use player::{Ending, Hunter, Kit};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use shop::{GeneralStore, Shop, ShopVisit};
pub use town::{Terrain, Town};
