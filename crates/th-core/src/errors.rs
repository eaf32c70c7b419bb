//! Error types
//!
//! Rejected trades and misuse of a town are ordinary values; only the win and
//! loss endings stop a game, and those are not errors (see [`crate::Ending`]).

use std::path::PathBuf;

use thiserror::Error;

use crate::object::Item;
use crate::player::Hunter;

/// Why a purchase or sale was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeError {
    #[error("the {item} is not for sale")]
    Unavailable { item: Item },

    #[error("you need {cost} gold for the {item} but only have {gold}")]
    CannotAfford { item: Item, cost: i32, gold: i32 },

    #[error("you already have a {item}")]
    AlreadyOwned { item: Item },

    #[error("there is no room in your kit for the {item}")]
    KitFull { item: Item },

    #[error("you don't have a {item} to sell")]
    NotOwned { item: Item },

    #[error("nobody will buy the {item}")]
    Worthless { item: Item },
}

/// A town was asked to do something out of order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TownError {
    #[error("no hunter has arrived in this town yet")]
    NoHunter,

    /// Carries the hunter that was turned away
    #[error("this town already has a visitor, {} was turned away", visitor.name())]
    AlreadyOccupied { visitor: Box<Hunter> },
}

/// Failure loading a game configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("starting gold must be within 0..={max}, got {gold}")]
    StartingGold { gold: i32, max: i32 },

    #[error("toughness must be within 0.0..=1.0, got {0}")]
    Toughness(f64),

    #[error("sell markdown must be within 0.0..=1.0, got {0}")]
    Markdown(f64),
}
