//! Items and treasures

mod item;
mod treasure;

pub use item::Item;
pub use treasure::Treasure;
