//! Shops
//!
//! A town hands shopping off to whatever implements [`Shop`] and keeps the
//! text it gets back. [`GeneralStore`] is the shop the game ships with.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::UNAVAILABLE;
use crate::config::GameConfig;
use crate::news::{News, Tint};
use crate::object::Item;
use crate::player::Hunter;

/// What the hunter came into the shop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopVisit {
    /// Look at the price list
    Browse,
    Buy(Item),
    Sell(Item),
}

/// Trading counterpart for a town
pub trait Shop {
    fn enter(&mut self, hunter: &mut Hunter, visit: ShopVisit) -> News;
}

/// The store found in every town
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneralStore {
    /// Fraction of the price paid when buying back
    markdown: f64,
    sword_for_sale: bool,
}

impl GeneralStore {
    pub fn new(markdown: f64, sword_for_sale: bool) -> Self {
        Self {
            markdown,
            sword_for_sale,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.sell_markdown, config.sword_for_sale)
    }

    /// Asking price, or [`UNAVAILABLE`]
    pub fn cost_of(&self, item: Item) -> i32 {
        match item {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Boots => 8,
            Item::Shovel => 8,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Sword if self.sword_for_sale => 0,
            Item::Sword => UNAVAILABLE,
        }
    }

    /// What the store pays for `item`, or [`UNAVAILABLE`]
    pub fn buy_back_price(&self, item: Item) -> i32 {
        let cost = self.cost_of(item);
        if cost < 0 {
            return UNAVAILABLE;
        }
        (f64::from(cost) * self.markdown) as i32
    }

    /// Everything on the shelves with prices
    pub fn price_list(&self) -> News {
        let mut news = News::plain("We've got the following items for sale:");
        for item in Item::iter() {
            let cost = self.cost_of(item);
            if cost < 0 {
                continue;
            }
            news.newline()
                .tinted(item.to_string(), item.tint())
                .push(": ")
                .tinted(cost.to_string(), Tint::Yellow)
                .push(" gold");
        }
        news
    }
}

impl Shop for GeneralStore {
    fn enter(&mut self, hunter: &mut Hunter, visit: ShopVisit) -> News {
        match visit {
            ShopVisit::Browse => self.price_list(),
            ShopVisit::Buy(item) => match hunter.buy_item(item, self.cost_of(item)) {
                Ok(()) => {
                    let mut news = News::plain("Ye' got yerself a ");
                    news.tinted(item.to_string(), item.tint())
                        .push(". Come again soon.");
                    news
                }
                Err(err) => News::plain(format!("Hmm, {err}. Come back when you can.")),
            },
            ShopVisit::Sell(item) => match hunter.sell_item(item, self.buy_back_price(item)) {
                Ok(()) => {
                    let mut news = News::plain("Pleasure doin' business with you. Here's ");
                    news.tinted(self.buy_back_price(item).to_string(), Tint::Yellow)
                        .push(" gold.");
                    news
                }
                Err(err) => News::plain(format!("Stop stringin' me along: {err}!")),
            },
        }
    }
}
