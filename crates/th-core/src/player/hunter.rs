//! The treasure hunter

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Ending, Kit};
use crate::TREASURES_TO_WIN;
use crate::errors::TradeError;
use crate::news::{News, Tint};
use crate::object::{Item, Treasure};

/// The player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    kit: Kit,
    /// Distinct treasures in the order they were found
    treasures: Vec<Treasure>,
    gold: i32,
}

impl Hunter {
    pub fn new(name: impl Into<String>, starting_gold: i32) -> Self {
        Self {
            name: name.into(),
            kit: Kit::new(),
            treasures: Vec::with_capacity(TREASURES_TO_WIN),
            gold: starting_gold,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn kit(&self) -> &Kit {
        &self.kit
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// Enlarge the kit to its upgraded capacity. Items stay where they are.
    pub fn upgrade_kit(&mut self) -> bool {
        let upgraded = self.kit.upgrade();
        if upgraded {
            debug!(hunter = %self.name, capacity = self.kit.capacity(), "kit upgraded");
        }
        upgraded
    }

    /// Signed gold adjustment; may leave the balance negative
    pub fn change_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
    }

    /// Buy `item` for `cost` gold.
    ///
    /// A hunter carrying a sword is never charged, and the only thing that can
    /// stop the purchase then is already owning the item (or a full kit).
    /// A negative cost marks an item the shop won't sell.
    pub fn buy_item(&mut self, item: Item, cost: i32) -> Result<(), TradeError> {
        let has_sword = self.has_sword();
        if !has_sword {
            if cost < 0 {
                return Err(TradeError::Unavailable { item });
            }
            if self.gold < cost {
                return Err(TradeError::CannotAfford {
                    item,
                    cost,
                    gold: self.gold,
                });
            }
        }
        self.kit.insert(item)?;
        if !has_sword {
            self.gold -= cost;
        }
        debug!(hunter = %self.name, %item, cost, free = has_sword, gold = self.gold, "bought item");
        Ok(())
    }

    /// Sell `item` back for `price` gold
    pub fn sell_item(&mut self, item: Item, price: i32) -> Result<(), TradeError> {
        if price < 0 {
            return Err(TradeError::Worthless { item });
        }
        if !self.kit.remove(item) {
            return Err(TradeError::NotOwned { item });
        }
        self.gold += price;
        debug!(hunter = %self.name, %item, price, gold = self.gold, "sold item");
        Ok(())
    }

    /// Drop `item` from the kit if present
    pub fn remove_item_from_kit(&mut self, item: Item) -> bool {
        self.kit.remove(item)
    }

    pub fn has_item_in_kit(&self, item: Item) -> bool {
        self.kit.contains(item)
    }

    pub fn has_sword(&self) -> bool {
        self.kit.contains(Item::Sword)
    }

    pub fn has_shovel(&self) -> bool {
        self.kit.contains(Item::Shovel)
    }

    /// Record a treasure and check for the win.
    ///
    /// Duplicates and dust are ignored, but the win check still runs.
    pub fn add_treasure(&mut self, treasure: Treasure) -> Option<Ending> {
        if treasure.is_collectible()
            && !self.has_treasure(treasure)
            && self.treasures.len() < TREASURES_TO_WIN
        {
            self.treasures.push(treasure);
            debug!(hunter = %self.name, %treasure, found = self.treasures.len(), "treasure added");
        }
        self.win()
    }

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&treasure)
    }

    /// Victory once every treasure has been found
    pub fn win(&self) -> Option<Ending> {
        if self.treasures.len() != TREASURES_TO_WIN {
            return None;
        }
        info!(hunter = %self.name, gold = self.gold, "hunter won");
        let mut report = self.info();
        report
            .newline()
            .push("Congratulations, you have found the last of the three treasures, you win!");
        Some(Ending::Victory { report })
    }

    /// Defeat if the hunter is in debt after losing `gold_diff` in a brawl.
    ///
    /// Gold is reset to zero before the report is written.
    pub fn lose(&mut self, gold_diff: i32) -> Option<Ending> {
        if self.gold >= 0 {
            return None;
        }
        self.gold = 0;
        info!(hunter = %self.name, gold_diff, "hunter lost");

        let mut report = News::new();
        report
            .push(format!("GAME OVER\nYou are in gold deficit of {gold_diff}"))
            .newline()
            .newline()
            .push("Player Stats: ")
            .newline()
            .append(self.info());
        Some(Ending::Defeat {
            deficit: gold_diff,
            report,
        })
    }

    /// Kit contents separated by spaces
    pub fn inventory(&self) -> News {
        let mut news = News::new();
        for item in self.kit.items() {
            news.tinted(item.to_string(), item.tint()).push(" ");
        }
        news
    }

    /// Name, gold, kit and treasures
    pub fn info(&self) -> News {
        let mut news = News::plain(format!("{} has ", self.name));
        news.tinted(self.gold.to_string(), Tint::Yellow).push(" gold");
        if !self.kit.is_empty() {
            news.push(" and ").append(self.inventory());
        }

        news.push("\nTreasure found: ");
        if self.treasures.is_empty() {
            news.push("none");
        } else {
            for treasure in &self.treasures {
                news.push("a ").tinted(treasure.to_string(), Tint::Blue).push(" ");
            }
        }
        news
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hunter_with(gold: i32, items: &[Item]) -> Hunter {
        let mut hunter = Hunter::new("Tester", gold);
        for &item in items {
            hunter.kit.insert(item).unwrap();
        }
        hunter
    }

    #[test]
    fn test_buy_deducts_cost() {
        let mut hunter = hunter_with(20, &[]);
        assert_eq!(hunter.buy_item(Item::Shovel, 8), Ok(()));
        assert_eq!(hunter.gold(), 12);
        assert!(hunter.has_shovel());
    }

    #[test]
    fn test_buy_rejections_leave_state_alone() {
        let mut hunter = hunter_with(5, &[Item::Rope]);
        let before = hunter.clone();

        assert_eq!(
            hunter.buy_item(Item::Boat, -1),
            Err(TradeError::Unavailable { item: Item::Boat })
        );
        assert_eq!(
            hunter.buy_item(Item::Boat, 20),
            Err(TradeError::CannotAfford {
                item: Item::Boat,
                cost: 20,
                gold: 5
            })
        );
        assert_eq!(
            hunter.buy_item(Item::Rope, 4),
            Err(TradeError::AlreadyOwned { item: Item::Rope })
        );
        assert_eq!(hunter, before);
    }

    #[test]
    fn test_buy_exact_gold_succeeds() {
        let mut hunter = hunter_with(4, &[]);
        assert_eq!(hunter.buy_item(Item::Rope, 4), Ok(()));
        assert_eq!(hunter.gold(), 0);
    }

    #[test]
    fn test_sword_makes_everything_free() {
        let mut hunter = hunter_with(0, &[Item::Sword]);
        assert_eq!(hunter.buy_item(Item::Boat, 20), Ok(()));
        assert_eq!(hunter.buy_item(Item::Water, -1), Ok(()));
        assert_eq!(hunter.gold(), 0);
        assert_eq!(
            hunter.buy_item(Item::Boat, 20),
            Err(TradeError::AlreadyOwned { item: Item::Boat })
        );
    }

    #[test]
    fn test_full_kit_purchase_fails_without_charge() {
        let items = [
            Item::Water,
            Item::Rope,
            Item::Machete,
            Item::Boots,
            Item::Horse,
            Item::Boat,
            Item::Shovel,
        ];
        let mut hunter = hunter_with(50, &items);
        assert_eq!(
            hunter.buy_item(Item::Sword, 10),
            Err(TradeError::KitFull { item: Item::Sword })
        );
        assert_eq!(hunter.gold(), 50);

        assert!(hunter.upgrade_kit());
        assert_eq!(hunter.buy_item(Item::Sword, 10), Ok(()));
        assert_eq!(hunter.gold(), 40);
    }

    #[test]
    fn test_sell_adds_price_and_removes() {
        let mut hunter = hunter_with(10, &[Item::Shovel]);
        assert_eq!(hunter.sell_item(Item::Shovel, 5), Ok(()));
        assert_eq!(hunter.gold(), 15);
        assert!(!hunter.has_shovel());
    }

    #[test]
    fn test_sell_rejections() {
        let mut hunter = hunter_with(10, &[Item::Horse]);
        assert_eq!(
            hunter.sell_item(Item::Horse, -1),
            Err(TradeError::Worthless { item: Item::Horse })
        );
        assert_eq!(
            hunter.sell_item(Item::Boat, 3),
            Err(TradeError::NotOwned { item: Item::Boat })
        );
        assert_eq!(hunter.gold(), 10);
        assert!(hunter.has_item_in_kit(Item::Horse));
    }

    #[test]
    fn test_sell_for_zero_is_allowed() {
        let mut hunter = hunter_with(10, &[Item::Water]);
        assert_eq!(hunter.sell_item(Item::Water, 0), Ok(()));
        assert_eq!(hunter.gold(), 10);
        assert!(hunter.kit().is_empty());
    }

    #[test]
    fn test_change_gold_can_go_negative() {
        let mut hunter = hunter_with(3, &[]);
        hunter.change_gold(-5);
        assert_eq!(hunter.gold(), -2);
    }

    #[test]
    fn test_add_treasure_is_idempotent() {
        let mut hunter = hunter_with(0, &[]);
        assert!(hunter.add_treasure(Treasure::Crown).is_none());
        assert!(hunter.add_treasure(Treasure::Crown).is_none());
        assert_eq!(hunter.treasures(), &[Treasure::Crown]);
    }

    #[test]
    fn test_dust_is_never_recorded() {
        let mut hunter = hunter_with(0, &[]);
        assert!(hunter.add_treasure(Treasure::Dust).is_none());
        assert!(!hunter.has_treasure(Treasure::Dust));
        assert!(hunter.treasures().is_empty());
    }

    #[test]
    fn test_win_only_on_third_distinct_treasure() {
        let mut hunter = hunter_with(0, &[]);
        assert!(hunter.add_treasure(Treasure::Crown).is_none());
        assert!(hunter.add_treasure(Treasure::Trophy).is_none());
        assert!(hunter.add_treasure(Treasure::Trophy).is_none());

        let ending = hunter.add_treasure(Treasure::Gem).expect("third treasure wins");
        assert!(ending.is_victory());
        assert!(ending.report().contains("you win!"));
        assert!(ending.report().contains("a crown a trophy a gem"));
    }

    #[test]
    fn test_change_gold_saturates() {
        let mut hunter = hunter_with(i32::MAX - 3, &[]);
        hunter.change_gold(10);
        assert_eq!(hunter.gold(), i32::MAX);
        hunter.change_gold(-5);
        assert_eq!(hunter.gold(), i32::MAX - 5);
    }

    #[test]
    fn test_lose_only_when_in_debt() {
        let mut hunter = hunter_with(0, &[]);
        assert!(hunter.lose(4).is_none());

        hunter.change_gold(-4);
        let ending = hunter.lose(4).expect("debt ends the game");
        assert_eq!(hunter.gold(), 0);
        match &ending {
            Ending::Defeat { deficit, report } => {
                assert_eq!(*deficit, 4);
                assert!(report.to_string().starts_with("GAME OVER"));
                assert!(!report.contains("pay up"));
                assert!(report.contains("Tester has 0 gold"));
            }
            Ending::Victory { .. } => panic!("expected defeat"),
        }
        assert!(!ending.is_victory());
    }

    #[test]
    fn test_info_lists_kit_and_treasures() {
        let mut hunter = hunter_with(12, &[Item::Rope, Item::Sword]);
        assert_eq!(
            hunter.info().to_string(),
            "Tester has 12 gold and rope sword \nTreasure found: none"
        );

        hunter.add_treasure(Treasure::Gem);
        assert!(hunter.info().to_string().ends_with("Treasure found: a gem "));
    }

    #[test]
    fn test_info_without_kit() {
        let hunter = hunter_with(3, &[]);
        assert_eq!(hunter.info().to_string(), "Tester has 3 gold\nTreasure found: none");
    }

    #[test]
    fn test_inventory_tints_sword_red() {
        let hunter = hunter_with(0, &[Item::Sword]);
        let inventory = hunter.inventory();
        assert_eq!(inventory.spans()[0].tint, Some(Tint::Red));
    }
}
