//! Towns
//!
//! A town is where everything happens: shopping, searching for treasure,
//! digging for gold, brawling, and finally crossing the surrounding terrain
//! to reach the next town. Each visit gets a fresh [`Town`]; the hunter moves
//! in with [`Town::hunter_arrives`] and back out with [`Town::depart`].
//!
//! Searching, digging and brawling each pay out at most once per visit.

mod terrain;

pub use terrain::Terrain;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::TownError;
use crate::news::{News, Tint};
use crate::object::Treasure;
use crate::player::{Ending, Hunter};
use crate::rng::RandomSource;
use crate::shop::{Shop, ShopVisit};
use crate::{
    BRAWL_MAX_GOLD, DIG_MAX_GOLD, DIG_SUCCESS_CHANCE, EASY_BRAWL_FACTOR, ITEM_BREAK_CHANCE,
    MILD_NO_TROUBLE_CHANCE, TOUGH_NO_TROUBLE_CHANCE,
};

/// One visit to one town
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Town {
    terrain: Terrain,
    /// Hidden until searched for
    treasure: Treasure,
    hunter: Option<Hunter>,
    tough_town: bool,
    easy_mode: bool,
    print_message: News,
    has_searched_for_treasure: bool,
    has_dug: bool,
    has_fought: bool,
    won_last_fight: bool,
    /// A brawl resolved since the news was last read
    brawl_unreported: bool,
}

impl Town {
    /// Build a town. Rolls terrain, then treasure, then toughness;
    /// `toughness` is the chance the town turns out tough.
    pub fn new(rng: &mut impl RandomSource, toughness: f64, easy_mode: bool) -> Self {
        let terrain = Terrain::roll(rng);
        let treasure = Treasure::roll(rng);
        let tough_town = rng.roll() < toughness;
        debug!(%terrain, %treasure, tough_town, easy_mode, "town generated");

        Self {
            terrain,
            treasure,
            hunter: None,
            tough_town,
            easy_mode,
            print_message: News::new(),
            has_searched_for_treasure: false,
            has_dug: false,
            has_fought: false,
            won_last_fight: false,
            brawl_unreported: false,
        }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// The treasure hidden here, whether or not it has been found
    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    pub fn is_tough(&self) -> bool {
        self.tough_town
    }

    pub fn is_easy(&self) -> bool {
        self.easy_mode
    }

    pub fn has_searched_for_treasure(&self) -> bool {
        self.has_searched_for_treasure
    }

    pub fn has_dug(&self) -> bool {
        self.has_dug
    }

    pub fn has_fought(&self) -> bool {
        self.has_fought
    }

    /// Outcome of this visit's brawl, if there was one
    pub fn won_last_fight(&self) -> Option<bool> {
        self.has_fought.then_some(self.won_last_fight)
    }

    pub fn hunter(&self) -> Option<&Hunter> {
        self.hunter.as_ref()
    }

    pub fn hunter_mut(&mut self) -> Option<&mut Hunter> {
        self.hunter.as_mut()
    }

    /// Let the hunter into town.
    ///
    /// A town takes one hunter per visit; a second arrival is refused and the
    /// hunter handed back inside the error.
    pub fn hunter_arrives(&mut self, hunter: Hunter) -> Result<(), TownError> {
        if self.hunter.is_some() {
            return Err(TownError::AlreadyOccupied {
                visitor: Box::new(hunter),
            });
        }
        info!(hunter = %hunter.name(), terrain = %self.terrain, tough = self.tough_town, "hunter arrived");

        let mut news = News::plain(format!("Welcome to town, {}.", hunter.name()));
        if self.tough_town {
            news.push("\nIt's pretty rough around here, so watch yourself.");
        } else {
            news.push("\nWe're just a sleepy little town with mild mannered folk.");
        }
        self.print_message = news;
        self.hunter = Some(hunter);
        Ok(())
    }

    /// Hand the hunter back, ending the visit
    pub fn depart(&mut self) -> Option<Hunter> {
        self.hunter.take()
    }

    /// Search the town.
    ///
    /// Returns the town's treasure every time, but only the first search
    /// reports it. Recording the find on the hunter is up to the caller.
    pub fn hunt_treasure(&mut self) -> Result<Treasure, TownError> {
        let hunter = self.hunter.as_ref().ok_or(TownError::NoHunter)?;
        if self.has_searched_for_treasure {
            self.print_message = News::plain("You have already searched this town");
            return Ok(self.treasure);
        }
        self.has_searched_for_treasure = true;

        let mut news = News::new();
        if !self.treasure.is_collectible() {
            news.push("You searched the town but only found ")
                .tinted(self.treasure.to_string(), Tint::Blue);
        } else if hunter.has_treasure(self.treasure) {
            news.push("You already collected a ")
                .tinted(self.treasure.to_string(), Tint::Blue)
                .push(" so don't collect it again");
        } else {
            news.push("You found a ")
                .tinted(self.treasure.to_string(), Tint::Blue);
        }
        debug!(treasure = %self.treasure, "town searched");
        self.print_message = news;
        Ok(self.treasure)
    }

    /// Dig for gold. Needs a shovel, pays out at most once per visit.
    pub fn dig(&mut self, rng: &mut impl RandomSource) -> Result<(), TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        if !hunter.has_shovel() {
            self.print_message = News::plain("You can't dig for gold without a shovel");
            return Ok(());
        }
        if self.has_dug {
            self.print_message = News::plain("You already dug for gold in this town");
            return Ok(());
        }

        if rng.roll() < DIG_SUCCESS_CHANCE {
            let amount = rng.rnd(DIG_MAX_GOLD) as i32;
            hunter.change_gold(amount);
            debug!(amount, gold = hunter.gold(), "dug up gold");
            let mut news = News::plain("You dug up ");
            news.tinted(amount.to_string(), Tint::Yellow).push(" gold!");
            self.print_message = news;
        } else {
            debug!("dug up dirt");
            self.print_message = News::plain("You dug but only found dirt");
        }
        self.has_dug = true;
        Ok(())
    }

    /// Try to cross the terrain out of town.
    ///
    /// Needs the terrain's item. Half the time the item is lost on the way,
    /// except in easy mode.
    pub fn leave_town(&mut self, rng: &mut impl RandomSource) -> Result<bool, TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        let item = self.terrain.required_item();

        if !self.terrain.can_cross(hunter) {
            let mut news = News::plain(format!("You can't leave town, {}. You don't have a ", hunter.name()));
            news.tinted(item.to_string(), item.tint()).push(".");
            self.print_message = news;
            return Ok(false);
        }

        let mut news = News::plain("You used your ");
        news.tinted(item.to_string(), item.tint())
            .push(" to cross the ")
            .tinted(self.terrain.to_string(), Tint::Cyan)
            .push(".");

        let broke = rng.roll() < ITEM_BREAK_CHANCE;
        if broke && !self.easy_mode {
            hunter.remove_item_from_kit(item);
            debug!(%item, "crossing item lost");
            news.push("\nUnfortunately, you lost your ")
                .tinted(item.to_string(), item.tint())
                .push(".");
        }
        self.print_message = news;
        Ok(true)
    }

    /// Pass the hunter to `shop` and keep what it says
    pub fn enter_shop(&mut self, shop: &mut impl Shop, visit: ShopVisit) -> Result<(), TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        self.print_message = shop.enter(hunter, visit);
        Ok(())
    }

    /// Go looking for a fight.
    ///
    /// Tough towns keep the peace more often but are harder to win in. The
    /// stake is rolled before the fight; a sword wins outright. Losing can
    /// leave the hunter in debt, which ends the game.
    pub fn look_for_trouble(
        &mut self,
        rng: &mut impl RandomSource,
    ) -> Result<Option<Ending>, TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        if self.has_fought {
            self.print_message = News::plain("You already brawled in this town");
            return Ok(None);
        }

        let no_trouble_chance = if self.tough_town {
            TOUGH_NO_TROUBLE_CHANCE
        } else {
            MILD_NO_TROUBLE_CHANCE
        };
        if rng.roll() <= no_trouble_chance {
            self.print_message = News::plain("You couldn't find any trouble");
            return Ok(None);
        }

        let mut news = News::new();
        news.tinted(
            "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n",
            Tint::Red,
        );
        let gold_diff = rng.rnd(BRAWL_MAX_GOLD) as i32;
        let threshold = if self.easy_mode {
            no_trouble_chance * EASY_BRAWL_FACTOR
        } else {
            no_trouble_chance
        };

        let mut ending = None;
        let won = if hunter.has_sword() {
            news.push("A legendary samurai? I can't beat you, I'm leavin'!");
            true
        } else if rng.roll() > threshold {
            news.push("Okay, stranger! You proved yer mettle. Here, take my gold.");
            true
        } else {
            false
        };

        if won {
            news.push("\nYou won the brawl and receive ")
                .tinted(gold_diff.to_string(), Tint::Yellow)
                .push(" gold.");
            hunter.change_gold(gold_diff);
        } else {
            news.tinted(
                "That'll teach you to go lookin' fer trouble in MY town! Now pay up!",
                Tint::Red,
            )
            .push("\nYou lost the brawl and pay ")
            .tinted(gold_diff.to_string(), Tint::Red)
            .push(" gold.");
            hunter.change_gold(-gold_diff);
            ending = hunter.lose(gold_diff);
        }
        debug!(won, gold_diff, gold = hunter.gold(), "brawl resolved");

        self.has_fought = true;
        self.won_last_fight = won;
        self.brawl_unreported = true;
        self.print_message = news;
        Ok(ending)
    }

    /// Take the latest message, with the brawl verdict appended if a fight
    /// happened since the last read.
    pub fn latest_news(&mut self) -> News {
        let mut news = self.print_message.take();
        if self.brawl_unreported {
            if self.won_last_fight {
                news.push("\nYou won the brawl");
            } else {
                news.push("\nYou lost the brawl");
            }
            self.brawl_unreported = false;
        }
        news
    }

    pub fn info(&self) -> News {
        let mut news = News::plain("This nice little town is surrounded by ");
        news.tinted(self.terrain.to_string(), Tint::Cyan).push(".");
        news
    }
}
