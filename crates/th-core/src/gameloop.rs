//! Main game loop
//!
//! Owns the current town (and through it the hunter), the shop and the RNG,
//! and turns player commands into town and hunter operations. The win and
//! loss endings surface here as [`GameLoopResult`] values.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::errors::TownError;
use crate::news::News;
use crate::object::Item;
use crate::player::{Ending, Hunter};
use crate::rng::{GameRng, RandomSource};
use crate::shop::{GeneralStore, ShopVisit};
use crate::town::Town;

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Read the shop's price list
    Browse,
    Buy(Item),
    Sell(Item),
    LookForTrouble,
    HuntTreasure,
    Dig,
    /// Cross the terrain to a new town
    Move,
    /// Show hunter and town info
    Status,
    Quit,
}

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// All treasures found, with the final report
    PlayerWon(News),
    /// Lost a brawl into debt, with the final report
    PlayerLost(News),
    /// Player quit
    PlayerQuit,
}

impl From<Ending> for GameLoopResult {
    fn from(ending: Ending) -> Self {
        match ending {
            Ending::Victory { report } => GameLoopResult::PlayerWon(report),
            Ending::Defeat { report, .. } => GameLoopResult::PlayerLost(report),
        }
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState<R = GameRng> {
    /// Town being visited; holds the hunter
    pub town: Town,

    pub shop: GeneralStore,

    /// Random number generator
    pub rng: R,

    pub config: GameConfig,

    /// Towns entered so far, the first one included
    pub towns_visited: u32,

    /// Messages produced outside the current town, shown before its news
    pub messages: News,

    /// How the game ended, once it has
    pub ended: Option<GameLoopResult>,
}

impl<R: RandomSource> GameState<R> {
    /// Start a game: create the hunter and put them in the first town
    pub fn new(name: impl Into<String>, config: GameConfig, mut rng: R) -> Result<Self, TownError> {
        let mut hunter = Hunter::new(name, config.starting_gold);
        if config.preload_kit {
            hunter.upgrade_kit();
            for item in Item::iter() {
                if let Err(err) = hunter.buy_item(item, 0) {
                    warn!(%item, %err, "could not preload item");
                }
            }
        }

        let mut town = Town::new(&mut rng, config.toughness, config.easy_mode);
        town.hunter_arrives(hunter)?;

        Ok(Self {
            town,
            shop: GeneralStore::from_config(&config),
            rng,
            config,
            towns_visited: 1,
            messages: News::new(),
            ended: None,
        })
    }

    pub fn hunter(&self) -> Option<&Hunter> {
        self.town.hunter()
    }

    /// Whether the game was won, lost or abandoned
    pub fn is_over(&self) -> bool {
        self.ended.is_some()
    }

    /// Everything said since the last call
    pub fn latest_news(&mut self) -> News {
        let mut news = self.messages.take();
        let town_news = self.town.latest_news();
        if !news.is_empty() && !town_news.is_empty() {
            news.newline();
        }
        news.append(town_news);
        news
    }

    /// Hunter and town summary
    pub fn status(&self) -> News {
        let mut news = News::new();
        if let Some(hunter) = self.town.hunter() {
            news.append(hunter.info()).newline();
        }
        news.append(self.town.info());
        news
    }
}

/// Game loop controller
#[derive(Debug)]
pub struct GameLoop<R = GameRng> {
    state: GameState<R>,
}

impl<R: RandomSource> GameLoop<R> {
    /// Create a new game loop with the given state
    pub fn new(state: GameState<R>) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState<R> {
        self.state
    }

    /// Everything said since the last call
    pub fn latest_news(&mut self) -> News {
        self.state.latest_news()
    }

    /// Execute a single command.
    ///
    /// Once the game has ended every further command is ignored and the
    /// final result is returned again.
    pub fn tick(&mut self, command: Command) -> Result<GameLoopResult, TownError> {
        if let Some(result) = &self.state.ended {
            debug!(?command, "game already over");
            return Ok(result.clone());
        }
        debug!(?command, "tick");
        let ending = match command {
            Command::Browse => self.visit_shop(ShopVisit::Browse)?,
            Command::Buy(item) => self.visit_shop(ShopVisit::Buy(item))?,
            Command::Sell(item) => self.visit_shop(ShopVisit::Sell(item))?,
            Command::LookForTrouble => {
                let state = &mut self.state;
                state.town.look_for_trouble(&mut state.rng)?
            }
            Command::HuntTreasure => self.hunt_treasure()?,
            Command::Dig => {
                let state = &mut self.state;
                state.town.dig(&mut state.rng)?;
                None
            }
            Command::Move => {
                self.move_on()?;
                None
            }
            Command::Status => {
                let status = self.state.status();
                self.state.messages.append(status);
                None
            }
            Command::Quit => {
                info!("player quit");
                self.state.ended = Some(GameLoopResult::PlayerQuit);
                return Ok(GameLoopResult::PlayerQuit);
            }
        };

        let Some(ending) = ending else {
            return Ok(GameLoopResult::Continue);
        };
        let result = GameLoopResult::from(ending);
        self.state.ended = Some(result.clone());
        Ok(result)
    }

    fn visit_shop(&mut self, visit: ShopVisit) -> Result<Option<Ending>, TownError> {
        let state = &mut self.state;
        state.town.enter_shop(&mut state.shop, visit)?;
        Ok(None)
    }

    /// Search the town and keep whatever real treasure turns up.
    ///
    /// The town only reveals its treasure; this is where it is recorded.
    fn hunt_treasure(&mut self) -> Result<Option<Ending>, TownError> {
        let town = &mut self.state.town;
        let first_search = !town.has_searched_for_treasure();
        let treasure = town.hunt_treasure()?;
        if !first_search || !treasure.is_collectible() {
            return Ok(None);
        }
        let hunter = town.hunter_mut().ok_or(TownError::NoHunter)?;
        if hunter.has_treasure(treasure) {
            return Ok(None);
        }
        Ok(hunter.add_treasure(treasure))
    }

    /// Leave for a fresh town if the terrain can be crossed
    fn move_on(&mut self) -> Result<(), TownError> {
        let state = &mut self.state;
        if !state.town.leave_town(&mut state.rng)? {
            return Ok(());
        }

        let farewell = state.town.latest_news();
        let hunter = state.town.depart().ok_or(TownError::NoHunter)?;
        let mut town = Town::new(&mut state.rng, state.config.toughness, state.config.easy_mode);
        town.hunter_arrives(hunter)?;

        state.messages.append(farewell);
        state.town = town;
        state.towns_visited += 1;
        info!(towns_visited = state.towns_visited, terrain = %state.town.terrain(), "moved to a new town");
        Ok(())
    }
}
