//! Game configuration
//!
//! A difficulty preset picks the numbers a game is played with; a JSON file
//! can override any of them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::consts::MAX_STARTING_GOLD;
use crate::errors::ConfigError;

/// Difficulty presets offered at the start of a game
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    /// Starts with every item and plenty of gold
    Test,
    /// The shop stocks a sword
    Samurai,
}

impl Difficulty {
    pub fn config(self) -> GameConfig {
        let normal = GameConfig {
            starting_gold: 20,
            toughness: 0.4,
            easy_mode: false,
            sell_markdown: 0.5,
            sword_for_sale: false,
            preload_kit: false,
        };
        match self {
            Difficulty::Easy => GameConfig {
                starting_gold: 40,
                toughness: 0.2,
                easy_mode: true,
                sell_markdown: 1.0,
                ..normal
            },
            Difficulty::Normal => normal,
            Difficulty::Hard => GameConfig {
                starting_gold: 10,
                toughness: 0.75,
                sell_markdown: 0.25,
                ..normal
            },
            Difficulty::Test => GameConfig {
                starting_gold: 100,
                sword_for_sale: true,
                preload_kit: true,
                ..normal
            },
            Difficulty::Samurai => GameConfig {
                sword_for_sale: true,
                ..normal
            },
        }
    }
}

/// Numbers a game is played with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Gold the hunter starts with
    pub starting_gold: i32,
    /// Probability that a new town is tough
    pub toughness: f64,
    /// Items never break and brawls are easier
    pub easy_mode: bool,
    /// Fraction of the price the shop pays when buying back
    pub sell_markdown: f64,
    pub sword_for_sale: bool,
    /// Start with every item and the upgraded kit
    pub preload_kit: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

/// Overrides read from a config file; absent fields keep the preset value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    difficulty: Option<Difficulty>,
    starting_gold: Option<i32>,
    toughness: Option<f64>,
    easy_mode: Option<bool>,
    sell_markdown: Option<f64>,
    sword_for_sale: Option<bool>,
    preload_kit: Option<bool>,
}

impl GameConfig {
    /// Load overrides from a JSON file on top of `base`, unless the file
    /// names its own difficulty.
    pub fn load_from_file(path: &Path, base: Difficulty) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        file.apply(base)
    }

    /// Reject a negative or oversized purse and probabilities outside
    /// `0.0..=1.0`
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(0..=MAX_STARTING_GOLD).contains(&self.starting_gold) {
            return Err(ConfigError::StartingGold {
                gold: self.starting_gold,
                max: MAX_STARTING_GOLD,
            });
        }
        if !(0.0..=1.0).contains(&self.toughness) {
            return Err(ConfigError::Toughness(self.toughness));
        }
        if !(0.0..=1.0).contains(&self.sell_markdown) {
            return Err(ConfigError::Markdown(self.sell_markdown));
        }
        Ok(self)
    }
}

impl ConfigFile {
    fn apply(self, base: Difficulty) -> Result<GameConfig, ConfigError> {
        let mut config = self.difficulty.unwrap_or(base).config();
        if let Some(gold) = self.starting_gold {
            config.starting_gold = gold;
        }
        if let Some(toughness) = self.toughness {
            config.toughness = toughness;
        }
        if let Some(easy) = self.easy_mode {
            config.easy_mode = easy;
        }
        if let Some(markdown) = self.sell_markdown {
            config.sell_markdown = markdown;
        }
        if let Some(sword) = self.sword_for_sale {
            config.sword_for_sale = sword;
        }
        if let Some(preload) = self.preload_kit {
            config.preload_kit = preload;
        }
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_presets() {
        assert_eq!(GameConfig::default(), Difficulty::Normal.config());
        assert!(Difficulty::Easy.config().easy_mode);
        assert!(!Difficulty::Hard.config().easy_mode);
        assert!(Difficulty::Samurai.config().sword_for_sale);
        let test = Difficulty::Test.config();
        assert!(test.preload_kit);
        assert!(test.sword_for_sale);
    }

    #[test]
    fn test_presets_are_valid() {
        use strum::IntoEnumIterator;
        for difficulty in Difficulty::iter() {
            assert!(difficulty.config().validate().is_ok(), "{difficulty}");
        }
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::Samurai.to_string(), "samurai");
        assert!(Difficulty::from_str("nightmare").is_err());
    }

    #[test]
    fn test_file_overrides_preset() {
        let file = write_config(r#"{ "starting_gold": 55, "easy_mode": true }"#);
        let config = GameConfig::load_from_file(file.path(), Difficulty::Hard).unwrap();
        assert_eq!(config.starting_gold, 55);
        assert!(config.easy_mode);
        assert_eq!(config.toughness, 0.75);
    }

    #[test]
    fn test_file_difficulty_wins_over_base() {
        let file = write_config(r#"{ "difficulty": "samurai" }"#);
        let config = GameConfig::load_from_file(file.path(), Difficulty::Easy).unwrap();
        assert_eq!(config, Difficulty::Samurai.config());
    }

    #[test]
    fn test_file_out_of_range() {
        let file = write_config(r#"{ "toughness": 1.5 }"#);
        let err = GameConfig::load_from_file(file.path(), Difficulty::Normal).unwrap_err();
        assert!(matches!(err, ConfigError::Toughness(t) if t == 1.5));
    }

    #[test]
    fn test_file_starting_gold_bounds() {
        for gold in [-5, i32::MAX] {
            let file = write_config(&format!(r#"{{ "starting_gold": {gold} }}"#));
            let err = GameConfig::load_from_file(file.path(), Difficulty::Normal).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("starting gold must be within 0..=100000, got {gold}")
            );
            assert!(matches!(err, ConfigError::StartingGold { gold: g, .. } if g == gold));
        }

        let file = write_config(r#"{ "starting_gold": 0 }"#);
        let config = GameConfig::load_from_file(file.path(), Difficulty::Normal).unwrap();
        assert_eq!(config.starting_gold, 0);
    }

    #[test]
    fn test_file_unknown_field() {
        let file = write_config(r#"{ "dragons": 3 }"#);
        let err = GameConfig::load_from_file(file.path(), Difficulty::Normal).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load_from_file(Path::new("/nonexistent/th.json"), Difficulty::Normal)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/th.json"));
    }
}
