//! Input handling - convert typed menu lines to commands
//!
//! A line is a single menu key, optionally followed by an item name for
//! the shop actions: `b rope`, `s shovel`, `h`, `x`.

use std::str::FromStr;

use th_core::{Command, Item};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("nothing was typed")]
    Empty,
    #[error("'{0}' is not on the menu")]
    UnknownChoice(String),
    #[error("which item? try something like '{0} rope'")]
    MissingItem(char),
    #[error("nobody has heard of a '{0}'")]
    UnknownItem(String),
}

/// Convert one line of input to a game command.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let mut words = line.split_whitespace();
    let Some(choice) = words.next() else {
        return Err(InputError::Empty);
    };
    let rest: Vec<&str> = words.collect();

    match choice.to_ascii_lowercase().as_str() {
        "p" => Ok(Command::Browse),
        "b" => parse_item('b', &rest).map(Command::Buy),
        "s" => parse_item('s', &rest).map(Command::Sell),
        "m" => Ok(Command::Move),
        "l" => Ok(Command::LookForTrouble),
        "h" => Ok(Command::HuntTreasure),
        "d" => Ok(Command::Dig),
        "i" => Ok(Command::Status),
        "x" => Ok(Command::Quit),
        _ => Err(InputError::UnknownChoice(choice.to_string())),
    }
}

/// Parse an item name typed after a shop key, or at the item prompt.
pub fn parse_item(key: char, words: &[&str]) -> Result<Item, InputError> {
    match words {
        [] => Err(InputError::MissingItem(key)),
        [name] => Item::from_str(name).map_err(|_| InputError::UnknownItem(name.to_string())),
        _ => Err(InputError::UnknownItem(words.join(" "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_key_commands() {
        assert_eq!(parse_command("p"), Ok(Command::Browse));
        assert_eq!(parse_command("m"), Ok(Command::Move));
        assert_eq!(parse_command("l"), Ok(Command::LookForTrouble));
        assert_eq!(parse_command("h"), Ok(Command::HuntTreasure));
        assert_eq!(parse_command("d"), Ok(Command::Dig));
        assert_eq!(parse_command("i"), Ok(Command::Status));
        assert_eq!(parse_command("x"), Ok(Command::Quit));
    }

    #[test]
    fn test_keys_ignore_case_and_padding() {
        assert_eq!(parse_command("  H \n"), Ok(Command::HuntTreasure));
        assert_eq!(parse_command("B Rope"), Ok(Command::Buy(Item::Rope)));
    }

    #[test]
    fn test_shop_keys_take_an_item() {
        assert_eq!(parse_command("b machete"), Ok(Command::Buy(Item::Machete)));
        assert_eq!(parse_command("s boat"), Ok(Command::Sell(Item::Boat)));
        assert_eq!(parse_command("b"), Err(InputError::MissingItem('b')));
        assert_eq!(
            parse_command("s spoon"),
            Err(InputError::UnknownItem("spoon".to_string()))
        );
    }

    #[test]
    fn test_bad_lines() {
        assert_eq!(parse_command(""), Err(InputError::Empty));
        assert_eq!(parse_command("   "), Err(InputError::Empty));
        assert_eq!(
            parse_command("q"),
            Err(InputError::UnknownChoice("q".to_string()))
        );
        assert_eq!(
            parse_command("buy"),
            Err(InputError::UnknownChoice("buy".to_string()))
        );
    }

    #[test]
    fn test_unknown_keys_never_quit() {
        for line in ["q", "z", "xx", "quit", "?"] {
            assert_ne!(parse_command(line), Ok(Command::Quit), "{line}");
        }
        assert_eq!(parse_command("X"), Ok(Command::Quit));
    }
}
