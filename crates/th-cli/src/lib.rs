//! th-cli: Terminal front end for Treasure Hunt
//!
//! Reads menu choices line by line and prints colored messages with
//! crossterm. All game rules live in th-core.

pub mod display;
pub mod input;
pub mod theme;

pub use display::{menu, render_news};
pub use input::{InputError, parse_command, parse_item};
pub use theme::Theme;
