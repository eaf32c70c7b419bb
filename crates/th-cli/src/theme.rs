//! Terminal color theme system
//!
//! Maps message tints to terminal colors for dark and light backgrounds.
//! Auto-detects via the COLORFGBG env var, or manual override with the
//! TH_LIGHT_BG=1 environment variable.

use crossterm::style::Color;
use th_core::Tint;

/// Color theme for message spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Gold amounts
    pub gold: Color,
    /// Brawl threats and swords
    pub danger: Color,
    /// Kit items
    pub item: Color,
    /// Treasure names
    pub treasure: Color,
    /// Terrain names
    pub terrain: Color,
    /// Menu keys and prompts
    pub prompt: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            gold: Color::Yellow,
            danger: Color::Red,
            item: Color::Magenta,
            treasure: Color::Blue,
            terrain: Color::Cyan,
            prompt: Color::Green,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            gold: Color::DarkYellow,
            danger: Color::DarkRed,
            item: Color::DarkMagenta,
            treasure: Color::DarkBlue,
            terrain: Color::DarkCyan,
            prompt: Color::DarkGreen,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn tint_color(&self, tint: Tint) -> Color {
        match tint {
            Tint::Yellow => self.gold,
            Tint::Red => self.danger,
            Tint::Purple => self.item,
            Tint::Blue => self.treasure,
            Tint::Cyan => self.terrain,
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("TH_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices (0-15)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
