//! Rendering messages for the terminal

use crossterm::style::Stylize;
use th_core::News;

use crate::theme::Theme;

/// Turn a message into printable text, colored when a theme is given
pub fn render_news(news: &News, theme: Option<&Theme>) -> String {
    let Some(theme) = theme else {
        return news.to_string();
    };
    let mut out = String::new();
    for span in news.spans() {
        match span.tint {
            Some(tint) => {
                let styled = span.text.as_str().with(theme.tint_color(tint));
                out.push_str(&styled.to_string());
            }
            None => out.push_str(&span.text),
        }
    }
    out
}

/// The action menu shown every turn
pub fn menu(theme: Option<&Theme>) -> String {
    const ENTRIES: [(&str, &str); 9] = [
        ("p", "Browse the shop's price list."),
        ("b <item>", "Buy something at the shop."),
        ("s <item>", "Sell something at the shop."),
        ("m", "Move on to a different town."),
        ("l", "Look for trouble!"),
        ("h", "Hunt for treasure!"),
        ("d", "Dig for gold."),
        ("i", "Show your stats."),
        ("x", "Give up the search for treasure!"),
    ];
    let mut out = String::from("What's your next move?\n");
    for (key, text) in ENTRIES {
        let key = match theme {
            Some(theme) => format!("({key})").with(theme.prompt).to_string(),
            None => format!("({key})"),
        };
        out.push_str(&format!("{key} {text}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use th_core::Tint;

    #[test]
    fn test_plain_render_matches_display() {
        let mut news = News::plain("You dug up ");
        news.tinted("9", Tint::Yellow).push(" gold!");
        assert_eq!(render_news(&news, None), "You dug up 9 gold!");
    }

    #[test]
    fn test_colored_render_wraps_tinted_spans() {
        let mut news = News::plain("a ");
        news.tinted("gem", Tint::Blue);
        let out = render_news(&news, Some(&Theme::dark()));
        assert!(out.starts_with("a "));
        assert!(out.contains("gem"));
        assert!(out.contains('\u{1b}'));
        assert_ne!(out, "a gem");
    }

    #[test]
    fn test_menu_lists_every_action() {
        let text = menu(None);
        for key in ["(p)", "(b <item>)", "(s <item>)", "(m)", "(l)", "(h)", "(d)", "(i)", "(x)"] {
            assert!(text.contains(key), "missing {key}");
        }
    }
}
