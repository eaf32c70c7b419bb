//! Narrative messages
//!
//! Everything the game tells the player is a [`News`]: a run of text spans,
//! some of them tinted. The core never emits escape codes; front ends map each
//! [`Tint`] to whatever colour model they draw with.

use core::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Highlight colour attached to a span of text
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tint {
    /// Gold amounts
    Yellow,
    /// Danger and swords
    Red,
    /// Kit items
    Purple,
    /// Treasures
    Blue,
    /// Terrain names
    Cyan,
}

/// A piece of text with an optional tint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub tint: Option<Tint>,
}

/// A message made of spans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    spans: Vec<Span>,
}

impl News {
    pub fn new() -> Self {
        Self::default()
    }

    /// Untinted one-span message
    pub fn plain(text: impl Into<String>) -> Self {
        let mut news = Self::new();
        news.push(text);
        news
    }

    /// Append untinted text
    pub fn push(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_span(text.into(), None)
    }

    /// Append tinted text
    pub fn tinted(&mut self, text: impl Into<String>, tint: Tint) -> &mut Self {
        self.push_span(text.into(), Some(tint))
    }

    /// Append a line break
    pub fn newline(&mut self) -> &mut Self {
        self.push("\n")
    }

    /// Append every span of `other`
    pub fn append(&mut self, other: News) -> &mut Self {
        for span in other.spans {
            self.push_span(span.text, span.tint);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Take the contents, leaving this message empty
    pub fn take(&mut self) -> News {
        core::mem::take(self)
    }

    /// Whether the plain text contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.to_string().contains(needle)
    }

    fn push_span(&mut self, text: String, tint: Option<Tint>) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        // Merge neighbours that share a tint so renderers see fewer spans
        match self.spans.last_mut() {
            Some(last) if last.tint == tint => {
                last.text.push_str(&text);
                return self;
            }
            _ => {}
        }
        self.spans.push(Span { text, tint });
        self
    }
}

impl fmt::Display for News {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

impl From<&str> for News {
    fn from(text: &str) -> Self {
        News::plain(text)
    }
}

impl From<String> for News {
    fn from(text: String) -> Self {
        News::plain(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_drops_tints() {
        let mut news = News::plain("You dug up ");
        news.tinted("7", Tint::Yellow).push(" gold!");
        assert_eq!(news.to_string(), "You dug up 7 gold!");
        assert_eq!(news.spans().len(), 3);
        assert_eq!(news.spans()[1].tint, Some(Tint::Yellow));
    }

    #[test]
    fn test_adjacent_spans_merge() {
        let mut news = News::plain("a");
        news.push("b").newline().tinted("c", Tint::Red).tinted("d", Tint::Red);
        assert_eq!(news.spans().len(), 2);
        assert_eq!(news.spans()[0].text, "ab\n");
        assert_eq!(news.spans()[1].text, "cd");
    }

    #[test]
    fn test_take_clears() {
        let mut news = News::plain("hello");
        let taken = news.take();
        assert!(news.is_empty());
        assert_eq!(taken.to_string(), "hello");
    }

    #[test]
    fn test_empty_text_is_ignored() {
        let mut news = News::new();
        news.push("").tinted("", Tint::Blue);
        assert!(news.is_empty());
    }

    #[test]
    fn test_tint_names() {
        assert_eq!(Tint::Cyan.to_string(), "cyan");
    }
}
