//! Computed style model
//!
//! Only the four properties that decide whether an element can receive
//! scroll input are modelled. Values mirror what `getComputedStyle` reports,
//! so they parse from the same CSS keywords.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleParseError;

/// Computed `display`
///
/// The scroll core only distinguishes `none` from everything else, but the
/// common outer display types are kept so hosts can report what they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    Grid,
    Contents,
    None,
}

impl Display {
    /// Whether the element generates no box at all
    pub fn is_none(&self) -> bool {
        matches!(self, Display::None)
    }
}

impl FromStr for Display {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" | "list-item" | "table" | "flow-root" => Ok(Display::Block),
            "inline" => Ok(Display::Inline),
            "inline-block" | "inline-table" => Ok(Display::InlineBlock),
            "flex" | "inline-flex" => Ok(Display::Flex),
            "grid" | "inline-grid" => Ok(Display::Grid),
            "contents" => Ok(Display::Contents),
            "none" => Ok(Display::None),
            other => Err(StyleParseError::Display(other.to_string())),
        }
    }
}

/// Computed `visibility`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

impl FromStr for Visibility {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visible" => Ok(Visibility::Visible),
            "hidden" => Ok(Visibility::Hidden),
            "collapse" => Ok(Visibility::Collapse),
            other => Err(StyleParseError::Visibility(other.to_string())),
        }
    }
}

/// Computed `overflow-x` / `overflow-y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    /// `scroll` and `auto` are the only values that let the user scroll the box
    pub fn allows_scrolling(&self) -> bool {
        matches!(self, Overflow::Scroll | Overflow::Auto)
    }
}

impl FromStr for Overflow {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visible" => Ok(Overflow::Visible),
            "hidden" => Ok(Overflow::Hidden),
            "clip" => Ok(Overflow::Clip),
            "scroll" => Ok(Overflow::Scroll),
            "auto" | "overlay" => Ok(Overflow::Auto),
            other => Err(StyleParseError::Overflow(other.to_string())),
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Overflow::Visible => "visible",
            Overflow::Hidden => "hidden",
            Overflow::Clip => "clip",
            Overflow::Scroll => "scroll",
            Overflow::Auto => "auto",
        };
        f.write_str(keyword)
    }
}

/// Computed style of one element, as far as scrolling is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputedStyle {
    pub display: Display,
    pub visibility: Visibility,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
}

impl ComputedStyle {
    /// Style with the same overflow on both axes
    pub fn with_overflow(overflow: Overflow) -> Self {
        Self {
            overflow_x: overflow,
            overflow_y: overflow,
            ..Default::default()
        }
    }

    /// Set `display`
    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    /// Set `visibility`
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set `overflow-x`
    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self
    }

    /// Set `overflow-y`
    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!("none".parse::<Display>(), Ok(Display::None));
        assert_eq!(" Inline-Flex ".parse::<Display>(), Ok(Display::Flex));
        assert_eq!("hidden".parse::<Visibility>(), Ok(Visibility::Hidden));
        assert_eq!("overlay".parse::<Overflow>(), Ok(Overflow::Auto));
        assert_eq!("scroll".parse::<Overflow>(), Ok(Overflow::Scroll));
    }

    #[test]
    fn test_parse_unknown_keyword() {
        assert_eq!(
            "sideways".parse::<Overflow>(),
            Err(StyleParseError::Overflow("sideways".to_string()))
        );
        assert!("flexible".parse::<Display>().is_err());
        assert!("gone".parse::<Visibility>().is_err());
    }

    #[test]
    fn test_allows_scrolling() {
        assert!(Overflow::Scroll.allows_scrolling());
        assert!(Overflow::Auto.allows_scrolling());
        assert!(!Overflow::Hidden.allows_scrolling());
        assert!(!Overflow::Visible.allows_scrolling());
        assert!(!Overflow::Clip.allows_scrolling());
    }

    #[test]
    fn test_builder() {
        let style = ComputedStyle::with_overflow(Overflow::Hidden)
            .overflow_y(Overflow::Auto)
            .display(Display::Flex);
        assert_eq!(style.overflow_x, Overflow::Hidden);
        assert_eq!(style.overflow_y, Overflow::Auto);
        assert_eq!(style.display, Display::Flex);
        assert_eq!(style.visibility, Visibility::Visible);
    }
}
