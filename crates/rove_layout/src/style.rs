//! Element style helpers
//!
//! An [`ElementStyle`] pairs the CSS-level [`ComputedStyle`] the scroll core
//! reads with the Taffy box style used to lay the element out. The
//! `display` and `overflow` of the computed style are authoritative and are
//! mirrored into the Taffy style when the element is laid out.

use rove_core::{ComputedStyle, Display, Overflow, Visibility};
use taffy::prelude::{Dimension, LengthPercentageAuto};

/// Style of one element in a [`DocumentTree`](crate::DocumentTree)
#[derive(Debug, Clone, Default)]
pub struct ElementStyle {
    pub computed: ComputedStyle,
    pub layout: taffy::Style,
}

impl ElementStyle {
    /// A block box sized by its content
    pub fn block() -> Self {
        Self::default()
    }

    /// A block box with a fixed size
    pub fn fixed_size(width: f32, height: f32) -> Self {
        Self::block().size(width, height)
    }

    /// A fixed-size pane that scrolls its content on both axes (`overflow: auto`)
    pub fn scroll_pane(width: f32, height: f32) -> Self {
        Self::fixed_size(width, height).overflow(Overflow::Auto)
    }

    /// `display: none`
    pub fn hidden() -> Self {
        Self::block().display(Display::None)
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn width(mut self, width: f32) -> Self {
        self.layout.size.width = Dimension::Length(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.layout.size.height = Dimension::Length(height);
        self
    }

    /// Take the box out of flow at `(left, top)` within its parent
    pub fn absolute(mut self, left: f32, top: f32) -> Self {
        self.layout.position = taffy::Position::Absolute;
        self.layout.inset.left = LengthPercentageAuto::Length(left);
        self.layout.inset.top = LengthPercentageAuto::Length(top);
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.computed.display = display;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.computed.visibility = visibility;
        self
    }

    /// Same overflow on both axes
    pub fn overflow(self, overflow: Overflow) -> Self {
        self.overflow_x(overflow).overflow_y(overflow)
    }

    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.computed.overflow_x = overflow;
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.computed.overflow_y = overflow;
        self
    }

    /// Taffy style with display and overflow taken from the computed style
    pub(crate) fn to_taffy(&self) -> taffy::Style {
        taffy::Style {
            display: taffy_display(self.computed.display),
            overflow: taffy::Point {
                x: taffy_overflow(self.computed.overflow_x),
                y: taffy_overflow(self.computed.overflow_y),
            },
            // Scrollbars take no room, so client size equals box size
            scrollbar_width: 0.0,
            ..self.layout.clone()
        }
    }
}

fn taffy_display(display: Display) -> taffy::Display {
    match display {
        Display::None => taffy::Display::None,
        Display::Flex => taffy::Display::Flex,
        Display::Grid => taffy::Display::Grid,
        Display::Block | Display::Inline | Display::InlineBlock | Display::Contents => {
            taffy::Display::Block
        }
    }
}

fn taffy_overflow(overflow: Overflow) -> taffy::Overflow {
    match overflow {
        Overflow::Visible => taffy::Overflow::Visible,
        Overflow::Hidden => taffy::Overflow::Hidden,
        Overflow::Clip => taffy::Overflow::Clip,
        Overflow::Scroll | Overflow::Auto => taffy::Overflow::Scroll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_pane() {
        let style = ElementStyle::scroll_pane(300.0, 200.0);
        assert_eq!(style.computed.overflow_x, Overflow::Auto);
        assert_eq!(style.computed.overflow_y, Overflow::Auto);

        let taffy_style = style.to_taffy();
        assert_eq!(taffy_style.size.width, Dimension::Length(300.0));
        assert_eq!(taffy_style.size.height, Dimension::Length(200.0));
        assert_eq!(taffy_style.overflow.y, taffy::Overflow::Scroll);
        assert_eq!(taffy_style.display, taffy::Display::Block);
    }

    #[test]
    fn test_hidden_maps_to_taffy_none() {
        let style = ElementStyle::hidden();
        assert!(style.computed.display.is_none());
        assert_eq!(style.to_taffy().display, taffy::Display::None);
    }

    #[test]
    fn test_visibility_does_not_affect_layout() {
        let style = ElementStyle::fixed_size(10.0, 10.0).visibility(Visibility::Hidden);
        assert_eq!(style.to_taffy().display, taffy::Display::Block);
        assert_eq!(style.computed.visibility, Visibility::Hidden);
    }
}
