//! Host document interface
//!
//! The scroll core never owns elements. A host implements [`Viewport`] and
//! hands out cheap element handles; every read reflects the host's current
//! layout.

use std::fmt::Debug;

use crate::extents::{ContentExtents, ScrollOffset};
use crate::geometry::{Rect, Size};
use crate::style::ComputedStyle;

/// A rendered document as seen from its viewport
pub trait Viewport {
    /// Handle to one element of the document
    type Element: Copy + Eq + Debug;

    /// Inner width/height of the viewport
    fn size(&self) -> Size;

    /// The outer document element (`<html>`)
    fn document_element(&self) -> Self::Element;

    /// The content body (`<body>`), if the document has one
    fn body(&self) -> Option<Self::Element>;

    /// Direct children of `element`, in document order
    fn children(&self, element: Self::Element) -> Vec<Self::Element>;

    /// Border box of `element` relative to the viewport origin
    fn bounding_rect(&self, element: Self::Element) -> Rect;

    /// Computed style of `element`
    fn computed_style(&self, element: Self::Element) -> ComputedStyle;

    /// Scroll and client extents of `element`
    fn extents(&self, element: Self::Element) -> ContentExtents;

    /// Current scroll position of `element`
    fn scroll_offset(&self, element: Self::Element) -> ScrollOffset;

    /// Scroll `element` to an absolute position.
    ///
    /// Hosts clamp the request to the element's valid scroll range.
    fn scroll_to(&mut self, element: Self::Element, left: f32, top: f32);
}
