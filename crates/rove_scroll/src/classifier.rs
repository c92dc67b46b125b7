//! Visibility and overflow predicates
//!
//! Three independent, side-effect-free checks. The resolver composes them;
//! none of them calls another.

use rove_core::{Viewport, Visibility};

/// Loose on-screen check used to gate descent into a subtree.
///
/// An element is off-screen only when its box lies entirely before the
/// viewport origin on both axes, or entirely past the far corner on both
/// axes. Boxes that are merely clipped on one side, or that straddle a
/// corner, count as visible. This is not an intersection test.
///
/// Geometry is checked before style so that zero-sized and far-away boxes
/// never cost a computed-style lookup.
pub fn is_visible<V: Viewport>(viewport: &V, element: V::Element) -> bool {
    let rect = viewport.bounding_rect(element);
    if rect.width() == 0.0 || rect.height() == 0.0 {
        tracing::trace!("{:?} not visible: empty box", element);
        return false;
    }
    if rect.right() < 0.0 && rect.bottom() < 0.0 {
        tracing::trace!("{:?} not visible: before viewport origin", element);
        return false;
    }
    let size = viewport.size();
    if size.width < rect.left() && size.height < rect.top() {
        tracing::trace!("{:?} not visible: past viewport corner", element);
        return false;
    }

    let style = viewport.computed_style(element);
    if style.display.is_none() || style.visibility == Visibility::Hidden {
        tracing::trace!(
            "{:?} not visible: display={:?} visibility={:?}",
            element,
            style.display,
            style.visibility
        );
        return false;
    }
    true
}

/// `overflow-x` or `overflow-y` is `scroll` or `auto`
pub fn is_scrollable_style<V: Viewport>(viewport: &V, element: V::Element) -> bool {
    let style = viewport.computed_style(element);
    style.overflow_x.allows_scrolling() || style.overflow_y.allows_scrolling()
}

/// Content is larger than the client box on either axis
pub fn is_overflowed<V: Viewport>(viewport: &V, element: V::Element) -> bool {
    viewport.extents(element).is_overflowed()
}
