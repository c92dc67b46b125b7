//! Scroll target resolution
//!
//! Finds the element a scroll command should move:
//!
//! 1. the document element, if its content overflows
//! 2. the body, if its content overflows
//! 3. the first element, in pre-order over visible elements, that is both
//!    styled scrollable and overflowing
//! 4. the document element, when nothing qualifies
//!
//! Steps 1 and 2 read extents only, so the usual whole-page case never pays
//! for a computed-style lookup or a tree walk.
//!
//! Results are never memoized. Layout may change between two commands
//! (dynamic content, resize), and a cached target would scroll the wrong
//! pane. Keep it that way.

use smallvec::SmallVec;

use rove_core::Viewport;

use crate::classifier::{is_overflowed, is_scrollable_style, is_visible};

/// Which resolution step produced the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    /// The document element overflows
    DocumentElement,
    /// The body overflows
    Body,
    /// Found by searching the visible tree
    Search,
    /// Nothing qualified; defaulted to the document element
    Fallback,
}

/// A resolved scroll target and how it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget<E> {
    pub element: E,
    pub source: TargetSource,
}

/// Resolve the element that should receive scroll input. Always succeeds.
pub fn scroll_target<V: Viewport>(viewport: &V) -> V::Element {
    resolve_target(viewport).element
}

/// Like [`scroll_target`], also reporting which step chose the element
pub fn resolve_target<V: Viewport>(viewport: &V) -> ScrollTarget<V::Element> {
    let root = viewport.document_element();
    let target = if is_overflowed(viewport, root) {
        ScrollTarget {
            element: root,
            source: TargetSource::DocumentElement,
        }
    } else if let Some(body) = viewport.body().filter(|&b| is_overflowed(viewport, b)) {
        ScrollTarget {
            element: body,
            source: TargetSource::Body,
        }
    } else if let Some(found) = find_scrollable(viewport, root) {
        ScrollTarget {
            element: found,
            source: TargetSource::Search,
        }
    } else {
        ScrollTarget {
            element: root,
            source: TargetSource::Fallback,
        }
    };

    tracing::debug!("Scroll target {:?} ({:?})", target.element, target.source);
    target
}

/// Depth-first, pre-order search for a scrollable element under `element`.
///
/// An element qualifies when [`is_scrollable_style`] and [`is_overflowed`]
/// both hold; `element` itself is tested first, so ancestors win over
/// descendants and earlier siblings over later ones. Only children that pass
/// [`is_visible`] are descended into, which prunes a hidden element together
/// with its whole subtree. `element` itself is not visibility-checked.
///
/// Uses an explicit stack, so arbitrarily deep documents cannot exhaust the
/// call stack.
pub fn find_scrollable<V: Viewport>(viewport: &V, element: V::Element) -> Option<V::Element> {
    let mut stack: SmallVec<[V::Element; 32]> = SmallVec::new();
    stack.push(element);

    while let Some(current) = stack.pop() {
        if is_scrollable_style(viewport, current) && is_overflowed(viewport, current) {
            return Some(current);
        }

        // All children are classified before any is searched
        let visible: SmallVec<[V::Element; 16]> = viewport
            .children(current)
            .into_iter()
            .filter(|&child| is_visible(viewport, child))
            .collect();
        stack.extend(visible.into_iter().rev());
    }
    None
}
