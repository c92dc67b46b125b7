//! Rove Scrolling
//!
//! Picks the one element of a document that should receive keyboard scroll
//! input and moves it.
//!
//! - [`classifier`]: visibility, overflow-style and content-overflow predicates
//! - [`resolver`]: depth-first search for the scroll target
//! - [`command`]: the seven scroll commands and their destination offsets
//! - [`dispatcher`]: one-call entry points for the input layer
//! - [`smooth`]: the same commands, animated one frame at a time
//!
//! Nothing is cached between calls. Every command re-resolves its target
//! against the host's current layout, so a page that re-flows between two
//! key presses is scrolled correctly.
//!
//! # Example
//!
//! ```rust,ignore
//! use rove_scroll::dispatcher;
//!
//! // `page` is any host implementing `rove_core::Viewport`
//! dispatcher::scroll_vertically(&mut page, 3); // 3 lines down
//! dispatcher::scroll_to_top(&mut page);
//! ```

pub mod classifier;
pub mod command;
pub mod dispatcher;
pub mod resolver;
pub mod smooth;

#[cfg(test)]
mod test_support;

pub use classifier::{is_overflowed, is_scrollable_style, is_visible};
pub use command::{ScrollCommand, ScrollPlan, SCROLL_DELTA_X, SCROLL_DELTA_Y};
pub use dispatcher::{
    scroll_horizontally, scroll_pages, scroll_to_bottom, scroll_to_end, scroll_to_home,
    scroll_to_top, scroll_vertically,
};
pub use resolver::{find_scrollable, resolve_target, scroll_target, ScrollTarget, TargetSource};
pub use smooth::SmoothScroller;
