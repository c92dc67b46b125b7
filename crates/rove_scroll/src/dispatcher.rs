//! Scroll dispatch entry points
//!
//! One function per command for the input layer. Each resolves its own
//! target, so consecutive calls may move different elements if the layout
//! changed in between. Every call writes an absolute offset computed from
//! what the host reports right now, which keeps rapid repeats consistent.

use rove_core::Viewport;

use crate::command::ScrollCommand;

/// Scroll `count` lines down; negative scrolls up
pub fn scroll_vertically<V: Viewport>(viewport: &mut V, count: i32) {
    ScrollCommand::Vertical(count).apply(viewport);
}

/// Scroll `count` lines right; negative scrolls left
pub fn scroll_horizontally<V: Viewport>(viewport: &mut V, count: i32) {
    ScrollCommand::Horizontal(count).apply(viewport);
}

/// Scroll `count` pages down; negative scrolls up
pub fn scroll_pages<V: Viewport>(viewport: &mut V, count: i32) {
    ScrollCommand::Pages(count).apply(viewport);
}

pub fn scroll_to_top<V: Viewport>(viewport: &mut V) {
    ScrollCommand::Top.apply(viewport);
}

pub fn scroll_to_bottom<V: Viewport>(viewport: &mut V) {
    ScrollCommand::Bottom.apply(viewport);
}

/// Scroll to the left edge
pub fn scroll_to_home<V: Viewport>(viewport: &mut V) {
    ScrollCommand::Home.apply(viewport);
}

/// Scroll to the right edge
pub fn scroll_to_end<V: Viewport>(viewport: &mut V) {
    ScrollCommand::End.apply(viewport);
}
