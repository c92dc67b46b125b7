//! Element records and Taffy layout conversions

use rove_core::{ContentExtents, ScrollOffset};
use taffy::{Layout, NodeId};

use crate::style::ElementStyle;
use crate::tree::ElementId;

/// Everything the tree stores for one element
#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    /// Backing Taffy node
    pub node: NodeId,
    pub tag: String,
    pub style: ElementStyle,
    pub parent: Option<ElementId>,
    /// Document order
    pub children: Vec<ElementId>,
    pub scroll: ScrollOffset,
}

impl ElementData {
    pub fn new(node: NodeId, tag: String, style: ElementStyle) -> Self {
        Self {
            node,
            tag,
            style,
            parent: None,
            children: Vec::new(),
            scroll: ScrollOffset::ZERO,
        }
    }
}

/// Client box and scrollable content size from a computed layout.
///
/// The client box is the border box. Content that fits reports the client
/// size as its scroll size, as browsers do.
pub(crate) fn content_extents(layout: &Layout) -> ContentExtents {
    let client_width = layout.size.width;
    let client_height = layout.size.height;
    ContentExtents {
        scroll_width: layout.content_size.width.max(client_width),
        scroll_height: layout.content_size.height.max(client_height),
        client_width,
        client_height,
    }
}
