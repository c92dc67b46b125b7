//! Document tree
//!
//! Elements live in a slotmap alongside a Taffy tree with one node per
//! element. Structure and style changes mark the tree dirty;
//! [`DocumentTree::compute_layout`] brings geometry up to date. Reads through
//! [`Viewport`] always report the last computed layout.

use rove_core::{ComputedStyle, ContentExtents, Rect, ScrollOffset, Size, Viewport};
use slotmap::{new_key_type, SlotMap};
use taffy::prelude::{AvailableSpace, TaffyTree};
use taffy::Layout;

use crate::element::{content_extents, ElementData};
use crate::error::{LayoutError, Result};
use crate::style::ElementStyle;

new_key_type! {
    pub struct ElementId;
}

/// An in-memory document with Taffy-computed geometry
pub struct DocumentTree {
    taffy: TaffyTree,
    elements: SlotMap<ElementId, ElementData>,
    root: ElementId,
    body: Option<ElementId>,
    viewport: Size,
    dirty: bool,
}

impl DocumentTree {
    /// Create a document whose `html` element fills a viewport of the given size
    pub fn new(viewport: Size) -> Result<Self> {
        let mut taffy = TaffyTree::new();
        let style = ElementStyle::fixed_size(viewport.width, viewport.height);
        let node = taffy.new_leaf(style.to_taffy())?;

        let mut elements = SlotMap::with_key();
        let root = elements.insert(ElementData::new(node, "html".to_string(), style));

        Ok(Self {
            taffy,
            elements,
            root,
            body: None,
            viewport,
            dirty: true,
        })
    }

    pub fn document_element(&self) -> ElementId {
        self.root
    }

    pub fn body(&self) -> Option<ElementId> {
        self.body
    }

    /// Create a detached element
    pub fn create_element(
        &mut self,
        tag: impl Into<String>,
        style: ElementStyle,
    ) -> Result<ElementId> {
        let node = self.taffy.new_leaf(style.to_taffy())?;
        let data = ElementData::new(node, tag.into(), style);
        self.dirty = true;
        Ok(self.elements.insert(data))
    }

    /// Create an element and append it as the last child of `parent`
    pub fn append(
        &mut self,
        parent: ElementId,
        tag: impl Into<String>,
        style: ElementStyle,
    ) -> Result<ElementId> {
        self.check(parent)?;
        let id = self.create_element(tag, style)?;
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Append a detached element as the last child of `parent`
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        let parent_node = self.check(parent)?.node;
        let child_data = self.check(child)?;
        if child == self.root {
            return Err(LayoutError::DocumentElement);
        }
        if child_data.parent.is_some() {
            return Err(LayoutError::AlreadyAttached(child));
        }
        let child_node = child_data.node;

        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(LayoutError::Cycle { parent, child });
            }
            ancestor = self.elements.get(id).and_then(|data| data.parent);
        }

        self.taffy.add_child(parent_node, child_node)?;
        if let Some(data) = self.elements.get_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(data) = self.elements.get_mut(parent) {
            data.children.push(child);
        }
        self.dirty = true;
        Ok(())
    }

    /// Mark `body` as the document's content body. It must be attached under
    /// the document element.
    pub fn set_body(&mut self, body: ElementId) -> Result<()> {
        self.check(body)?;
        if !self.is_attached(body) {
            return Err(LayoutError::Detached(body));
        }
        self.body = Some(body);
        Ok(())
    }

    /// Replace an element's style. The document element keeps the viewport size.
    pub fn set_style(&mut self, id: ElementId, style: ElementStyle) -> Result<()> {
        let style = if id == self.root {
            style.size(self.viewport.width, self.viewport.height)
        } else {
            style
        };
        let node = self.check(id)?.node;
        self.taffy.set_style(node, style.to_taffy())?;
        if let Some(data) = self.elements.get_mut(id) {
            data.style = style;
        }
        self.dirty = true;
        Ok(())
    }

    /// Remove an element and its whole subtree
    pub fn remove_element(&mut self, id: ElementId) -> Result<()> {
        if id == self.root {
            return Err(LayoutError::DocumentElement);
        }
        let data = self.check(id)?;
        let (node, parent) = (data.node, data.parent);
        let subtree = self.subtree(id);

        // Detaching the top node from Taffy is the only step that can fail
        self.taffy.remove(node)?;
        if let Some(parent) = parent.and_then(|p| self.elements.get_mut(p)) {
            parent.children.retain(|&child| child != id);
        }
        for current in subtree {
            let Some(data) = self.elements.remove(current) else {
                continue;
            };
            if current != id {
                if let Err(err) = self.taffy.remove(data.node) {
                    tracing::warn!("Failed to release layout node of {:?}: {}", current, err);
                }
            }
            if self.body == Some(current) {
                self.body = None;
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Resize the viewport; the document element follows
    pub fn set_viewport_size(&mut self, size: Size) -> Result<()> {
        self.viewport = size;
        let style = self.check(self.root)?.style.clone();
        self.set_style(self.root, style)
    }

    /// Lay out the whole document against the viewport
    pub fn compute_layout(&mut self) -> Result<()> {
        let node = self.check(self.root)?.node;
        let available = taffy::Size {
            width: AvailableSpace::Definite(self.viewport.width),
            height: AvailableSpace::Definite(self.viewport.height),
        };
        self.taffy.compute_layout(node, available)?;
        self.dirty = false;
        tracing::debug!(
            "Laid out {} elements in {:.0}x{:.0} viewport",
            self.elements.len(),
            self.viewport.width,
            self.viewport.height
        );
        Ok(())
    }

    /// True when the tree changed since the last [`compute_layout`](Self::compute_layout)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id).map(|data| data.tag.as_str())
    }

    pub fn style(&self, id: ElementId) -> Option<&ElementStyle> {
        self.elements.get(id).map(|data| &data.style)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id).and_then(|data| data.parent)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `id` and all of its descendants
    fn subtree(&self, id: ElementId) -> Vec<ElementId> {
        let mut subtree = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(data) = self.elements.get(current) {
                pending.extend(data.children.iter().copied());
                subtree.push(current);
            }
        }
        subtree
    }

    /// Reachable from the document element through parent links
    fn is_attached(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(element) = current {
            if element == self.root {
                return true;
            }
            current = self.parent(element);
        }
        false
    }

    fn check(&self, id: ElementId) -> Result<&ElementData> {
        self.elements.get(id).ok_or(LayoutError::UnknownElement(id))
    }

    fn layout(&self, id: ElementId) -> Option<&Layout> {
        let data = self.elements.get(id)?;
        self.taffy.layout(data.node).ok()
    }
}

impl Viewport for DocumentTree {
    type Element = ElementId;

    fn size(&self) -> Size {
        self.viewport
    }

    fn document_element(&self) -> ElementId {
        self.root
    }

    fn body(&self) -> Option<ElementId> {
        self.body
    }

    fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.elements
            .get(element)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    /// Taffy locations are parent-relative; accumulate them up the chain and
    /// subtract every ancestor's scroll offset.
    fn bounding_rect(&self, element: ElementId) -> Rect {
        let Some(layout) = self.layout(element) else {
            return Rect::ZERO;
        };
        let mut x = layout.location.x;
        let mut y = layout.location.y;

        let mut ancestor = self.parent(element);
        while let Some(id) = ancestor {
            let Some(data) = self.elements.get(id) else {
                break;
            };
            if let Some(ancestor_layout) = self.layout(id) {
                x += ancestor_layout.location.x;
                y += ancestor_layout.location.y;
            }
            x -= data.scroll.left;
            y -= data.scroll.top;
            ancestor = data.parent;
        }

        Rect::new(x, y, layout.size.width, layout.size.height)
    }

    fn computed_style(&self, element: ElementId) -> ComputedStyle {
        self.elements
            .get(element)
            .map(|data| data.style.computed)
            .unwrap_or_default()
    }

    fn extents(&self, element: ElementId) -> ContentExtents {
        self.layout(element)
            .map(content_extents)
            .unwrap_or_default()
    }

    fn scroll_offset(&self, element: ElementId) -> ScrollOffset {
        self.elements
            .get(element)
            .map(|data| data.scroll)
            .unwrap_or_default()
    }

    fn scroll_to(&mut self, element: ElementId, left: f32, top: f32) {
        let extents = self.extents(element);
        match self.elements.get_mut(element) {
            Some(data) => data.scroll = ScrollOffset::new(left, top).clamped(&extents),
            None => tracing::warn!("scroll_to on unknown element {:?}", element),
        }
    }
}
