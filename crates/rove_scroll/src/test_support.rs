//! Recording host used by unit tests
//!
//! Elements are plain indices into a vector; index 0 is the document
//! element. Every computed-style read is counted per element so tests can
//! assert which elements the resolver looked at.

use std::cell::Cell;

use rove_core::{ComputedStyle, ContentExtents, Rect, ScrollOffset, Size, Viewport};

pub struct MockElement {
    pub rect: Rect,
    pub style: ComputedStyle,
    pub extents: ContentExtents,
    pub scroll: ScrollOffset,
    children: Vec<usize>,
    style_lookups: Cell<usize>,
}

impl MockElement {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            style: ComputedStyle::default(),
            extents: ContentExtents::fitting(rect.width(), rect.height()),
            scroll: ScrollOffset::ZERO,
            children: Vec::new(),
            style_lookups: Cell::new(0),
        }
    }

    pub fn style(mut self, style: ComputedStyle) -> Self {
        self.style = style;
        self
    }

    pub fn extents(mut self, extents: ContentExtents) -> Self {
        self.extents = extents;
        self
    }

    pub fn scroll(mut self, left: f32, top: f32) -> Self {
        self.scroll = ScrollOffset::new(left, top);
        self
    }
}

pub struct MockViewport {
    size: Size,
    elements: Vec<MockElement>,
    body: Option<usize>,
    writes: Vec<(usize, f32, f32)>,
}

impl MockViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            elements: vec![MockElement::new(Rect::new(0.0, 0.0, width, height))],
            body: None,
            writes: Vec::new(),
        }
    }

    pub fn root(&self) -> usize {
        0
    }

    /// Append `element` under `parent`, returning its handle
    pub fn push(&mut self, parent: usize, element: MockElement) -> usize {
        let id = self.elements.len();
        self.elements.push(element);
        self.elements[parent].children.push(id);
        id
    }

    pub fn set_body(&mut self, body: usize) {
        self.body = Some(body);
    }

    pub fn element_mut(&mut self, id: usize) -> &mut MockElement {
        &mut self.elements[id]
    }

    pub fn element(&self, id: usize) -> &MockElement {
        &self.elements[id]
    }

    pub fn style_lookups(&self, id: usize) -> usize {
        self.elements[id].style_lookups.get()
    }

    pub fn total_style_lookups(&self) -> usize {
        self.elements.iter().map(|e| e.style_lookups.get()).sum()
    }

    pub fn writes(&self) -> &[(usize, f32, f32)] {
        &self.writes
    }
}

impl Viewport for MockViewport {
    type Element = usize;

    fn size(&self) -> Size {
        self.size
    }

    fn document_element(&self) -> usize {
        0
    }

    fn body(&self) -> Option<usize> {
        self.body
    }

    fn children(&self, element: usize) -> Vec<usize> {
        self.elements[element].children.clone()
    }

    fn bounding_rect(&self, element: usize) -> Rect {
        self.elements[element].rect
    }

    fn computed_style(&self, element: usize) -> ComputedStyle {
        let e = &self.elements[element];
        e.style_lookups.set(e.style_lookups.get() + 1);
        e.style
    }

    fn extents(&self, element: usize) -> ContentExtents {
        self.elements[element].extents
    }

    fn scroll_offset(&self, element: usize) -> ScrollOffset {
        self.elements[element].scroll
    }

    fn scroll_to(&mut self, element: usize, left: f32, top: f32) {
        self.writes.push((element, left, top));
        let e = &mut self.elements[element];
        e.scroll = ScrollOffset::new(left, top).clamped(&e.extents);
    }
}
