//! Content extents and scroll offsets

/// Scrollable content size versus the visible client box
///
/// Corresponds to `scrollWidth`/`scrollHeight` and `clientWidth`/`clientHeight`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentExtents {
    pub scroll_width: f32,
    pub scroll_height: f32,
    pub client_width: f32,
    pub client_height: f32,
}

impl ContentExtents {
    pub const fn new(
        scroll_width: f32,
        scroll_height: f32,
        client_width: f32,
        client_height: f32,
    ) -> Self {
        Self {
            scroll_width,
            scroll_height,
            client_width,
            client_height,
        }
    }

    /// Extents of a box whose content exactly fits
    pub const fn fitting(width: f32, height: f32) -> Self {
        Self::new(width, height, width, height)
    }

    /// Content exceeds the client box on at least one axis
    pub fn is_overflowed(&self) -> bool {
        self.scroll_width > self.client_width || self.scroll_height > self.client_height
    }

    /// Largest valid horizontal offset (0 when the content fits)
    pub fn max_scroll_left(&self) -> f32 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Largest valid vertical offset (0 when the content fits)
    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Current scroll position (`scrollLeft`, `scrollTop`)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    pub left: f32,
    pub top: f32,
}

impl ScrollOffset {
    pub const ZERO: ScrollOffset = ScrollOffset {
        left: 0.0,
        top: 0.0,
    };

    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Clamp both axes into the range the given extents allow
    pub fn clamped(&self, extents: &ContentExtents) -> Self {
        Self {
            left: self.left.clamp(0.0, extents.max_scroll_left()),
            top: self.top.clamp(0.0, extents.max_scroll_top()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scroll() {
        let e = ContentExtents::new(1200.0, 3000.0, 800.0, 600.0);
        assert_eq!(e.max_scroll_left(), 400.0);
        assert_eq!(e.max_scroll_top(), 2400.0);

        let fits = ContentExtents::fitting(800.0, 600.0);
        assert_eq!(fits.max_scroll_left(), 0.0);
        assert_eq!(fits.max_scroll_top(), 0.0);
    }

    #[test]
    fn test_is_overflowed() {
        let taller = ContentExtents::new(800.0, 601.0, 800.0, 600.0);
        let wider = ContentExtents::new(801.0, 600.0, 800.0, 600.0);
        assert!(taller.is_overflowed());
        assert!(wider.is_overflowed());
        assert!(!ContentExtents::fitting(800.0, 600.0).is_overflowed());
    }

    #[test]
    fn test_clamped() {
        let e = ContentExtents::new(1200.0, 3000.0, 800.0, 600.0);
        let offset = ScrollOffset::new(-20.0, 9000.0).clamped(&e);
        assert_eq!(offset, ScrollOffset::new(0.0, 2400.0));
    }
}
