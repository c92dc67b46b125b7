//! Frame-stepped scroll animation

use std::fmt::Debug;

use rove_core::{ScrollOffset, Viewport};

/// Outcome of one animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameResult {
    /// Moved, and more frames are needed
    Running,
    /// The element sits at its destination
    Finished,
    /// The host did not move the element; the animation gives up
    Stalled,
}

impl FrameResult {
    pub fn is_running(&self) -> bool {
        matches!(self, FrameResult::Running)
    }
}

/// Moves one element toward a destination by at most `step` px per axis per frame
#[derive(Debug, Clone)]
pub struct SmoothScroll<E> {
    target: E,
    destination: ScrollOffset,
    step: f32,
    frames: u32,
}

impl<E: Copy + Eq + Debug> SmoothScroll<E> {
    pub fn new(target: E, destination: ScrollOffset, step: f32) -> Self {
        Self {
            target,
            destination,
            step,
            frames: 0,
        }
    }

    pub fn target(&self) -> E {
        self.target
    }

    pub fn destination(&self) -> ScrollOffset {
        self.destination
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Frames that wrote a new offset so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Point an in-flight animation somewhere else
    pub fn retarget(&mut self, destination: ScrollOffset, step: f32) {
        self.destination = destination;
        self.step = step;
    }

    /// Advance one frame.
    ///
    /// The destination is clamped to the element's current scroll range every
    /// frame, so content that shrinks mid-animation ends the animation at the
    /// new edge. An axis within one step of its goal snaps onto it.
    pub fn step_frame<V: Viewport<Element = E>>(&mut self, viewport: &mut V) -> FrameResult {
        let extents = viewport.extents(self.target);
        let goal = self.destination.clamped(&extents);
        let current = viewport.scroll_offset(self.target);
        let next = ScrollOffset::new(
            approach(current.left, goal.left, self.step),
            approach(current.top, goal.top, self.step),
        );
        if next == current {
            return FrameResult::Finished;
        }

        viewport.scroll_to(self.target, next.left, next.top);
        self.frames += 1;

        let after = viewport.scroll_offset(self.target);
        tracing::trace!(
            "Smooth scroll {:?} frame {}: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            self.target,
            self.frames,
            current.left,
            current.top,
            after.left,
            after.top
        );
        if after == current {
            FrameResult::Stalled
        } else if after == goal {
            FrameResult::Finished
        } else {
            FrameResult::Running
        }
    }
}

fn approach(current: f32, goal: f32, step: f32) -> f32 {
    let distance = goal - current;
    if distance.abs() <= step {
        goal
    } else {
        current + step.copysign(distance)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rove_core::{ComputedStyle, ContentExtents, Rect, Size};

    /// Single scrollable element with an optional frozen host
    pub(crate) struct Pane {
        pub extents: ContentExtents,
        pub offset: ScrollOffset,
        pub frozen: bool,
    }

    impl Pane {
        pub(crate) fn new(scroll_width: f32, scroll_height: f32) -> Self {
            Self {
                extents: ContentExtents::new(scroll_width, scroll_height, 100.0, 100.0),
                offset: ScrollOffset::ZERO,
                frozen: false,
            }
        }
    }

    impl Viewport for Pane {
        type Element = u8;

        fn size(&self) -> Size {
            Size::new(100.0, 100.0)
        }
        fn document_element(&self) -> u8 {
            0
        }
        fn body(&self) -> Option<u8> {
            None
        }
        fn children(&self, _: u8) -> Vec<u8> {
            Vec::new()
        }
        fn bounding_rect(&self, _: u8) -> Rect {
            Rect::new(0.0, 0.0, 100.0, 100.0)
        }
        fn computed_style(&self, _: u8) -> ComputedStyle {
            ComputedStyle::default()
        }
        fn extents(&self, _: u8) -> ContentExtents {
            self.extents
        }
        fn scroll_offset(&self, _: u8) -> ScrollOffset {
            self.offset
        }
        fn scroll_to(&mut self, _: u8, left: f32, top: f32) {
            if !self.frozen {
                self.offset = ScrollOffset::new(left, top).clamped(&self.extents);
            }
        }
    }

    #[test]
    fn test_approach() {
        assert_eq!(approach(0.0, 12.0, 5.0), 5.0);
        assert_eq!(approach(10.0, 12.0, 5.0), 12.0);
        assert_eq!(approach(12.0, 0.0, 5.0), 7.0);
        assert_eq!(approach(3.0, 3.0, 5.0), 3.0);
    }

    #[test]
    fn test_runs_to_destination() {
        let mut pane = Pane::new(100.0, 1000.0);
        let mut anim = SmoothScroll::new(0, ScrollOffset::new(0.0, 48.0), 5.0);

        let mut frames = 0;
        while anim.step_frame(&mut pane).is_running() {
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(pane.offset, ScrollOffset::new(0.0, 48.0));
        // 9 full steps plus the 3 px snap
        assert_eq!(anim.frames(), 10);
    }

    #[test]
    fn test_destination_is_clamped() {
        let mut pane = Pane::new(300.0, 250.0);
        let mut anim = SmoothScroll::new(0, ScrollOffset::new(-80.0, 9000.0), 50.0);
        pane.offset = ScrollOffset::new(100.0, 0.0);

        while anim.step_frame(&mut pane).is_running() {}
        assert_eq!(pane.offset, ScrollOffset::new(0.0, 150.0));
    }

    #[test]
    fn test_already_there_finishes_without_writing() {
        let mut pane = Pane::new(100.0, 100.0);
        let mut anim = SmoothScroll::new(0, ScrollOffset::new(0.0, 500.0), 5.0);
        assert_eq!(anim.step_frame(&mut pane), FrameResult::Finished);
        assert_eq!(anim.frames(), 0);
    }

    #[test]
    fn test_frozen_host_stalls() {
        let mut pane = Pane::new(100.0, 1000.0);
        pane.frozen = true;
        let mut anim = SmoothScroll::new(0, ScrollOffset::new(0.0, 500.0), 5.0);
        assert_eq!(anim.step_frame(&mut pane), FrameResult::Stalled);
    }
}
