//! Scroll animation scheduler
//!
//! Holds every in-flight smooth scroll and advances them once per frame.

use std::fmt::Debug;

use rove_core::{ScrollOffset, Viewport};
use slotmap::{new_key_type, SlotMap};

use crate::smooth::{FrameResult, SmoothScroll};

new_key_type! {
    pub struct ScrollAnimationId;
}

/// Frame scheduler for smooth scrolls, at most one per element
pub struct ScrollAnimator<E> {
    animations: SlotMap<ScrollAnimationId, SmoothScroll<E>>,
}

impl<E: Copy + Eq + Debug> ScrollAnimator<E> {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
        }
    }

    /// Start animating `target`, or retarget its running animation
    pub fn animate(
        &mut self,
        target: E,
        destination: ScrollOffset,
        step: f32,
    ) -> ScrollAnimationId {
        if let Some((id, anim)) = self
            .animations
            .iter_mut()
            .find(|(_, anim)| anim.target() == target)
        {
            anim.retarget(destination, step);
            return id;
        }
        let anim = SmoothScroll::new(target, destination, step);
        self.animations.insert(anim)
    }

    /// Destination of the animation running on `target`, if any
    pub fn destination_for(&self, target: E) -> Option<ScrollOffset> {
        self.animations
            .values()
            .find(|anim| anim.target() == target)
            .map(|anim| anim.destination())
    }

    pub fn get(&self, id: ScrollAnimationId) -> Option<&SmoothScroll<E>> {
        self.animations.get(id)
    }

    pub fn cancel(&mut self, id: ScrollAnimationId) -> Option<SmoothScroll<E>> {
        self.animations.remove(id)
    }

    /// Stop any animation on `target`. Returns true if one was running.
    pub fn cancel_target(&mut self, target: E) -> bool {
        let before = self.animations.len();
        self.animations.retain(|_, anim| anim.target() != target);
        self.animations.len() != before
    }

    pub fn clear(&mut self) {
        self.animations.clear();
    }

    /// Advance every animation one frame, dropping the ones that ended.
    ///
    /// Returns true while any animation still needs frames.
    pub fn tick<V: Viewport<Element = E>>(&mut self, viewport: &mut V) -> bool {
        self.animations.retain(|_, anim| {
            let result = anim.step_frame(viewport);
            if result == FrameResult::Stalled {
                tracing::debug!("Smooth scroll on {:?} stalled", anim.target());
            }
            result.is_running()
        });
        self.has_active_animations()
    }

    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Iterate over all running animations
    pub fn iter(&self) -> impl Iterator<Item = (ScrollAnimationId, &SmoothScroll<E>)> {
        self.animations.iter()
    }
}

impl<E: Copy + Eq + Debug> Default for ScrollAnimator<E> {
    fn default() -> Self {
        Self::new()
    }
}
