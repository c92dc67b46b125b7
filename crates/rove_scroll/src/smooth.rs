//! Animated scroll commands
//!
//! [`SmoothScroller`] takes the same commands as the
//! [`dispatcher`](crate::dispatcher) and resolves targets the same way, but
//! hands the destination to a [`ScrollAnimator`] instead of writing it. The
//! host calls [`SmoothScroller::tick`] from its animation-frame callback.

use std::fmt::Debug;

use rove_animation::{ScrollAnimationId, ScrollAnimator, SmoothScrollConfig};
use rove_core::{ScrollOffset, Viewport};

use crate::command::{ScrollCommand, ScrollPlan};

/// Frame-driven variant of the scroll dispatcher
pub struct SmoothScroller<E> {
    animator: ScrollAnimator<E>,
    config: SmoothScrollConfig,
}

impl<E: Copy + Eq + Debug> SmoothScroller<E> {
    pub fn new(config: SmoothScrollConfig) -> Self {
        Self {
            animator: ScrollAnimator::new(),
            config,
        }
    }

    /// Plan `command` and schedule its animation.
    ///
    /// A target that is already animating is planned from where its
    /// animation is headed, so repeated commands add up.
    pub fn dispatch<V: Viewport<Element = E>>(
        &mut self,
        viewport: &V,
        command: ScrollCommand,
    ) -> (ScrollAnimationId, ScrollPlan<E>) {
        let plan = command.plan_from(viewport, |target| self.base_offset(viewport, target));
        let step = self.config.step(command.step_kind());
        tracing::debug!(
            "Smooth {:?} on {:?} to ({:.1}, {:.1}) at {:.0}px/frame",
            command,
            plan.target,
            plan.to.left,
            plan.to.top,
            step
        );
        let id = self.animator.animate(plan.target, plan.to, step);
        (id, plan)
    }

    pub fn scroll_vertically<V: Viewport<Element = E>>(&mut self, viewport: &V, count: i32) {
        self.dispatch(viewport, ScrollCommand::Vertical(count));
    }

    pub fn scroll_horizontally<V: Viewport<Element = E>>(&mut self, viewport: &V, count: i32) {
        self.dispatch(viewport, ScrollCommand::Horizontal(count));
    }

    pub fn scroll_pages<V: Viewport<Element = E>>(&mut self, viewport: &V, count: i32) {
        self.dispatch(viewport, ScrollCommand::Pages(count));
    }

    pub fn scroll_to_top<V: Viewport<Element = E>>(&mut self, viewport: &V) {
        self.dispatch(viewport, ScrollCommand::Top);
    }

    pub fn scroll_to_bottom<V: Viewport<Element = E>>(&mut self, viewport: &V) {
        self.dispatch(viewport, ScrollCommand::Bottom);
    }

    pub fn scroll_to_home<V: Viewport<Element = E>>(&mut self, viewport: &V) {
        self.dispatch(viewport, ScrollCommand::Home);
    }

    pub fn scroll_to_end<V: Viewport<Element = E>>(&mut self, viewport: &V) {
        self.dispatch(viewport, ScrollCommand::End);
    }

    /// Advance all animations one frame. Returns true while more frames are needed.
    pub fn tick<V: Viewport<Element = E>>(&mut self, viewport: &mut V) -> bool {
        self.animator.tick(viewport)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.has_active_animations()
    }

    /// Stop every animation where it is
    pub fn stop(&mut self) {
        self.animator.clear();
    }

    fn base_offset<V: Viewport<Element = E>>(&self, viewport: &V, target: E) -> ScrollOffset {
        match self.animator.destination_for(target) {
            Some(pending) => pending.clamped(&viewport.extents(target)),
            None => viewport.scroll_offset(target),
        }
    }
}

impl<E: Copy + Eq + Debug> Default for SmoothScroller<E> {
    fn default() -> Self {
        Self::new(SmoothScrollConfig::default())
    }
}
