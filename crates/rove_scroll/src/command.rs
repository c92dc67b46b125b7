//! Scroll commands
//!
//! | Command | New left | New top |
//! |---|---|---|
//! | `Vertical(n)` | unchanged | top + 48 × n |
//! | `Horizontal(n)` | left + 48 × n | unchanged |
//! | `Pages(n)` | unchanged | top + client height × n |
//! | `Top` | unchanged | 0 |
//! | `Bottom` | unchanged | scroll height |
//! | `Home` | 0 | unchanged |
//! | `End` | scroll width | unchanged |
//!
//! Negative counts reverse direction. Line and page moves are not clamped
//! here; the host's `scroll_to` clamps them.

use rove_animation::StepKind;
use rove_core::{ScrollOffset, Viewport};

use crate::resolver::{resolve_target, TargetSource};

/// Horizontal distance of one line scroll, in pixels
pub const SCROLL_DELTA_X: f32 = 48.0;

/// Vertical distance of one line scroll, in pixels
pub const SCROLL_DELTA_Y: f32 = 48.0;

/// One keyboard scroll command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    /// Lines down (negative: up)
    Vertical(i32),
    /// Lines right (negative: left)
    Horizontal(i32),
    /// Pages down (negative: up)
    Pages(i32),
    Top,
    Bottom,
    Home,
    End,
}

/// Where a command will move which element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan<E> {
    pub target: E,
    pub source: TargetSource,
    /// Offset the move is measured from
    pub from: ScrollOffset,
    /// Requested absolute offset
    pub to: ScrollOffset,
}

impl ScrollCommand {
    /// Resolve the target and compute the destination without scrolling
    pub fn plan<V: Viewport>(&self, viewport: &V) -> ScrollPlan<V::Element> {
        self.plan_from(viewport, |target| viewport.scroll_offset(target))
    }

    /// Like [`plan`](Self::plan), but moves are measured from `base(target)`
    /// instead of the target's current offset
    pub fn plan_from<V: Viewport>(
        &self,
        viewport: &V,
        base: impl FnOnce(V::Element) -> ScrollOffset,
    ) -> ScrollPlan<V::Element> {
        let resolved = resolve_target(viewport);
        let target = resolved.element;
        let from = base(target);

        let to = match *self {
            ScrollCommand::Vertical(count) => {
                ScrollOffset::new(from.left, from.top + SCROLL_DELTA_Y * count as f32)
            }
            ScrollCommand::Horizontal(count) => {
                ScrollOffset::new(from.left + SCROLL_DELTA_X * count as f32, from.top)
            }
            ScrollCommand::Pages(count) => {
                let height = viewport.extents(target).client_height;
                ScrollOffset::new(from.left, from.top + height * count as f32)
            }
            ScrollCommand::Top => ScrollOffset::new(from.left, 0.0),
            ScrollCommand::Bottom => {
                let height = viewport.extents(target).scroll_height;
                ScrollOffset::new(from.left, height)
            }
            ScrollCommand::Home => ScrollOffset::new(0.0, from.top),
            ScrollCommand::End => {
                let width = viewport.extents(target).scroll_width;
                ScrollOffset::new(width, from.top)
            }
        };

        ScrollPlan {
            target,
            source: resolved.source,
            from,
            to,
        }
    }

    /// Plan and perform the command with a single `scroll_to`
    pub fn apply<V: Viewport>(&self, viewport: &mut V) -> ScrollPlan<V::Element> {
        let plan = self.plan(viewport);
        viewport.scroll_to(plan.target, plan.to.left, plan.to.top);
        tracing::debug!(
            "{:?} on {:?}: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            self,
            plan.target,
            plan.from.left,
            plan.from.top,
            plan.to.left,
            plan.to.top
        );
        plan
    }

    /// Which smooth-scroll step size this command animates with
    pub fn step_kind(&self) -> StepKind {
        match self {
            ScrollCommand::Vertical(_) | ScrollCommand::Horizontal(_) => StepKind::Line,
            ScrollCommand::Pages(_) => StepKind::Page,
            ScrollCommand::Top
            | ScrollCommand::Bottom
            | ScrollCommand::Home
            | ScrollCommand::End => StepKind::Jump,
        }
    }
}
