//! Smooth scroll configuration

/// The kind of command an animation serves, which picks its step size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Line scrolling (up/down/left/right)
    Line,
    /// Page scrolling
    Page,
    /// Jumps to top, bottom, home or end
    Jump,
}

/// Pixels moved per frame, per command kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollConfig {
    /// Step for line scrolling
    pub line_step: f32,
    /// Step for page scrolling
    pub page_step: f32,
    /// Step for jumps to an edge
    pub jump_step: f32,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            line_step: 5.0,
            page_step: 25.0,
            jump_step: 50.0,
        }
    }
}

impl SmoothScrollConfig {
    /// Same step for every command kind
    pub fn uniform(step: f32) -> Self {
        Self {
            line_step: step,
            page_step: step,
            jump_step: step,
        }
    }

    /// Every step scaled by `factor` (e.g. 2.0 for twice as fast)
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            line_step: self.line_step * factor,
            page_step: self.page_step * factor,
            jump_step: self.jump_step * factor,
        }
    }

    /// Step for a command kind. Never below one pixel, so every animation ends.
    pub fn step(&self, kind: StepKind) -> f32 {
        let step = match kind {
            StepKind::Line => self.line_step,
            StepKind::Page => self.page_step,
            StepKind::Jump => self.jump_step,
        };
        if step.is_finite() {
            step.max(1.0)
        } else {
            f32::MAX
        }
    }
}
