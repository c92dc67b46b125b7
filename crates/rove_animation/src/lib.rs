//! Rove Animation
//!
//! Smooth scrolling driven by the host's frame callback.
//!
//! # Features
//!
//! - **Fixed step**: each frame moves at most `step` pixels per axis
//! - **Cooperative**: nothing runs between frames; the host calls `tick`
//! - **Retargetable**: a new command for an element already animating
//!   replaces its destination instead of stacking

pub mod config;
pub mod scheduler;
pub mod smooth;

pub use config::{SmoothScrollConfig, StepKind};
pub use scheduler::{ScrollAnimationId, ScrollAnimator};
pub use smooth::{FrameResult, SmoothScroll};
