//! Rove Core
//!
//! Foundational types shared by every Rove crate:
//!
//! - **Geometry**: points, sizes and viewport-relative rectangles
//! - **Computed style**: the subset of CSS that decides visibility and scrollability
//! - **Extents**: scroll/client sizes and scroll offsets of an element
//! - **Viewport**: the capability trait a host document implements
//!
//! # Example
//!
//! ```rust
//! use rove_core::{ComputedStyle, Overflow};
//!
//! let style = ComputedStyle {
//!     overflow_y: "auto".parse().unwrap(),
//!     ..Default::default()
//! };
//! assert_eq!(style.overflow_y, Overflow::Auto);
//! assert_eq!(style.overflow_x, Overflow::Visible);
//! ```

pub mod error;
pub mod extents;
pub mod geometry;
pub mod style;
pub mod viewport;

pub use error::StyleParseError;
pub use extents::{ContentExtents, ScrollOffset};
pub use geometry::{Point, Rect, Size};
pub use style::{ComputedStyle, Display, Overflow, Visibility};
pub use viewport::Viewport;
