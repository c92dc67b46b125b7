//! Rove Layout Host
//!
//! A document tree whose geometry is computed by Taffy. It implements
//! [`rove_core::Viewport`], so the scroll core can run against it outside a
//! browser: in tests, in headless tools, or as a reference host.

pub mod element;
pub mod error;
pub mod style;
pub mod tree;

pub use error::{LayoutError, Result};
pub use style::ElementStyle;
pub use tree::{DocumentTree, ElementId};
