//! Layout host error types

use thiserror::Error;

use crate::tree::ElementId;

/// Errors from building or mutating a [`DocumentTree`](crate::DocumentTree)
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The id does not name a live element
    #[error("Unknown element: {0:?}")]
    UnknownElement(ElementId),

    /// The document element is fixed at the root
    #[error("The document element cannot be moved or removed")]
    DocumentElement,

    /// Child must be detached before it can be appended
    #[error("Element {0:?} already has a parent")]
    AlreadyAttached(ElementId),

    /// The element is not inside the document element's subtree
    #[error("Element {0:?} is not attached to the document")]
    Detached(ElementId),

    /// Appending would make an element its own ancestor
    #[error("Appending {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: ElementId, child: ElementId },

    /// Taffy rejected an operation
    #[error("Layout engine error: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

/// Result type for layout host operations
pub type Result<T> = std::result::Result<T, LayoutError>;
