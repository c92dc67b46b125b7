//! Core error types

use thiserror::Error;

/// Errors produced while reading CSS keywords into a [`ComputedStyle`](crate::ComputedStyle)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    /// `display` keyword not recognized
    #[error("unknown display keyword: {0}")]
    Display(String),

    /// `visibility` keyword not recognized
    #[error("unknown visibility keyword: {0}")]
    Visibility(String),

    /// `overflow` keyword not recognized
    #[error("unknown overflow keyword: {0}")]
    Overflow(String),
}
