use thiserror::Error;

/// Errors surfaced by the fallible operations of a [`Tree`](crate::Tree).
///
/// Every error is raised before the tree is modified, so a failed call always leaves the tree
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An argument was rejected before any work began. This happens for elements that do not
    /// compare equal to themselves (e.g. `f64::NAN`) and for negative distances.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// No stored element compares equal to the argument.
    #[error("element not found in tree")]
    NotFound,
}

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
