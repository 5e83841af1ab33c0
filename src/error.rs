//! Error types for menu tree construction.
//!
//! Resolution, state transitions and breadcrumb building are total: they
//! never fail and never panic. The only fallible step is turning raw menu
//! data into a [`MenuTree`](crate::MenuTree), which reports a
//! [`MenuTreeError`].
//!
//! # Examples
//!
//! ```
//! use gpui_menu_navigator::{MenuTree, MenuTreeError};
//!
//! let err = MenuTree::new(Vec::new()).unwrap_err();
//! assert_eq!(err, MenuTreeError::Empty);
//! assert_eq!(err.to_string(), "Menu tree has no solutions");
//! ```

use std::fmt;

/// Reasons a menu tree cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTreeError {
    /// The forest contains no solutions, so nothing could ever be selected.
    Empty,

    /// Two solutions share the same id.
    DuplicateSolution { id: String },

    /// The serialized tree could not be parsed.
    Parse { message: String },
}

impl fmt::Display for MenuTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuTreeError::Empty => write!(f, "Menu tree has no solutions"),
            MenuTreeError::DuplicateSolution { id } => {
                write!(f, "Duplicate solution id: {}", id)
            }
            MenuTreeError::Parse { message } => {
                write!(f, "Failed to parse menu tree: {}", message)
            }
        }
    }
}

impl std::error::Error for MenuTreeError {}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for MenuTreeError {
    fn from(err: serde_json::Error) -> Self {
        MenuTreeError::Parse {
            message: err.to_string(),
        }
    }
}

impl MenuTreeError {
    /// Check if the tree was rejected for having no solutions
    pub fn is_empty_tree(&self) -> bool {
        matches!(self, MenuTreeError::Empty)
    }

    /// Check if the tree failed to parse
    pub fn is_parse_error(&self) -> bool {
        matches!(self, MenuTreeError::Parse { .. })
    }
}
