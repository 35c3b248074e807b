use thiserror::Error;

use crate::models::Column;

/// Reasons a placement request is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Column name did not parse
    #[error("unknown column '{0}' (expected left, center or right)")]
    UnknownColumn(String),

    /// Source index past the end of the source column
    #[error("source index {index} is out of range for the {column} column ({len} widgets)")]
    SourceIndexOutOfRange {
        /// Source column
        column: Column,
        /// Requested index
        index: usize,
        /// Widgets in the column
        len: usize,
    },

    /// The widget at the source position is not the one the caller named
    #[error("widget at {column}[{index}] is '{found}', not '{expected}'")]
    WidgetMismatch {
        /// Source column
        column: Column,
        /// Source index
        index: usize,
        /// Widget id the caller asked to move
        expected: String,
        /// Widget id actually at that position
        found: String,
    },

    /// No widget with this id in the layout
    #[error("widget not found: {0}")]
    WidgetNotFound(String),

    /// Type tag that cannot be placed
    #[error("unsupported widget type: {0}")]
    UnsupportedType(String),
}
