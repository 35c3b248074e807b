//! Widget placement engine.
//!
//! Pure operations over a [`LayoutConfiguration`](crate::models::LayoutConfiguration)
//! that keep column membership and per-column ordering consistent. Every
//! operation either succeeds and leaves the layout valid, or returns a
//! [`PlacementError`] and leaves it untouched.

mod error;
mod placement;

pub use error::PlacementError;
pub use placement::{
    add_widget_to_column, collapse_widget, find_widget, move_widget, renumber, toggle_widget,
    update_column_widths, AddOutcome, Placement,
};
