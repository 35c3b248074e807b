//! Data models for widgets and layout configurations.
//!
//! Models are plain serializable data. Placement rules live in
//! [`crate::engine`], persistence in [`crate::store`].

pub mod defaults;
pub mod layout;
pub mod widget;

pub use defaults::{default_layout, DEFAULT_LAYOUT_ID, DEFAULT_LAYOUT_NAME};
pub use layout::{ColumnWidths, Columns, LayoutConfiguration};
pub use widget::{Column, Widget, WidgetType};
