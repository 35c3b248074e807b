//! Built-in default layout.

use chrono::Utc;

use crate::models::layout::{ColumnWidths, Columns, LayoutConfiguration};
use crate::models::widget::{Column, Widget, WidgetType};

/// Id of the built-in default layout.
pub const DEFAULT_LAYOUT_ID: &str = "default";

/// Name of the built-in default layout.
pub const DEFAULT_LAYOUT_NAME: &str = "Default Layout";

const LEFT: [WidgetType; 3] = [
    WidgetType::SavedDesigns,
    WidgetType::PresetGallery,
    WidgetType::DesignHistory,
];

const CENTER: [WidgetType; 2] = [WidgetType::LivePreview, WidgetType::CssOutput];

const RIGHT: [WidgetType; 11] = [
    WidgetType::TextControls,
    WidgetType::BackgroundGradient,
    WidgetType::BorderGradient,
    WidgetType::BorderControls,
    WidgetType::BoxShadow,
    WidgetType::TextShadow,
    WidgetType::Dimensions,
    WidgetType::Spacing,
    WidgetType::HoverEffects,
    WidgetType::ThreeDEffects,
    WidgetType::AnimationControls,
];

fn column_of(column: Column, types: &[WidgetType]) -> Vec<Widget> {
    types
        .iter()
        .enumerate()
        .map(|(order, &widget_type)| Widget::new(widget_type.as_str(), widget_type, column, order))
        .collect()
}

/// Builds the built-in default layout.
///
/// Default widget ids are their type tags, so they are stable across resets.
pub fn default_layout() -> LayoutConfiguration {
    LayoutConfiguration {
        id: DEFAULT_LAYOUT_ID.to_string(),
        name: DEFAULT_LAYOUT_NAME.to_string(),
        description: "Presets on the left, preview in the middle, controls on the right"
            .to_string(),
        columns: Columns {
            left: column_of(Column::Left, &LEFT),
            center: column_of(Column::Center, &CENTER),
            right: column_of(Column::Right, &RIGHT),
        },
        column_widths: ColumnWidths::default(),
        updated_at: Utc::now(),
    }
}
