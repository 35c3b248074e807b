//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use button_studio::models::{
    default_layout, Column, ColumnWidths, Columns, LayoutConfiguration, Widget, WidgetType,
};
use chrono::{TimeZone, Utc};
use std::collections::BTreeSet;

/// Creates a small deterministic layout with two widgets per column.
pub fn test_layout_small() -> LayoutConfiguration {
    let column = |column: Column, types: [WidgetType; 2]| -> Vec<Widget> {
        types
            .into_iter()
            .enumerate()
            .map(|(order, t)| Widget::new(t.as_str(), t, column, order))
            .collect()
    };

    LayoutConfiguration {
        id: "small".to_string(),
        name: "Small Layout".to_string(),
        description: "Two widgets per column".to_string(),
        columns: Columns {
            left: column(Column::Left, [WidgetType::SavedDesigns, WidgetType::PresetGallery]),
            center: column(Column::Center, [WidgetType::LivePreview, WidgetType::CssOutput]),
            right: column(Column::Right, [WidgetType::TextControls, WidgetType::BoxShadow]),
        },
        column_widths: ColumnWidths::new(25, 50, 25),
        updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
    }
}

/// Ids of a column, in order.
pub fn column_ids(layout: &LayoutConfiguration, column: Column) -> Vec<String> {
    layout
        .columns
        .get(column)
        .iter()
        .map(|w| w.id.clone())
        .collect()
}

/// Asserts the per-column order invariant.
pub fn assert_contiguous(layout: &LayoutConfiguration) {
    for column in Column::ALL {
        let orders: Vec<usize> = layout.columns.get(column).iter().map(|w| w.order).collect();
        let expected: Vec<usize> = (0..orders.len()).collect();
        assert_eq!(orders, expected, "{column} column orders are not contiguous");
        assert!(
            layout.columns.get(column).iter().all(|w| w.column == column),
            "{column} column holds a widget claiming another column"
        );
    }
}

/// All widget ids in the layout.
pub fn all_ids(layout: &LayoutConfiguration) -> BTreeSet<String> {
    layout.columns.iter().map(|w| w.id.clone()).collect()
}

/// The built-in default layout, re-exported for brevity.
pub fn default() -> LayoutConfiguration {
    default_layout()
}

/// Small deterministic pseudo-random sequence (LCG) for operation sequences.
pub struct Sequence(u64);

impl Sequence {
    /// Creates a sequence from a seed.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next value in `0..bound`.
    pub fn below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % bound as u64) as usize
    }

    /// Next column.
    pub fn column(&mut self) -> Column {
        Column::ALL[self.below(3)]
    }
}
