//! Move, add, toggle, collapse and resize operations.

use serde::Serialize;

use super::PlacementError;
use crate::models::{Column, ColumnWidths, LayoutConfiguration, Widget, WidgetType};

/// Final position of a widget after a placement operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Column now holding the widget
    pub column: Column,
    /// Index within that column
    pub order: usize,
}

/// Result of [`add_widget_to_column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new widget was created
    Created {
        /// Generated widget id
        id: String,
        /// Where it was inserted
        placement: Placement,
    },
    /// A widget of that type already existed and was moved instead
    Relocated {
        /// Id of the existing widget
        id: String,
        /// Where it ended up
        placement: Placement,
    },
}

impl AddOutcome {
    /// Id of the created or relocated widget.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Created { id, .. } | Self::Relocated { id, .. } => id,
        }
    }

    /// Final placement of the widget.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        match self {
            Self::Created { placement, .. } | Self::Relocated { placement, .. } => *placement,
        }
    }
}

/// Rewrites `order` so it equals each widget's index.
pub fn renumber(widgets: &mut [Widget]) {
    for (index, widget) in widgets.iter_mut().enumerate() {
        widget.order = index;
    }
}

/// Locates a widget by id.
#[must_use]
pub fn find_widget(layout: &LayoutConfiguration, widget_id: &str) -> Option<(Column, usize)> {
    Column::ALL.into_iter().find_map(|column| {
        layout
            .columns
            .get(column)
            .iter()
            .position(|w| w.id == widget_id)
            .map(|index| (column, index))
    })
}

fn find_widget_mut<'a>(
    layout: &'a mut LayoutConfiguration,
    widget_id: &str,
) -> Result<&'a mut Widget, PlacementError> {
    let (column, index) = find_widget(layout, widget_id)
        .ok_or_else(|| PlacementError::WidgetNotFound(widget_id.to_string()))?;
    Ok(&mut layout.columns.get_mut(column)[index])
}

/// Moves the widget at `source_index` of `source_column` to `dest_index` of
/// `dest_column`.
///
/// `dest_index` is clamped to the destination length (measured after the
/// widget is removed), so an oversized index appends. Both touched columns
/// are renumbered from 0.
pub fn move_widget(
    layout: &mut LayoutConfiguration,
    widget_id: &str,
    source_column: Column,
    source_index: usize,
    dest_column: Column,
    dest_index: usize,
) -> Result<Placement, PlacementError> {
    let source = layout.columns.get(source_column);
    let Some(current) = source.get(source_index) else {
        return Err(PlacementError::SourceIndexOutOfRange {
            column: source_column,
            index: source_index,
            len: source.len(),
        });
    };

    if current.id != widget_id {
        return Err(PlacementError::WidgetMismatch {
            column: source_column,
            index: source_index,
            expected: widget_id.to_string(),
            found: current.id.clone(),
        });
    }

    let mut widget = layout.columns.get_mut(source_column).remove(source_index);
    if source_column != dest_column {
        renumber(layout.columns.get_mut(source_column));
    }

    let dest = layout.columns.get_mut(dest_column);
    let order = dest_index.min(dest.len());
    widget.column = dest_column;
    dest.insert(order, widget);
    renumber(dest);

    Ok(Placement {
        column: dest_column,
        order,
    })
}

/// Places a widget of `widget_type` at `order` in `column`.
///
/// Widget types are singletons within a layout: if one already exists it is
/// moved there instead of adding a duplicate.
pub fn add_widget_to_column(
    layout: &mut LayoutConfiguration,
    widget_type: WidgetType,
    column: Column,
    order: usize,
) -> Result<AddOutcome, PlacementError> {
    if widget_type == WidgetType::Unknown {
        return Err(PlacementError::UnsupportedType(widget_type.to_string()));
    }

    let existing = Column::ALL.into_iter().find_map(|c| {
        layout
            .columns
            .get(c)
            .iter()
            .position(|w| w.widget_type == widget_type)
            .map(|index| (c, index))
    });

    if let Some((source_column, source_index)) = existing {
        let id = layout.columns.get(source_column)[source_index].id.clone();
        let placement = move_widget(layout, &id, source_column, source_index, column, order)?;
        return Ok(AddOutcome::Relocated { id, placement });
    }

    let dest = layout.columns.get_mut(column);
    let order = order.min(dest.len());
    let widget = Widget::with_generated_id(widget_type, column, order);
    let id = widget.id.clone();
    dest.insert(order, widget);
    renumber(dest);

    Ok(AddOutcome::Created {
        id,
        placement: Placement { column, order },
    })
}

/// Flips `enabled` and returns the new value.
pub fn toggle_widget(layout: &mut LayoutConfiguration, widget_id: &str) -> Result<bool, PlacementError> {
    let widget = find_widget_mut(layout, widget_id)?;
    widget.enabled = !widget.enabled;
    Ok(widget.enabled)
}

/// Flips `collapsed` and returns the new value.
pub fn collapse_widget(
    layout: &mut LayoutConfiguration,
    widget_id: &str,
) -> Result<bool, PlacementError> {
    let widget = find_widget_mut(layout, widget_id)?;
    widget.collapsed = !widget.collapsed;
    Ok(widget.collapsed)
}

/// Replaces all three column widths as given.
pub fn update_column_widths(layout: &mut LayoutConfiguration, widths: ColumnWidths) {
    layout.column_widths = widths;
}
