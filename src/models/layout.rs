//! Layout configuration data structures.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::widget::{Column, Widget, WidgetType};

/// Maximum length of a layout name.
pub const MAX_NAME_LEN: usize = 100;

/// Column width percentages (left, center, right).
///
/// Values are not renormalized. Callers that accept user input should check
/// [`ColumnWidths::is_within_budget`] before applying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidths {
    /// Left column width in percent
    pub left: u16,
    /// Center column width in percent
    pub center: u16,
    /// Right column width in percent
    pub right: u16,
}

impl ColumnWidths {
    /// Creates a new set of widths.
    #[must_use]
    pub const fn new(left: u16, center: u16, right: u16) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Width of a single column.
    #[must_use]
    pub const fn get(&self, column: Column) -> u16 {
        match column {
            Column::Left => self.left,
            Column::Center => self.center,
            Column::Right => self.right,
        }
    }

    /// Sum of all three percentages.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.left as u32 + self.center as u32 + self.right as u32
    }

    /// Returns true if the widths fit in 100%.
    #[must_use]
    pub const fn is_within_budget(&self) -> bool {
        self.total() <= 100
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::new(30, 40, 30)
    }
}

/// The three ordered widget sequences of a layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Columns {
    /// Widgets in the left column, in display order
    #[serde(default)]
    pub left: Vec<Widget>,
    /// Widgets in the center column, in display order
    #[serde(default)]
    pub center: Vec<Widget>,
    /// Widgets in the right column, in display order
    #[serde(default)]
    pub right: Vec<Widget>,
}

impl Columns {
    /// Gets the widgets of a column.
    #[must_use]
    pub fn get(&self, column: Column) -> &Vec<Widget> {
        match column {
            Column::Left => &self.left,
            Column::Center => &self.center,
            Column::Right => &self.right,
        }
    }

    /// Gets a mutable reference to the widgets of a column.
    pub fn get_mut(&mut self, column: Column) -> &mut Vec<Widget> {
        match column {
            Column::Left => &mut self.left,
            Column::Center => &mut self.center,
            Column::Right => &mut self.right,
        }
    }

    /// Iterates over every widget, left column first.
    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.left.iter().chain(&self.center).chain(&self.right)
    }

    /// Total number of widgets across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.left.len() + self.center.len() + self.right.len()
    }

    /// Returns true if no column holds a widget.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Full assignment of widgets to the three columns plus column widths.
///
/// # Validation
///
/// - Within each column, `order` values are exactly `0..len` and match the
///   widget's index
/// - Every widget's `column` field names the column holding it
/// - Widget ids are unique across the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfiguration {
    /// Layout identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Long description
    #[serde(default)]
    pub description: String,
    /// Widget partition
    pub columns: Columns,
    /// Column width percentages
    #[serde(default)]
    pub column_widths: ColumnWidths,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl LayoutConfiguration {
    /// Creates an empty layout.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            id: id.into(),
            name,
            description: String::new(),
            columns: Columns::default(),
            column_widths: ColumnWidths::default(),
            updated_at: Utc::now(),
        })
    }

    /// Updates the modification timestamp to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Gets a widget by ID.
    #[must_use]
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.columns.iter().find(|w| w.id == id)
    }

    /// Gets the first widget of the given type.
    #[must_use]
    pub fn widget_of_type(&self, widget_type: WidgetType) -> Option<&Widget> {
        self.columns.iter().find(|w| w.widget_type == widget_type)
    }

    /// Total number of widgets.
    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.columns.len()
    }

    /// Validates the layout structure.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;

        let mut ids = HashSet::new();
        let mut types = HashSet::new();
        for column in Column::ALL {
            for (index, widget) in self.columns.get(column).iter().enumerate() {
                if widget.column != column {
                    anyhow::bail!(
                        "Widget '{}' is stored in the {} column but claims column {}",
                        widget.id,
                        column,
                        widget.column
                    );
                }

                if widget.order != index {
                    anyhow::bail!(
                        "Widget '{}' at position {} of the {} column has order {}",
                        widget.id,
                        index,
                        column,
                        widget.order
                    );
                }

                if !ids.insert(widget.id.as_str()) {
                    anyhow::bail!("Duplicate widget id '{}'", widget.id);
                }

                // Unknown tags from newer builds may repeat
                if widget.widget_type != WidgetType::Unknown && !types.insert(widget.widget_type) {
                    anyhow::bail!(
                        "Widget type '{}' is placed more than once (again as '{}')",
                        widget.widget_type,
                        widget.id
                    );
                }
            }
        }

        Ok(())
    }
}

/// Validates a layout name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Layout name cannot be empty");
    }

    if name.chars().count() > MAX_NAME_LEN {
        anyhow::bail!(
            "Layout name '{}' exceeds maximum length of {} characters (got {})",
            name,
            MAX_NAME_LEN,
            name.chars().count()
        );
    }

    Ok(())
}
