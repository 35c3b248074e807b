//! Widget layout CLI commands.
//!
//! Every command opens the layout store in the configured data directory,
//! applies one operation and exits; the store writes the result back.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::engine::AddOutcome;
use crate::models::{Column, ColumnWidths, LayoutConfiguration, WidgetType};
use crate::render::render_plan;
use crate::storage::FileStorage;
use crate::store::{LayoutStore, StoreError};

/// Widget layout commands
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(subcommand)]
    command: LayoutCommand,
}

#[derive(Subcommand, Debug)]
enum LayoutCommand {
    /// Show the current layout
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move a widget to a column position
    Move {
        /// Widget id
        widget_id: String,
        /// Destination column (left, center, right)
        column: String,
        /// Destination index (clamped to the column length)
        index: usize,
    },
    /// Add a widget, or move it if its type is already placed
    Add {
        /// Widget type tag (e.g. box-shadow)
        widget_type: String,
        /// Destination column (left, center, right)
        column: String,
        /// Position in the column (defaults to the end)
        order: Option<usize>,
    },
    /// Enable or disable a widget
    Toggle {
        /// Widget id
        widget_id: String,
    },
    /// Collapse or expand a widget
    Collapse {
        /// Widget id
        widget_id: String,
    },
    /// Set the column widths in percent
    Widths {
        /// Left column width
        left: u16,
        /// Center column width
        center: u16,
        /// Right column width
        right: u16,
        /// Accept widths adding up to more than 100%
        #[arg(long)]
        force: bool,
    },
    /// Save the current layout under a name
    Save {
        /// Layout name
        name: String,
        /// Layout description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Replace the current layout with a saved one
    Load {
        /// Saved layout id
        id: String,
    },
    /// List saved layouts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved layout
    Delete {
        /// Saved layout id
        id: String,
    },
    /// Restore the built-in default layout
    Reset,
    /// Print the render plan of the current layout as JSON
    Render,
}

/// JSON row of `layout list`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SavedLayoutOutput {
    id: String,
    name: String,
    description: String,
    widget_count: usize,
    updated_at: String,
}

impl From<&LayoutConfiguration> for SavedLayoutOutput {
    fn from(layout: &LayoutConfiguration) -> Self {
        Self {
            id: layout.id.clone(),
            name: layout.name.clone(),
            description: layout.description.clone(),
            widget_count: layout.widget_count(),
            updated_at: layout.updated_at.to_rfc3339(),
        }
    }
}

fn open_store() -> CliResult<LayoutStore<FileStorage>> {
    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    let data_dir = config
        .data_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;

    Ok(LayoutStore::open(FileStorage::new(data_dir)))
}

fn parse_column(value: &str) -> CliResult<Column> {
    value
        .parse::<Column>()
        .map_err(|e| CliError::validation(e.to_string()))
}

fn store_error(e: StoreError) -> CliError {
    match e {
        StoreError::Storage(_) | StoreError::Serialize(_) | StoreError::NotSaved(_) => {
            CliError::io(e.to_string())
        }
        _ => CliError::validation(e.to_string()),
    }
}

impl LayoutArgs {
    /// Execute layout subcommand
    pub fn execute(&self) -> CliResult<()> {
        let mut store = open_store()?;

        match &self.command {
            LayoutCommand::Show { json } => {
                if *json {
                    print_json(store.current())?;
                } else {
                    print_layout(store.current());
                }
            }
            LayoutCommand::Move {
                widget_id,
                column,
                index,
            } => {
                let column = parse_column(column)?;
                let placement = store
                    .move_widget_to(widget_id, column, *index)
                    .map_err(store_error)?;
                println!(
                    "Moved {} to {}[{}]",
                    widget_id, placement.column, placement.order
                );
            }
            LayoutCommand::Add {
                widget_type,
                column,
                order,
            } => {
                let widget_type = widget_type
                    .parse::<WidgetType>()
                    .map_err(|e| CliError::validation(e.to_string()))?;
                let column = parse_column(column)?;
                let outcome = store
                    .add_widget_to_column(widget_type, column, order.unwrap_or(usize::MAX))
                    .map_err(store_error)?;

                let placement = outcome.placement();
                match outcome {
                    AddOutcome::Created { id, .. } => println!(
                        "Added {} at {}[{}]",
                        id, placement.column, placement.order
                    ),
                    AddOutcome::Relocated { id, .. } => println!(
                        "{} already placed; moved {} to {}[{}]",
                        widget_type, id, placement.column, placement.order
                    ),
                }
            }
            LayoutCommand::Toggle { widget_id } => {
                let enabled = store
                    .toggle_widget(widget_id)
                    .map_err(store_error)?;
                println!(
                    "{} is now {}",
                    widget_id,
                    if enabled { "enabled" } else { "disabled" }
                );
            }
            LayoutCommand::Collapse { widget_id } => {
                let collapsed = store
                    .collapse_widget(widget_id)
                    .map_err(store_error)?;
                println!(
                    "{} is now {}",
                    widget_id,
                    if collapsed { "collapsed" } else { "expanded" }
                );
            }
            LayoutCommand::Widths {
                left,
                center,
                right,
                force,
            } => {
                let widths = ColumnWidths::new(*left, *center, *right);
                if !widths.is_within_budget() && !force {
                    return Err(CliError::validation(format!(
                        "Column widths add up to {}%; use --force to accept more than 100%",
                        widths.total()
                    )));
                }
                store.update_column_widths(widths).map_err(store_error)?;
                println!("Column widths set to {}/{}/{}", left, center, right);
            }
            LayoutCommand::Save { name, description } => {
                let id = store.save_layout(name, description).map_err(store_error)?;
                println!("Saved layout '{}' as {}", name, id);
            }
            LayoutCommand::Load { id } => {
                store.load_layout(id).map_err(store_error)?;
                println!("Loaded layout {}", id);
            }
            LayoutCommand::List { json } => {
                let rows: Vec<SavedLayoutOutput> = store
                    .saved_layouts()
                    .iter()
                    .map(SavedLayoutOutput::from)
                    .collect();
                if *json {
                    print_json(&rows)?;
                } else if rows.is_empty() {
                    println!("No saved layouts.");
                } else {
                    for row in rows {
                        println!("{}  {}  ({} widgets)", row.id, row.name, row.widget_count);
                    }
                }
            }
            LayoutCommand::Delete { id } => {
                let removed = store.delete_saved_layout(id).map_err(store_error)?;
                println!("Deleted layout '{}' ({})", removed.name, removed.id);
            }
            LayoutCommand::Reset => {
                store.reset_to_default().map_err(store_error)?;
                println!("Layout reset to default.");
            }
            LayoutCommand::Render => {
                print_json(&render_plan(store.current()))?;
            }
        }

        Ok(())
    }
}

/// Output a layout in human-readable format
fn print_layout(layout: &LayoutConfiguration) {
    println!("{} ({})", layout.name, layout.id);
    if !layout.description.is_empty() {
        println!("{}", layout.description);
    }
    println!("Updated: {}", layout.updated_at.to_rfc3339());
    println!(
        "Column widths: left {}% | center {}% | right {}%",
        layout.column_widths.left, layout.column_widths.center, layout.column_widths.right
    );

    for column in Column::ALL {
        let widgets = layout.columns.get(column);
        println!();
        println!("{} ({})", column.as_str().to_uppercase(), widgets.len());
        for widget in widgets {
            let mut flags = String::new();
            if !widget.enabled {
                flags.push_str(" [disabled]");
            }
            if widget.collapsed {
                flags.push_str(" [collapsed]");
            }
            println!("  {}. {:<22} {}{}", widget.order, widget.id, widget.title, flags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("left").unwrap(), Column::Left);
        let err = parse_column("top").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.message.contains("top"));
    }

    #[test]
    fn test_store_error_exit_codes() {
        assert_eq!(
            store_error(StoreError::LayoutNotFound("x".to_string())).exit_code(),
            1
        );
        assert_eq!(
            store_error(StoreError::Storage(crate::storage::StorageError::InvalidKey(
                "x".to_string()
            )))
            .exit_code(),
            2
        );
        assert_eq!(
            store_error(StoreError::NotSaved(Box::new(StoreError::Storage(
                crate::storage::StorageError::InvalidKey("x".to_string())
            ))))
            .exit_code(),
            2
        );
    }
}
