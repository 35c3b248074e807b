//! Layout store: the current layout, saved snapshots and their persistence.
//!
//! The store owns a [`KeyValueStore`] handle and is passed explicitly to
//! whatever drives it (CLI command, request handler, test). Every successful
//! mutation stamps `updatedAt` and writes the current layout back to storage.
//! A failed write of the current snapshot keeps the in-memory change and is
//! reported as [`StoreError::NotSaved`].

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::constants::{CURRENT_LAYOUT_KEY, SAVED_LAYOUTS_KEY};
use crate::engine::{self, AddOutcome, Placement, PlacementError};
use crate::models::layout::validate_name;
use crate::models::{default_layout, Column, ColumnWidths, LayoutConfiguration, WidgetType};
use crate::storage::{KeyValueStore, StorageError};

/// Errors surfaced by user-initiated store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Placement request rejected by the engine
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// Storage backend failure
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Layout could not be serialized
    #[error("failed to serialize layouts: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No saved layout with this id
    #[error("saved layout not found: {0}")]
    LayoutNotFound(String),

    /// Name rejected by validation
    #[error("invalid layout name: {0}")]
    InvalidName(String),

    /// The change was applied in memory but writing it to storage failed
    #[error("layout changed but not saved: {0}")]
    NotSaved(#[source] Box<StoreError>),
}

/// Holds the current layout configuration and the saved layouts list.
#[derive(Debug)]
pub struct LayoutStore<S: KeyValueStore> {
    storage: S,
    current: LayoutConfiguration,
    saved: Vec<LayoutConfiguration>,
}

impl<S: KeyValueStore> LayoutStore<S> {
    /// Opens a store, reading back any persisted state.
    ///
    /// Missing, unreadable or malformed snapshots fall back to the built-in
    /// default layout and an empty saved list. Opening never fails.
    pub fn open(storage: S) -> Self {
        let current = read_current(&storage);
        let saved = read_saved(&storage);
        debug!(
            "Opened layout store: current '{}', {} saved layouts",
            current.id,
            saved.len()
        );

        Self {
            storage,
            current,
            saved,
        }
    }

    /// The current layout.
    #[must_use]
    pub fn current(&self) -> &LayoutConfiguration {
        &self.current
    }

    /// Saved layouts, oldest first.
    #[must_use]
    pub fn saved_layouts(&self) -> &[LayoutConfiguration] {
        &self.saved
    }

    /// Gets a saved layout by id.
    #[must_use]
    pub fn saved_layout(&self, id: &str) -> Option<&LayoutConfiguration> {
        self.saved.iter().find(|l| l.id == id)
    }

    /// The storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store and returns the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Moves a widget; see [`engine::move_widget`].
    pub fn move_widget(
        &mut self,
        widget_id: &str,
        source_column: Column,
        source_index: usize,
        dest_column: Column,
        dest_index: usize,
    ) -> Result<Placement, StoreError> {
        let result = engine::move_widget(
            &mut self.current,
            widget_id,
            source_column,
            source_index,
            dest_column,
            dest_index,
        );
        self.finish("move", result)
    }

    /// Moves a widget identified only by id to `dest_index` of `dest_column`.
    pub fn move_widget_to(
        &mut self,
        widget_id: &str,
        dest_column: Column,
        dest_index: usize,
    ) -> Result<Placement, StoreError> {
        let Some((source_column, source_index)) = engine::find_widget(&self.current, widget_id)
        else {
            return self.finish("move", Err(PlacementError::WidgetNotFound(widget_id.to_string())));
        };
        self.move_widget(widget_id, source_column, source_index, dest_column, dest_index)
    }

    /// Adds (or relocates) a widget; see [`engine::add_widget_to_column`].
    pub fn add_widget_to_column(
        &mut self,
        widget_type: WidgetType,
        column: Column,
        order: usize,
    ) -> Result<AddOutcome, StoreError> {
        let result = engine::add_widget_to_column(&mut self.current, widget_type, column, order);
        self.finish("add", result)
    }

    /// Flips a widget's `enabled` flag.
    pub fn toggle_widget(&mut self, widget_id: &str) -> Result<bool, StoreError> {
        let result = engine::toggle_widget(&mut self.current, widget_id);
        self.finish("toggle", result)
    }

    /// Flips a widget's `collapsed` flag.
    pub fn collapse_widget(&mut self, widget_id: &str) -> Result<bool, StoreError> {
        let result = engine::collapse_widget(&mut self.current, widget_id);
        self.finish("collapse", result)
    }

    /// Replaces the column widths. Values are stored as given.
    pub fn update_column_widths(&mut self, widths: ColumnWidths) -> Result<(), StoreError> {
        if !widths.is_within_budget() {
            warn!(
                "Column widths {}/{}/{} add up to {}%",
                widths.left,
                widths.center,
                widths.right,
                widths.total()
            );
        }
        engine::update_column_widths(&mut self.current, widths);
        self.commit()
    }

    /// Clones the current layout into a new named snapshot.
    ///
    /// Returns the id of the snapshot.
    pub fn save_layout(&mut self, name: &str, description: &str) -> Result<String, StoreError> {
        validate_name(name).map_err(|e| StoreError::InvalidName(e.to_string()))?;

        let mut snapshot = self.current.clone();
        snapshot.id = self.next_saved_id();
        snapshot.name = name.to_string();
        snapshot.description = description.to_string();
        snapshot.touch();

        let id = snapshot.id.clone();
        self.saved.push(snapshot);
        if let Err(e) = self.persist_saved() {
            self.saved.pop();
            return Err(e);
        }

        info!("Saved layout '{}' as {}", name, id);
        Ok(id)
    }

    /// Replaces the current layout with a copy of a saved snapshot.
    ///
    /// The copy's `updatedAt` is refreshed; the snapshot itself is unchanged.
    pub fn load_layout(&mut self, id: &str) -> Result<(), StoreError> {
        let layout = self
            .saved_layout(id)
            .cloned()
            .ok_or_else(|| StoreError::LayoutNotFound(id.to_string()))?;

        info!("Loaded layout '{}' ({})", layout.name, layout.id);
        self.current = layout;
        self.commit()
    }

    /// Removes a saved snapshot and returns it.
    pub fn delete_saved_layout(&mut self, id: &str) -> Result<LayoutConfiguration, StoreError> {
        let index = self
            .saved
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| StoreError::LayoutNotFound(id.to_string()))?;

        let removed = self.saved.remove(index);
        if let Err(e) = self.persist_saved() {
            self.saved.insert(index, removed);
            return Err(e);
        }

        info!("Deleted saved layout '{}' ({})", removed.name, removed.id);
        Ok(removed)
    }

    /// Replaces the current layout with the built-in default.
    pub fn reset_to_default(&mut self) -> Result<(), StoreError> {
        self.current = default_layout();
        info!("Reset layout to default");
        self.commit()
    }

    fn finish<T>(
        &mut self,
        operation: &str,
        result: Result<T, PlacementError>,
    ) -> Result<T, StoreError> {
        match result {
            Ok(value) => {
                self.commit()?;
                Ok(value)
            }
            Err(e) => {
                warn!("Ignored {} request: {}", operation, e);
                Err(e.into())
            }
        }
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.current.touch();
        self.write_current().map_err(|e| {
            error!("Failed to persist current layout: {}", e);
            StoreError::NotSaved(Box::new(e))
        })
    }

    fn write_current(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.current)?;
        self.storage.set(CURRENT_LAYOUT_KEY, &json)?;
        Ok(())
    }

    fn persist_saved(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.saved)?;
        self.storage.set(SAVED_LAYOUTS_KEY, &json)?;
        Ok(())
    }

    fn next_saved_id(&self) -> String {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let id = format!("layout-{stamp}");
            if self.saved_layout(&id).is_none() {
                return id;
            }
            stamp += 1;
        }
    }
}

fn read_current<S: KeyValueStore>(storage: &S) -> LayoutConfiguration {
    let text = match storage.get(CURRENT_LAYOUT_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return default_layout(),
        Err(e) => {
            error!("Failed to read current layout, using default: {}", e);
            return default_layout();
        }
    };

    match serde_json::from_str::<LayoutConfiguration>(&text) {
        Ok(layout) => match layout.validate() {
            Ok(()) => layout,
            Err(e) => {
                warn!("Stored layout '{}' is inconsistent, using default: {}", layout.id, e);
                default_layout()
            }
        },
        Err(e) => {
            error!("Failed to parse current layout, using default: {}", e);
            default_layout()
        }
    }
}

fn read_saved<S: KeyValueStore>(storage: &S) -> Vec<LayoutConfiguration> {
    let text = match storage.get(SAVED_LAYOUTS_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(e) => {
            error!("Failed to read saved layouts: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<LayoutConfiguration>>(&text) {
        Ok(layouts) => layouts
            .into_iter()
            .filter(|layout| match layout.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Dropping inconsistent saved layout '{}': {}", layout.id, e);
                    false
                }
            })
            .collect(),
        Err(e) => {
            error!("Failed to parse saved layouts: {}", e);
            Vec::new()
        }
    }
}
