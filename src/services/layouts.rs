//! Server-side widget layout repository.
//!
//! Named widget layouts managed through the admin surface are stored as one
//! JSON document per layout id in a directory, on top of [`FileStorage`].

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{LayoutConfiguration, DEFAULT_LAYOUT_ID};
use crate::storage::{validate_key, FileStorage, KeyValueStore};

/// Repository of server-persisted widget layouts.
///
/// Writes are serialized through an internal lock, so a repository can be
/// shared between request handlers.
#[derive(Debug)]
pub struct LayoutRepository {
    root: PathBuf,
    storage: Mutex<FileStorage>,
}

impl LayoutRepository {
    /// Creates a repository rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            storage: Mutex::new(FileStorage::new(&root)),
            root,
        }
    }

    /// Returns the repository directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn storage(&self) -> Result<MutexGuard<'_, FileStorage>> {
        self.storage
            .lock()
            .map_err(|_| anyhow::anyhow!("Layout repository lock poisoned"))
    }

    /// Lists all stored layouts, newest first.
    ///
    /// Documents that fail to parse are skipped.
    pub fn list(&self) -> Result<Vec<LayoutConfiguration>> {
        let storage = self.storage()?;
        let keys = storage
            .keys()
            .with_context(|| format!("Failed to list layouts in {}", self.root.display()))?;

        let mut layouts = Vec::new();
        for key in keys {
            let Some(text) = storage.get(&key)? else {
                continue;
            };
            match serde_json::from_str::<LayoutConfiguration>(&text) {
                Ok(layout) => layouts.push(layout),
                Err(e) => warn!("Skipping unreadable layout '{}': {}", key, e),
            }
        }

        layouts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(layouts)
    }

    /// Loads a layout by id.
    ///
    /// Returns `Ok(None)` if no layout with that id exists.
    pub fn load(&self, id: &str) -> Result<Option<LayoutConfiguration>> {
        let text = self
            .storage()?
            .get(id)
            .with_context(|| format!("Failed to read layout '{id}'"))?;

        text.map(|text| {
            serde_json::from_str(&text).with_context(|| format!("Failed to parse layout '{id}'"))
        })
        .transpose()
    }

    /// Checks whether a layout with this id exists.
    pub fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.storage()?.get(id)?.is_some())
    }

    /// Writes a layout under its own id, replacing any previous version.
    pub fn save(&self, layout: &LayoutConfiguration) -> Result<()> {
        write_layout(&mut *self.storage()?, layout)
    }

    /// Replaces an existing layout. Returns false, writing nothing, if no
    /// layout with that id exists.
    pub fn update_if_exists(&self, layout: &LayoutConfiguration) -> Result<bool> {
        let mut storage = self.storage()?;
        if storage.get(&layout.id)?.is_none() {
            return Ok(false);
        }

        write_layout(&mut storage, layout)?;
        Ok(true)
    }

    /// Stores a new layout and returns its id.
    ///
    /// The layout keeps its id when it is valid and unused, otherwise a fresh
    /// one is assigned. The default layout's id is reserved.
    pub fn create(&self, mut layout: LayoutConfiguration) -> Result<String> {
        let mut storage = self.storage()?;
        if layout.id == DEFAULT_LAYOUT_ID
            || validate_key(&layout.id).is_err()
            || storage.get(&layout.id)?.is_some()
        {
            layout.id = format!("layout-{}", Uuid::new_v4().simple());
        }

        write_layout(&mut storage, &layout)?;
        Ok(layout.id)
    }

    /// Deletes a layout. Returns false if it did not exist.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut storage = self.storage()?;
        if storage.get(id)?.is_none() {
            return Ok(false);
        }

        storage
            .remove(id)
            .with_context(|| format!("Failed to delete layout '{id}'"))?;
        info!("Deleted widget layout {}", id);
        Ok(true)
    }
}

fn write_layout(storage: &mut FileStorage, layout: &LayoutConfiguration) -> Result<()> {
    let json = serde_json::to_string_pretty(layout).context("Failed to serialize layout")?;
    storage
        .set(&layout.id, &json)
        .with_context(|| format!("Failed to save layout '{}'", layout.id))?;

    info!("Stored widget layout '{}' ({})", layout.name, layout.id);
    Ok(())
}
