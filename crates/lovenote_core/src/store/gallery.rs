//! Memory gallery with single selection.
//!
//! # Invariants
//! - The catalog is fixed at construction.
//! - At most one memory is selected; the selection always points into the
//!   catalog.

use crate::model::memory::Memory;
use crate::notify::ChangeNotifier;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Selection change reported to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryChange {
    Selected(String),
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// No memory with this id exists in the catalog.
    UnknownMemory(String),
}

impl Display for GalleryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMemory(id) => write!(f, "memory not found: `{id}`"),
        }
    }
}

impl Error for GalleryError {}

/// Read-only memory catalog plus the detail-view selection.
#[derive(Debug)]
pub struct MemoryGallery {
    memories: Vec<Memory>,
    selected: Option<usize>,
    changes: ChangeNotifier<GalleryChange>,
}

impl MemoryGallery {
    pub fn new(memories: Vec<Memory>) -> Self {
        Self {
            memories,
            selected: None,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn memories(&self) -> &[Memory] {
        &self.memories
    }

    /// Opens the detail view for `id`.
    ///
    /// Re-selecting the open memory is not a change and notifies nobody.
    pub fn select(&mut self, id: &str) -> Result<&Memory, GalleryError> {
        let index = self
            .memories
            .iter()
            .position(|memory| memory.id == id)
            .ok_or_else(|| GalleryError::UnknownMemory(id.to_string()))?;
        if self.selected == Some(index) {
            return Ok(&self.memories[index]);
        }
        self.selected = Some(index);
        self.changes.notify(GalleryChange::Selected(id.to_string()));
        Ok(&self.memories[index])
    }

    /// Returns to the grid view. Returns whether a selection was cleared.
    pub fn clear_selection(&mut self) -> bool {
        if self.selected.take().is_none() {
            return false;
        }
        self.changes.notify(GalleryChange::Cleared);
        true
    }

    pub fn selected(&self) -> Option<&Memory> {
        self.selected.map(|index| &self.memories[index])
    }

    pub fn revision(&self) -> u64 {
        self.changes.revision()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&GalleryChange) + Send + 'static) {
        self.changes.subscribe(observer);
    }
}
