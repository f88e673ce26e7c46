//! Memories screen: photo grid and detail view.

use crate::catalog::builtin_memories;
use crate::model::memory::Memory;
use crate::store::gallery::{GalleryError, MemoryGallery};
use serde::Serialize;

/// Render input for the memories screen.
///
/// `selected` set means the detail view is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoriesView {
    pub memories: Vec<Memory>,
    pub selected: Option<Memory>,
    pub revision: u64,
}

#[derive(Debug)]
pub struct MemoriesScreen {
    gallery: MemoryGallery,
}

impl Default for MemoriesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoriesScreen {
    pub fn new() -> Self {
        Self {
            gallery: MemoryGallery::new(builtin_memories()),
        }
    }

    /// Tap on a grid tile.
    pub fn open(&mut self, id: &str) -> Result<&Memory, GalleryError> {
        self.gallery.select(id)
    }

    /// Back button in the detail view.
    pub fn close(&mut self) -> bool {
        self.gallery.clear_selection()
    }

    pub fn gallery(&self) -> &MemoryGallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut MemoryGallery {
        &mut self.gallery
    }

    pub fn view(&self) -> MemoriesView {
        MemoriesView {
            memories: self.gallery.memories().to_vec(),
            selected: self.gallery.selected().cloned(),
            revision: self.gallery.revision(),
        }
    }
}
