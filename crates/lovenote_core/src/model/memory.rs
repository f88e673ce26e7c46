//! Static memory record shown in the photo gallery.

use serde::{Deserialize, Serialize};

/// Catalog identifier for a memory.
pub type MemoryId = String;

/// One photo memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: MemoryId,
    pub title: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Remote image URL; loading is left to the shell.
    pub image: String,
    pub description: String,
}

impl Memory {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            image: image.into(),
            description: description.into(),
        }
    }
}
