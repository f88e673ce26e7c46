//! Wrapping rotation over a fixed list.
//!
//! # Invariants
//! - The backing list is non-empty and never changes after construction.
//! - `0 <= position < len` at all times.

use crate::notify::ChangeNotifier;
use log::trace;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction failure for a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    /// No elements to rotate over.
    EmptyList,
}

impl Display for RotationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyList => write!(f, "rotation list must not be empty"),
        }
    }
}

impl Error for RotationError {}

/// Cyclic read pointer over a fixed, non-empty ordered list.
#[derive(Debug)]
pub struct RotationIndex<T> {
    items: Vec<T>,
    position: usize,
    changes: ChangeNotifier<usize>,
}

impl<T> RotationIndex<T> {
    /// Creates a rotation positioned at the first element.
    ///
    /// # Errors
    /// - `RotationError::EmptyList` when `items` is empty. This is a setup
    ///   bug, not a runtime condition.
    pub fn try_new(items: impl Into<Vec<T>>) -> Result<Self, RotationError> {
        let items = items.into();
        if items.is_empty() {
            return Err(RotationError::EmptyList);
        }
        Ok(Self {
            items,
            position: 0,
            changes: ChangeNotifier::new(),
        })
    }

    /// Moves to the next element, wrapping at the end, and returns it.
    pub fn advance(&mut self) -> &T {
        self.position = (self.position + 1) % self.items.len();
        trace!(
            "event=rotation_advance module=rotation status=ok position={} len={}",
            self.position,
            self.items.len()
        );
        self.changes.notify(self.position);
        &self.items[self.position]
    }

    /// Element at the current position.
    pub fn current(&self) -> &T {
        &self.items[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn revision(&self) -> u64 {
        self.changes.revision()
    }

    /// Registers an observer that receives the new position after each advance.
    pub fn subscribe(&mut self, observer: impl FnMut(&usize) + Send + 'static) {
        self.changes.subscribe(observer);
    }
}

#[cfg(test)]
mod tests {
    use super::{RotationError, RotationIndex};

    #[test]
    fn single_element_rotation_stays_put() {
        let mut rotation = RotationIndex::try_new(vec!["only"]).unwrap();
        assert_eq!(*rotation.advance(), "only");
        assert_eq!(rotation.position(), 0);
        assert_eq!(rotation.revision(), 1);
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = RotationIndex::<u8>::try_new(Vec::new()).unwrap_err();
        assert_eq!(err, RotationError::EmptyList);
    }
}
