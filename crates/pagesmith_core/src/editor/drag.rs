//! Drag-and-drop collaborator contract.
//!
//! # Responsibility
//! - Define the drag-end event shape the gesture library delivers.
//! - Decode palette drag-source ids into element kinds.
//!
//! # Invariants
//! - An absent destination means "drag cancelled" and must cause no
//!   mutation.
//! - Palette ids are `<category>-<kind>`; the kind is the substring after
//!   the first separator.

use crate::model::template::ElementKind;

/// One end of a drag: a container (section or palette entry) plus an
/// index within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub container_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(container_id: impl Into<String>, index: usize) -> Self {
        Self {
            container_id: container_id.into(),
            index,
        }
    }
}

/// A completed drag gesture. `destination` is `None` when the drag was
/// released outside any drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    pub fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// Decodes a palette drag-source id into its element kind.
///
/// Returns `None` when the id has no separator or the suffix is not a
/// known kind, so section-like ids never create elements by accident.
pub fn palette_kind(source_id: &str) -> Option<ElementKind> {
    let (_category, kind) = source_id.split_once('-')?;
    ElementKind::parse_known(kind)
}
