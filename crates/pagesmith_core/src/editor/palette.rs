//! Palette: the fixed set of draggable element kinds.
//!
//! # Responsibility
//! - Enumerate palette categories and their kinds in display order.
//! - Produce the drag-source id for each entry
//!   (`<category>-<kind>`, the shape `drag::palette_kind` decodes).

use crate::catalog;
use crate::model::template::ElementKind;

/// A named group of palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub kinds: &'static [ElementKind],
}

/// Palette contents in display order.
pub const PALETTE: &[PaletteCategory] = &[
    PaletteCategory {
        id: "basic",
        name: "Basic Elements",
        kinds: &[
            ElementKind::Heading,
            ElementKind::Paragraph,
            ElementKind::Image,
            ElementKind::Button,
        ],
    },
    PaletteCategory {
        id: "layout",
        name: "Layout",
        kinds: &[ElementKind::Container, ElementKind::Columns],
    },
    PaletteCategory {
        id: "forms",
        name: "Forms",
        kinds: &[ElementKind::Form, ElementKind::Input],
    },
];

/// One draggable palette entry, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    pub kind: ElementKind,
    pub label: &'static str,
    /// Drag-source id consumed by the gesture collaborator.
    pub drag_source_id: String,
}

/// Flattens the palette into display-ready items.
pub fn palette_items() -> Vec<PaletteItem> {
    PALETTE
        .iter()
        .flat_map(|category| {
            category.kinds.iter().map(|kind| PaletteItem {
                kind: kind.clone(),
                label: catalog::descriptor(kind).map_or("", |descriptor| descriptor.label),
                drag_source_id: format!("{}-{}", category.id, kind.as_str()),
            })
        })
        .collect()
}
