//! Core domain logic for PageSmith, a drag-and-drop page builder.
//! This crate is the single source of truth for document mutation,
//! history, export and persistence behavior.

pub mod canvas;
pub mod catalog;
pub mod db;
pub mod editor;
pub mod export;
pub mod logging;
pub mod model;
pub mod props;
pub mod store;

pub use canvas::{render_template, AssetStatus, CanvasNode, SectionView};
pub use catalog::{descriptor, ElementDescriptor, FieldControl, FieldSpec, FieldTarget};
pub use editor::drag::{DragEnd, DragLocation};
pub use editor::palette::{palette_items, PaletteItem, PALETTE};
pub use editor::{Editor, ViewMode};
pub use export::{export, ExportBundle};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::default::default_template;
pub use model::template::{Element, ElementKind, PropertyValue, Section, Template};
pub use props::{DraftError, PropertyDraft};
pub use store::{
    save_template_as, SqliteTemplateStore, StoreError, StoreResult, TemplateStore,
    SAVED_TEMPLATES_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
