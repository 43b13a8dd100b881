//! Template document model.
//!
//! # Responsibility
//! - Define the canonical template/section/element structures shared by
//!   the editor, canvas, export and store layers.
//! - Provide the default document factory used at first launch.
//!
//! # Invariants
//! - Element ids are unique across a whole template.
//! - Section ids are unique within a template.
//! - Element order inside a section is meaningful (render/export order).

pub mod default;
pub mod template;
