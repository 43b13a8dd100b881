//! Document controller: owns the template, history and selection.
//!
//! # Responsibility
//! - Apply element creation, movement and replacement as whole-document
//!   snapshots on a linear undo/redo history.
//! - Map drag-end events from the gesture collaborator onto controller
//!   operations.
//!
//! # Invariants
//! - `history` is never empty; index 0 is the initial document.
//! - `history_index` always points at `document`'s snapshot.
//! - Every failed by-id lookup is a silent no-op; the document is only
//!   replaced by a successful mutation.

pub mod drag;
pub mod palette;

use crate::catalog;
use crate::model::template::{Element, ElementKind, Template};
use drag::DragEnd;
use log::info;

/// Canvas width presets. Display-only; never touches history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// The single owner of the document being edited.
#[derive(Debug, Clone)]
pub struct Editor {
    document: Template,
    history: Vec<Template>,
    history_index: usize,
    selection: Option<Element>,
    view_mode: ViewMode,
}

impl Editor {
    /// Creates an editor seeded with one history snapshot of `document`.
    pub fn new(document: Template) -> Self {
        Self {
            history: vec![document.clone()],
            history_index: 0,
            document,
            selection: None,
            view_mode: ViewMode::default(),
        }
    }

    pub fn document(&self) -> &Template {
        &self.document
    }

    pub fn selection(&self) -> Option<&Element> {
        self.selection.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Sets the selected element. No history effect.
    pub fn select(&mut self, element: Element) {
        self.selection = Some(element);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn can_undo(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    /// Steps back one snapshot. No-op at the first snapshot.
    pub fn undo(&mut self) {
        if self.history_index == 0 {
            return;
        }
        self.history_index -= 1;
        self.document = self.history[self.history_index].clone();
        info!(
            "event=undo module=editor status=ok history_index={}",
            self.history_index
        );
    }

    /// Steps forward one snapshot. No-op at the last snapshot.
    pub fn redo(&mut self) {
        if self.history_index + 1 >= self.history.len() {
            return;
        }
        self.history_index += 1;
        self.document = self.history[self.history_index].clone();
        info!(
            "event=redo module=editor status=ok history_index={}",
            self.history_index
        );
    }

    /// Commits `next` as the new document: truncates any redo branch,
    /// appends the snapshot and advances the index. Redo is linear, not a
    /// tree.
    fn apply_mutation(&mut self, next: Template) {
        self.history.truncate(self.history_index + 1);
        self.history.push(next.clone());
        self.history_index = self.history.len() - 1;
        self.document = next;
    }

    /// Moves the element at `source_index` of `source_section` to
    /// `dest_index` of `dest_section`.
    ///
    /// # Contract
    /// - Same section and same index: no-op, no history push.
    /// - Same-section moves interpret `dest_index` against the list after
    ///   removal (remove, then insert verbatim).
    /// - Missing sections or an out-of-range source index: silent no-op.
    /// - A destination index past the end inserts at the end.
    pub fn reorder(
        &mut self,
        source_section: &str,
        source_index: usize,
        dest_section: &str,
        dest_index: usize,
    ) {
        if source_section == dest_section && source_index == dest_index {
            return;
        }

        let mut next = self.document.clone();

        let moved = {
            let Some(section) = next.section_mut(source_section) else {
                return;
            };
            if source_index >= section.elements.len() {
                return;
            }
            section.elements.remove(source_index)
        };

        let Some(section) = next.section_mut(dest_section) else {
            return;
        };
        let insert_at = dest_index.min(section.elements.len());
        let moved_id = moved.id.clone();
        section.elements.insert(insert_at, moved);

        self.apply_mutation(next);
        info!(
            "event=reorder module=editor status=ok element={moved_id} \
             from={source_section}:{source_index} to={dest_section}:{insert_at}"
        );
    }

    /// Creates a new element of `kind` with the catalog defaults and a
    /// fresh unique id, inserted at `dest_index` of `dest_section`.
    ///
    /// Returns the new element's id, or `None` when the kind has no
    /// catalog entry or the section does not exist (silent no-op).
    pub fn create_from_palette(
        &mut self,
        kind: &ElementKind,
        dest_section: &str,
        dest_index: usize,
    ) -> Option<String> {
        let element = catalog::new_element(kind)?;
        let element_id = element.id.clone();

        let mut next = self.document.clone();
        let section = next.section_mut(dest_section)?;
        let insert_at = dest_index.min(section.elements.len());
        section.elements.insert(insert_at, element);

        self.apply_mutation(next);
        info!(
            "event=create_element module=editor status=ok kind={kind} \
             element={element_id} section={dest_section} index={insert_at}"
        );
        Some(element_id)
    }

    /// Replaces the element matching `updated.id` (first match, scanning
    /// sections in order then elements in order) and selects the updated
    /// value. Unknown ids leave document and selection unchanged.
    pub fn update_element(&mut self, updated: Element) {
        let mut next = self.document.clone();

        let slot = next
            .sections
            .iter_mut()
            .flat_map(|section| section.elements.iter_mut())
            .find(|element| element.id == updated.id);

        let Some(slot) = slot else {
            return;
        };
        *slot = updated.clone();

        self.apply_mutation(next);
        info!(
            "event=update_element module=editor status=ok element={}",
            updated.id
        );
        self.selection = Some(updated);
    }

    /// Applies a drag-end event from the gesture collaborator.
    ///
    /// # Contract
    /// - No destination: drag cancelled, no mutation.
    /// - A source container naming a section of this document is a move.
    /// - Any other source is parsed as a palette id
    ///   (`<category>-<kind>`, kind = substring after the first `-`);
    ///   unknown kinds are silent no-ops.
    pub fn handle_drag_end(&mut self, event: &DragEnd) {
        let Some(destination) = &event.destination else {
            return;
        };

        if self.document.has_section(&event.source.container_id) {
            self.reorder(
                &event.source.container_id,
                event.source.index,
                &destination.container_id,
                destination.index,
            );
            return;
        }

        if let Some(kind) = drag::palette_kind(&event.source.container_id) {
            self.create_from_palette(&kind, &destination.container_id, destination.index);
        }
    }
}
