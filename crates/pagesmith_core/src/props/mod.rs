//! Property editor model: field schemas and staged drafts.
//!
//! # Responsibility
//! - Expose the catalog's per-kind content and style field sets.
//! - Stage edits on a local copy of the selected element until an
//!   explicit apply commits them through the controller.
//!
//! # Invariants
//! - Staging never touches the document; only `apply` does.
//! - Beginning a draft for a different element discards the previous
//!   draft silently.
//! - A rejected value leaves the draft unchanged.

use crate::catalog::{self, FieldControl, FieldSpec, FieldTarget};
use crate::editor::Editor;
use crate::model::template::{Element, ElementKind, PropertyValue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid color regex"));
// One or more CSS length tokens (shorthand like `0.5rem 1rem`), or a bare
// 0, or the `auto` keyword.
static CSS_LENGTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(auto|(0|\d+(\.\d+)?(px|rem|em|%))(\s+(0|\d+(\.\d+)?(px|rem|em|%)))*)$")
        .expect("valid length regex")
});

/// Rejection reasons for staged field values.
#[derive(Debug, PartialEq, Eq)]
pub enum DraftError {
    InvalidColor(String),
    InvalidLength(String),
    InvalidOption(String),
    InvalidAlignment(String),
    TypeMismatch {
        label: &'static str,
        expected: &'static str,
    },
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColor(value) => write!(f, "not a hex color: `{value}`"),
            Self::InvalidLength(value) => write!(f, "not a CSS length: `{value}`"),
            Self::InvalidOption(value) => write!(f, "not an allowed option: `{value}`"),
            Self::InvalidAlignment(value) => write!(f, "not an alignment: `{value}`"),
            Self::TypeMismatch { label, expected } => {
                write!(f, "field `{label}` expects a {expected} value")
            }
        }
    }
}

impl Error for DraftError {}

/// Content-editing fields for a kind (empty for kinds without any).
pub fn content_fields(kind: &ElementKind) -> &'static [FieldSpec] {
    match catalog::descriptor(kind) {
        Some(descriptor) => descriptor.content_fields,
        None => &[],
    }
}

/// Style-editing fields for a kind.
pub fn style_fields(kind: &ElementKind) -> &'static [FieldSpec] {
    match catalog::descriptor(kind) {
        Some(descriptor) => descriptor.style_fields,
        None => &[],
    }
}

/// A staged local copy of the selected element.
///
/// Edits accumulate here and reach the document only through `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDraft {
    element: Element,
}

impl PropertyDraft {
    /// Starts a draft from the selected element. Any previous draft is
    /// simply dropped by replacing it with this one.
    pub fn begin(element: &Element) -> Self {
        Self {
            element: element.clone(),
        }
    }

    /// The staged element value.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Returns whether this draft edits the given element.
    pub fn edits(&self, element_id: &str) -> bool {
        self.element.id == element_id
    }

    /// Stages raw content text without validation.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.element.content = content.into();
    }

    /// Stages a raw property value without validation.
    pub fn set_property(&mut self, key: &str, value: impl Into<PropertyValue>) {
        self.element.properties.insert(key.to_string(), value.into());
    }

    /// Stages a value through a field spec, validating it against the
    /// field's control. On rejection the draft keeps its prior value.
    pub fn stage(&mut self, field: &FieldSpec, value: PropertyValue) -> Result<(), DraftError> {
        let validated = validate(field, value)?;
        match field.target {
            FieldTarget::Content => {
                if let PropertyValue::Text(text) = validated {
                    self.element.content = text;
                }
            }
            FieldTarget::Property(key) => {
                self.element.properties.insert(key.to_string(), validated);
            }
        }
        Ok(())
    }

    /// Commits the draft through the controller. The controller replaces
    /// the element by id and re-selects the updated value; an id that no
    /// longer exists is a silent no-op.
    pub fn apply(self, editor: &mut Editor) {
        editor.update_element(self.element);
    }
}

fn validate(field: &FieldSpec, value: PropertyValue) -> Result<PropertyValue, DraftError> {
    match field.control {
        FieldControl::Text | FieldControl::TextArea => expect_text(field, value),
        FieldControl::Color => {
            let value = expect_text(field, value)?;
            let text = value.as_text().unwrap_or_default();
            if HEX_COLOR_RE.is_match(text) {
                Ok(value)
            } else {
                Err(DraftError::InvalidColor(text.to_string()))
            }
        }
        FieldControl::Length => {
            let value = expect_text(field, value)?;
            let text = value.as_text().unwrap_or_default();
            if CSS_LENGTH_RE.is_match(text) {
                Ok(value)
            } else {
                Err(DraftError::InvalidLength(text.to_string()))
            }
        }
        FieldControl::Select(options) => {
            let value = expect_text(field, value)?;
            let text = value.as_text().unwrap_or_default();
            if options.iter().any(|option| *option == text) {
                Ok(value)
            } else {
                Err(DraftError::InvalidOption(text.to_string()))
            }
        }
        FieldControl::Align => {
            let value = expect_text(field, value)?;
            let text = value.as_text().unwrap_or_default();
            match text {
                "left" | "center" | "right" | "justify" => Ok(value),
                _ => Err(DraftError::InvalidAlignment(text.to_string())),
            }
        }
        FieldControl::Number => match value {
            PropertyValue::Integer(_) => Ok(value),
            _ => Err(DraftError::TypeMismatch {
                label: field.label,
                expected: "number",
            }),
        },
        FieldControl::Checkbox => match value {
            PropertyValue::Bool(_) => Ok(value),
            _ => Err(DraftError::TypeMismatch {
                label: field.label,
                expected: "boolean",
            }),
        },
    }
}

fn expect_text(field: &FieldSpec, value: PropertyValue) -> Result<PropertyValue, DraftError> {
    match value {
        PropertyValue::Text(_) => Ok(value),
        _ => Err(DraftError::TypeMismatch {
            label: field.label,
            expected: "text",
        }),
    }
}
