//! Core document types: templates, sections, elements.
//!
//! # Responsibility
//! - Define the data shapes every other module mutates or reads.
//! - Keep the wire format stable: `kind` serializes as `type`, properties
//!   are an open string-keyed map of scalars.
//!
//! # Invariants
//! - An element id never changes after creation.
//! - `ElementKind::Other` preserves unrecognized kind strings read back
//!   from storage instead of dropping them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Open property bag attached to elements and sections.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// Content block kind placed within a section.
///
/// Kinds are string-keyed on the wire. Strings outside the known set are
/// kept verbatim in `Other`, so a document written by a newer build loads
/// without data loss; unknown kinds simply render as plain content and
/// export nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Image,
    Button,
    Container,
    Columns,
    Form,
    Input,
    /// Unrecognized kind string, preserved verbatim.
    Other(String),
}

impl ElementKind {
    /// All kinds with catalog support, in palette order.
    pub const KNOWN: &'static [ElementKind] = &[
        ElementKind::Heading,
        ElementKind::Paragraph,
        ElementKind::Image,
        ElementKind::Button,
        ElementKind::Container,
        ElementKind::Columns,
        ElementKind::Form,
        ElementKind::Input,
    ];

    /// Returns the wire string for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Image => "image",
            Self::Button => "button",
            Self::Container => "container",
            Self::Columns => "columns",
            Self::Form => "form",
            Self::Input => "input",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Parses a kind string, returning `None` for anything outside the
    /// known set. Palette ids go through this so typos never create
    /// `Other` elements.
    pub fn parse_known(value: &str) -> Option<Self> {
        Self::KNOWN
            .iter()
            .find(|kind| kind.as_str() == value)
            .cloned()
    }
}

impl From<String> for ElementKind {
    fn from(value: String) -> Self {
        Self::parse_known(&value).unwrap_or(Self::Other(value))
    }
}

impl From<ElementKind> for String {
    fn from(value: ElementKind) -> Self {
        value.as_str().to_string()
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar property value: text, integer or boolean.
///
/// Untagged on the wire so stored documents read naturally as JSON
/// (`"16px"`, `2`, `false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A single content block placed within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Stable id, unique across the whole template.
    pub id: String,
    /// Serialized as `type` to match the stored document schema.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Display text, or an authoring note for layout kinds.
    pub content: String,
    /// Kind-specific style/content properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: PropertyMap,
}

impl Element {
    /// Creates an element with a freshly generated unique id.
    pub fn new(kind: ElementKind, content: impl Into<String>) -> Self {
        Self::with_id(generate_element_id(), kind, content)
    }

    /// Creates an element with a caller-provided id.
    ///
    /// Used by the default factory, where ids are fixed human-readable
    /// strings, and by storage round-trips.
    pub fn with_id(id: impl Into<String>, kind: ElementKind, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: content.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Builder-style property setter for seeded documents and tests.
    pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Returns a property value by key, if present.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Returns a text property, falling back to `default` when the key is
    /// absent or not text. Export and canvas defaults route through here.
    pub fn text_property<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.property(key).and_then(PropertyValue::as_text).unwrap_or(default)
    }
}

/// A named, ordered container of elements within a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique within the template.
    pub id: String,
    /// Display-only label shown in the editing canvas.
    pub name: String,
    /// Render/export order is the vector order.
    pub elements: Vec<Element>,
    /// Section-level style properties (e.g. `backgroundColor`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: PropertyMap,
}

impl Section {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            elements: Vec::new(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    pub fn text_property<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.properties
            .get(key)
            .and_then(PropertyValue::as_text)
            .unwrap_or(default)
    }
}

/// The full document being edited: an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub sections: Vec<Section>,
}

impl Template {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Returns whether a section with this id exists.
    pub fn has_section(&self, section_id: &str) -> bool {
        self.sections.iter().any(|section| section.id == section_id)
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == section_id)
    }

    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|section| section.id == section_id)
    }

    /// First element matching `element_id`, scanning sections in order
    /// then elements in order.
    pub fn element(&self, element_id: &str) -> Option<&Element> {
        self.sections
            .iter()
            .flat_map(|section| section.elements.iter())
            .find(|element| element.id == element_id)
    }
}

/// Generates a unique element id for palette-created elements.
pub fn generate_element_id() -> String {
    format!("element-{}", Uuid::new_v4())
}

/// Generates a unique template id for save-as copies.
pub fn generate_template_id() -> String {
    format!("template-{}", Uuid::new_v4())
}
