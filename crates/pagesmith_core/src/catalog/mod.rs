//! Element catalog: one descriptor per known kind.
//!
//! # Responsibility
//! - Hold palette defaults, property-editor field schemas and both render
//!   functions (canvas + markup) in a single table keyed by kind, so the
//!   interactive and export representations cannot drift apart silently.
//!
//! # Invariants
//! - Descriptor order matches `ElementKind::KNOWN`.
//! - A `None` markup function is a deliberate export gap (container,
//!   columns, form, input), not a missing implementation.

use crate::canvas::{self, AssetStatus, CanvasNode};
use crate::export;
use crate::model::template::{Element, ElementKind, PropertyValue};

/// Const-friendly default property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Text(&'static str),
    Integer(i64),
    Bool(bool),
}

impl From<DefaultValue> for PropertyValue {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Text(text) => PropertyValue::Text(text.to_string()),
            DefaultValue::Integer(number) => PropertyValue::Integer(number),
            DefaultValue::Bool(flag) => PropertyValue::Bool(flag),
        }
    }
}

/// What a property-editor field writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    /// The element's `content` string.
    Content,
    /// A named entry in the element's property map.
    Property(&'static str),
}

/// Input control backing a field, including its validation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    TextArea,
    /// One of a fixed option set.
    Select(&'static [&'static str]),
    /// Hex color value (`#rgb` / `#rrggbb`).
    Color,
    /// CSS length (`24px`, `1.5rem`, `100%`, shorthand lists, `auto`).
    Length,
    /// Alignment picker (left/center/right/justify).
    Align,
    /// Integer value.
    Number,
    /// Boolean flag.
    Checkbox,
}

/// One bound field in the property editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub target: FieldTarget,
    pub label: &'static str,
    pub control: FieldControl,
}

/// Everything the rest of the system needs to know about one kind.
pub struct ElementDescriptor {
    pub kind: ElementKind,
    /// Palette display name.
    pub label: &'static str,
    /// Content seeded into palette-created elements.
    pub default_content: &'static str,
    /// Properties seeded into palette-created elements.
    pub defaults: &'static [(&'static str, DefaultValue)],
    /// Content-editing view fields.
    pub content_fields: &'static [FieldSpec],
    /// Style-editing view fields.
    pub style_fields: &'static [FieldSpec],
    /// Canvas preview renderer.
    pub render_canvas: fn(&Element, &AssetStatus) -> CanvasNode,
    /// Static markup renderer; `None` means the kind exports nothing.
    pub render_markup: Option<fn(&Element) -> String>,
}

const ALIGN_FIELD: FieldSpec = FieldSpec {
    target: FieldTarget::Property("align"),
    label: "Alignment",
    control: FieldControl::Align,
};

static DESCRIPTORS: &[ElementDescriptor] = &[
    ElementDescriptor {
        kind: ElementKind::Heading,
        label: "Heading",
        default_content: "New Heading",
        defaults: &[
            ("level", DefaultValue::Text("h2")),
            ("align", DefaultValue::Text("left")),
            ("color", DefaultValue::Text("#000000")),
            ("fontSize", DefaultValue::Text("24px")),
        ],
        content_fields: &[FieldSpec {
            target: FieldTarget::Content,
            label: "Text",
            control: FieldControl::Text,
        }],
        style_fields: &[
            FieldSpec {
                target: FieldTarget::Property("level"),
                label: "Heading Level",
                control: FieldControl::Select(&["h1", "h2", "h3", "h4", "h5", "h6"]),
            },
            ALIGN_FIELD,
            FieldSpec {
                target: FieldTarget::Property("color"),
                label: "Text Color",
                control: FieldControl::Color,
            },
            FieldSpec {
                target: FieldTarget::Property("fontSize"),
                label: "Font Size",
                control: FieldControl::Length,
            },
        ],
        render_canvas: canvas::heading_node,
        render_markup: Some(export::heading_fragment),
    },
    ElementDescriptor {
        kind: ElementKind::Paragraph,
        label: "Paragraph",
        default_content: "This is a new paragraph. Click to edit the content.",
        defaults: &[
            ("align", DefaultValue::Text("left")),
            ("color", DefaultValue::Text("#333333")),
            ("fontSize", DefaultValue::Text("16px")),
        ],
        content_fields: &[FieldSpec {
            target: FieldTarget::Content,
            label: "Text",
            control: FieldControl::TextArea,
        }],
        style_fields: &[
            ALIGN_FIELD,
            FieldSpec {
                target: FieldTarget::Property("color"),
                label: "Text Color",
                control: FieldControl::Color,
            },
            FieldSpec {
                target: FieldTarget::Property("fontSize"),
                label: "Font Size",
                control: FieldControl::Length,
            },
        ],
        render_canvas: canvas::paragraph_node,
        render_markup: Some(export::paragraph_fragment),
    },
    ElementDescriptor {
        kind: ElementKind::Image,
        label: "Image",
        default_content: "",
        defaults: &[
            ("src", DefaultValue::Text("/placeholder.svg?height=200&width=400")),
            ("alt", DefaultValue::Text("Image description")),
            ("width", DefaultValue::Text("100%")),
            ("height", DefaultValue::Text("auto")),
        ],
        content_fields: &[
            FieldSpec {
                target: FieldTarget::Property("src"),
                label: "Image URL",
                control: FieldControl::Text,
            },
            FieldSpec {
                target: FieldTarget::Property("alt"),
                label: "Alt Text",
                control: FieldControl::Text,
            },
        ],
        style_fields: &[
            FieldSpec {
                target: FieldTarget::Property("width"),
                label: "Width",
                control: FieldControl::Length,
            },
            FieldSpec {
                target: FieldTarget::Property("height"),
                label: "Height",
                control: FieldControl::Length,
            },
        ],
        render_canvas: canvas::image_node,
        render_markup: Some(export::image_fragment),
    },
    ElementDescriptor {
        kind: ElementKind::Button,
        label: "Button",
        default_content: "Click Me",
        defaults: &[
            ("variant", DefaultValue::Text("default")),
            ("size", DefaultValue::Text("default")),
            ("link", DefaultValue::Text("#")),
            ("align", DefaultValue::Text("left")),
        ],
        content_fields: &[FieldSpec {
            target: FieldTarget::Content,
            label: "Text",
            control: FieldControl::Text,
        }],
        style_fields: &[
            FieldSpec {
                target: FieldTarget::Property("variant"),
                label: "Button Style",
                control: FieldControl::Select(&["default", "secondary", "outline", "ghost"]),
            },
            FieldSpec {
                target: FieldTarget::Property("size"),
                label: "Button Size",
                control: FieldControl::Select(&["default", "sm", "lg"]),
            },
            ALIGN_FIELD,
            FieldSpec {
                target: FieldTarget::Property("link"),
                label: "Button Link",
                control: FieldControl::Text,
            },
            FieldSpec {
                target: FieldTarget::Property("padding"),
                label: "Button Padding",
                control: FieldControl::Length,
            },
            FieldSpec {
                target: FieldTarget::Property("margin"),
                label: "Button Margin",
                control: FieldControl::Length,
            },
        ],
        render_canvas: canvas::button_node,
        render_markup: Some(export::button_fragment),
    },
    ElementDescriptor {
        kind: ElementKind::Container,
        label: "Container",
        default_content: "",
        defaults: &[
            ("padding", DefaultValue::Text("16px")),
            ("backgroundColor", DefaultValue::Text("#f9f9f9")),
            ("borderRadius", DefaultValue::Text("4px")),
        ],
        content_fields: &[FieldSpec {
            target: FieldTarget::Content,
            label: "Container Description",
            control: FieldControl::TextArea,
        }],
        style_fields: &[
            FieldSpec {
                target: FieldTarget::Property("padding"),
                label: "Padding",
                control: FieldControl::Length,
            },
            FieldSpec {
                target: FieldTarget::Property("backgroundColor"),
                label: "Background Color",
                control: FieldControl::Color,
            },
            FieldSpec {
                target: FieldTarget::Property("borderRadius"),
                label: "Border Radius",
                control: FieldControl::Length,
            },
        ],
        render_canvas: canvas::container_node,
        render_markup: None,
    },
    ElementDescriptor {
        kind: ElementKind::Columns,
        label: "Columns",
        default_content: "",
        defaults: &[
            ("columns", DefaultValue::Integer(2)),
            ("gap", DefaultValue::Text("16px")),
        ],
        content_fields: &[FieldSpec {
            target: FieldTarget::Content,
            label: "Columns Description",
            control: FieldControl::TextArea,
        }],
        style_fields: &[
            FieldSpec {
                target: FieldTarget::Property("columns"),
                label: "Column Count",
                control: FieldControl::Number,
            },
            FieldSpec {
                target: FieldTarget::Property("gap"),
                label: "Gap",
                control: FieldControl::Length,
            },
        ],
        render_canvas: canvas::columns_node,
        render_markup: None,
    },
    ElementDescriptor {
        kind: ElementKind::Form,
        label: "Form",
        default_content: "",
        defaults: &[
            ("action", DefaultValue::Text("#")),
            ("method", DefaultValue::Text("post")),
        ],
        content_fields: &[],
        style_fields: &[
            FieldSpec {
                target: FieldTarget::Property("action"),
                label: "Action URL",
                control: FieldControl::Text,
            },
            FieldSpec {
                target: FieldTarget::Property("method"),
                label: "Method",
                control: FieldControl::Select(&["get", "post"]),
            },
        ],
        render_canvas: canvas::form_node,
        render_markup: None,
    },
    ElementDescriptor {
        kind: ElementKind::Input,
        label: "Input",
        default_content: "",
        defaults: &[
            ("label", DefaultValue::Text("Input Field")),
            ("placeholder", DefaultValue::Text("Enter text here")),
            ("type", DefaultValue::Text("text")),
            ("required", DefaultValue::Bool(false)),
        ],
        content_fields: &[
            FieldSpec {
                target: FieldTarget::Property("label"),
                label: "Label",
                control: FieldControl::Text,
            },
            FieldSpec {
                target: FieldTarget::Property("placeholder"),
                label: "Placeholder",
                control: FieldControl::Text,
            },
        ],
        style_fields: &[
            FieldSpec {
                target: FieldTarget::Property("type"),
                label: "Input Type",
                control: FieldControl::Select(&["text", "email", "password", "number"]),
            },
            FieldSpec {
                target: FieldTarget::Property("required"),
                label: "Required",
                control: FieldControl::Checkbox,
            },
        ],
        render_canvas: canvas::input_node,
        render_markup: None,
    },
];

/// Looks up the descriptor for a kind. `Other(_)` has none.
pub fn descriptor(kind: &ElementKind) -> Option<&'static ElementDescriptor> {
    DESCRIPTORS
        .iter()
        .find(|descriptor| descriptor.kind == *kind)
}

/// Builds a palette-created element for a kind: fresh unique id, the
/// descriptor's default content and properties. `None` for kinds without
/// a descriptor.
pub fn new_element(kind: &ElementKind) -> Option<Element> {
    let descriptor = descriptor(kind)?;
    let mut element = Element::new(kind.clone(), descriptor.default_content);
    for (key, value) in descriptor.defaults {
        element
            .properties
            .insert((*key).to_string(), PropertyValue::from(*value));
    }
    Some(element)
}
