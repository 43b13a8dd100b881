//! Interactive canvas renderer.
//!
//! # Responsibility
//! - Map a template into a structural preview tree a UI shell can paint,
//!   independent of the export markup (the two are approximations of each
//!   other, not pixel-equal).
//! - Track per-element image load failures so a failed image renders as a
//!   placeholder block instead of being retried.
//!
//! # Invariants
//! - Every known kind produces a typed node; unknown kinds fall back to a
//!   plain text node carrying the raw content.
//! - A failed asset stays failed until explicitly cleared.

use crate::catalog;
use crate::model::template::{Element, Section, Template};
use std::collections::BTreeSet;

/// Horizontal alignment for text and button rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Parses an `align` property value; anything unrecognized is left.
    pub fn parse(value: &str) -> Self {
        match value {
            "center" => Self::Center,
            "right" => Self::Right,
            "justify" => Self::Justify,
            _ => Self::Left,
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Inline text styling shared by heading and paragraph nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub color: String,
    pub font_size: String,
    pub align: Alignment,
}

/// One visual node in the editing canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasNode {
    Heading {
        level: String,
        text: String,
        style: TextStyle,
    },
    Paragraph {
        text: String,
        style: TextStyle,
    },
    Image {
        src: String,
        alt: String,
        width: String,
        height: String,
    },
    /// Placeholder block shown once an image load failure is reported.
    ImagePlaceholder {
        width: String,
    },
    Button {
        text: String,
        link: String,
        align: Alignment,
    },
    Container {
        note: String,
        padding: String,
        background: String,
        border_radius: String,
    },
    Columns {
        note: String,
        count: i64,
        gap: String,
    },
    Form {
        action: String,
        method: String,
    },
    Input {
        label: String,
        placeholder: String,
        input_type: String,
        required: bool,
    },
    /// Raw-content fallback for unrecognized kinds.
    Text(String),
    /// Drop-zone hint rendered when a section has no elements.
    EmptySection,
}

/// Per-element asset load state, keyed by element id.
///
/// Entered once when a load error is reported; never retried
/// automatically.
#[derive(Debug, Clone, Default)]
pub struct AssetStatus {
    failed: BTreeSet<String>,
}

impl AssetStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a load failure for this element id.
    pub fn mark_failed(&mut self, element_id: &str) {
        self.failed.insert(element_id.to_string());
    }

    /// Explicitly clears a recorded failure (e.g. after the source URL
    /// was edited).
    pub fn clear(&mut self, element_id: &str) {
        self.failed.remove(element_id);
    }

    pub fn is_failed(&self, element_id: &str) -> bool {
        self.failed.contains(element_id)
    }
}

/// A section's rendered view: banner metadata plus child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub id: String,
    pub name: String,
    pub background: String,
    pub nodes: Vec<CanvasNode>,
}

/// Renders the whole template, sections in order.
pub fn render_template(template: &Template, assets: &AssetStatus) -> Vec<SectionView> {
    template
        .sections
        .iter()
        .map(|section| render_section(section, assets))
        .collect()
}

/// Renders one section; empty sections get a drop-zone placeholder node.
pub fn render_section(section: &Section, assets: &AssetStatus) -> SectionView {
    let nodes = if section.elements.is_empty() {
        vec![CanvasNode::EmptySection]
    } else {
        section
            .elements
            .iter()
            .map(|element| render_element(element, assets))
            .collect()
    };

    SectionView {
        id: section.id.clone(),
        name: section.name.clone(),
        background: section.text_property("backgroundColor", "#ffffff").to_string(),
        nodes,
    }
}

/// Renders one element through its catalog descriptor; kinds without a
/// descriptor fall back to raw content text.
pub fn render_element(element: &Element, assets: &AssetStatus) -> CanvasNode {
    match catalog::descriptor(&element.kind) {
        Some(descriptor) => (descriptor.render_canvas)(element, assets),
        None => CanvasNode::Text(element.content.clone()),
    }
}

fn text_style(element: &Element, default_color: &str, default_size: &str) -> TextStyle {
    TextStyle {
        color: element.text_property("color", default_color).to_string(),
        font_size: element.text_property("fontSize", default_size).to_string(),
        align: Alignment::parse(element.text_property("align", "left")),
    }
}

pub(crate) fn heading_node(element: &Element, _assets: &AssetStatus) -> CanvasNode {
    CanvasNode::Heading {
        level: element.text_property("level", "h2").to_string(),
        text: element.content.clone(),
        style: text_style(element, "#000000", "24px"),
    }
}

pub(crate) fn paragraph_node(element: &Element, _assets: &AssetStatus) -> CanvasNode {
    CanvasNode::Paragraph {
        text: element.content.clone(),
        style: text_style(element, "#333333", "16px"),
    }
}

pub(crate) fn image_node(element: &Element, assets: &AssetStatus) -> CanvasNode {
    let width = element.text_property("width", "100%").to_string();
    if assets.is_failed(&element.id) {
        return CanvasNode::ImagePlaceholder { width };
    }
    CanvasNode::Image {
        src: element
            .text_property("src", "/placeholder.svg?height=200&width=400")
            .to_string(),
        alt: element.text_property("alt", "").to_string(),
        width,
        height: element.text_property("height", "auto").to_string(),
    }
}

pub(crate) fn button_node(element: &Element, _assets: &AssetStatus) -> CanvasNode {
    CanvasNode::Button {
        text: element.content.clone(),
        link: element.text_property("link", "#").to_string(),
        align: Alignment::parse(element.text_property("align", "left")),
    }
}

pub(crate) fn container_node(element: &Element, _assets: &AssetStatus) -> CanvasNode {
    CanvasNode::Container {
        note: element.content.clone(),
        padding: element.text_property("padding", "16px").to_string(),
        background: element.text_property("backgroundColor", "#f9f9f9").to_string(),
        border_radius: element.text_property("borderRadius", "4px").to_string(),
    }
}

pub(crate) fn columns_node(element: &Element, _assets: &AssetStatus) -> CanvasNode {
    CanvasNode::Columns {
        note: element.content.clone(),
        count: element
            .property("columns")
            .and_then(crate::model::template::PropertyValue::as_integer)
            .unwrap_or(2),
        gap: element.text_property("gap", "16px").to_string(),
    }
}

pub(crate) fn form_node(element: &Element, _assets: &AssetStatus) -> CanvasNode {
    CanvasNode::Form {
        action: element.text_property("action", "#").to_string(),
        method: element.text_property("method", "post").to_string(),
    }
}

pub(crate) fn input_node(element: &Element, _assets: &AssetStatus) -> CanvasNode {
    CanvasNode::Input {
        label: element.text_property("label", "Input Field").to_string(),
        placeholder: element
            .text_property("placeholder", "Enter text here")
            .to_string(),
        input_type: element.text_property("type", "text").to_string(),
        required: element
            .property("required")
            .and_then(crate::model::template::PropertyValue::as_bool)
            .unwrap_or(false),
    }
}
