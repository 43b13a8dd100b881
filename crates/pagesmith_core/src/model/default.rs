//! Default document factory.
//!
//! # Responsibility
//! - Produce the seeded template shown before anything is loaded: a
//!   header with a welcome heading and intro paragraph, an empty main
//!   content area, and a footer with a copyright line.
//!
//! # Invariants
//! - Seeded ids (`default-template`, `header`, `main-content`, `footer`,
//!   element ids) are fixed strings; tests and stored documents rely on
//!   them.

use super::template::{Element, ElementKind, Section, Template};

/// Builds the initial template instance.
pub fn default_template() -> Template {
    Template {
        id: "default-template".to_string(),
        name: "Default Template".to_string(),
        sections: vec![
            Section::new("header", "Header")
                .with_property("backgroundColor", "#f9f9f9")
                .with_elements(vec![
                    Element::with_id(
                        "header-heading",
                        ElementKind::Heading,
                        "Welcome to Your Website",
                    )
                    .with_property("level", "h1")
                    .with_property("align", "center")
                    .with_property("color", "#333333")
                    .with_property("fontSize", "32px"),
                    Element::with_id(
                        "header-paragraph",
                        ElementKind::Paragraph,
                        "This is a sample website created with our drag-and-drop builder. \
                         Start customizing it now!",
                    )
                    .with_property("align", "center")
                    .with_property("color", "#666666")
                    .with_property("fontSize", "16px"),
                ]),
            Section::new("main-content", "Main Content").with_property("backgroundColor", "#ffffff"),
            Section::new("footer", "Footer")
                .with_property("backgroundColor", "#f5f5f5")
                .with_elements(vec![Element::with_id(
                    "footer-text",
                    ElementKind::Paragraph,
                    "© 2025 Your Company. All rights reserved.",
                )
                .with_property("align", "center")
                .with_property("color", "#999999")
                .with_property("fontSize", "14px")]),
        ],
    }
}
