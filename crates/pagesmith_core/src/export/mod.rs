//! Export serializer: template -> static markup + stylesheet.
//!
//! # Responsibility
//! - Produce a deterministic HTML document and CSS text for a template,
//!   iterating sections then elements in order.
//!
//! # Invariants
//! - Kinds whose catalog descriptor has no markup function emit nothing
//!   (contractual gap for container/columns/form/input, not an error).
//! - Element content is interpolated verbatim; the output format carries
//!   no HTML escaping.
//! - The stylesheet is fixed apart from the template name in the leading
//!   comment.

use crate::canvas::Alignment;
use crate::catalog;
use crate::model::template::{Element, Template};

/// The two text blobs presented for manual copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub markup: String,
    pub stylesheet: String,
}

/// Serializes a template to its export bundle. Pure and deterministic.
pub fn export(template: &Template) -> ExportBundle {
    ExportBundle {
        markup: render_markup(template),
        stylesheet: render_stylesheet(template),
    }
}

fn render_markup(template: &Template) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"UTF-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20 <title>{}</title>\n\
         \x20 <style>\n\
         \x20   body {{ font-family: system-ui, sans-serif; margin: 0; padding: 0; }}\n\
         \x20   .section {{ padding: 1rem; }}\n\
         \x20   .container {{ max-width: 1200px; margin: 0 auto; }}\n\
         \x20   .text-left {{ text-align: left; }}\n\
         \x20   .text-center {{ text-align: center; }}\n\
         \x20   .text-right {{ text-align: right; }}\n\
         \x20   .button-container {{ display: flex; }}\n\
         \x20   .justify-start {{ justify-content: flex-start; }}\n\
         \x20   .justify-center {{ justify-content: center; }}\n\
         \x20   .justify-end {{ justify-content: flex-end; }}\n\
         \x20 </style>\n\
         </head>\n\
         <body>",
        template.name
    );

    for section in &template.sections {
        html.push_str(&format!(
            "\n  <div class=\"section\" style=\"background-color: {}\">\n    <div class=\"container\">",
            section.text_property("backgroundColor", "#ffffff")
        ));

        for element in &section.elements {
            if let Some(fragment) = element_fragment(element) {
                html.push_str(&fragment);
            }
        }

        html.push_str("\n    </div>\n  </div>");
    }

    html.push_str("\n</body>\n</html>");
    html
}

/// Returns the markup fragment for one element, or `None` when its kind
/// has no export representation.
pub fn element_fragment(element: &Element) -> Option<String> {
    let descriptor = catalog::descriptor(&element.kind)?;
    let render = descriptor.render_markup?;
    Some(render(element))
}

pub(crate) fn heading_fragment(element: &Element) -> String {
    let level = element.text_property("level", "h2");
    format!(
        "\n      <{level} style=\"color: {}; font-size: {}; text-align: {}\">{}</{level}>",
        element.text_property("color", "#000000"),
        element.text_property("fontSize", "24px"),
        element.text_property("align", "left"),
        element.content,
    )
}

pub(crate) fn paragraph_fragment(element: &Element) -> String {
    format!(
        "\n      <p style=\"color: {}; font-size: {}; text-align: {}\">{}</p>",
        element.text_property("color", "#333333"),
        element.text_property("fontSize", "16px"),
        element.text_property("align", "left"),
        element.content,
    )
}

pub(crate) fn image_fragment(element: &Element) -> String {
    format!(
        "\n      <img src=\"{}\" alt=\"{}\" style=\"width: {}; height: {}\">",
        element.text_property("src", ""),
        element.text_property("alt", ""),
        element.text_property("width", "100%"),
        element.text_property("height", "auto"),
    )
}

pub(crate) fn button_fragment(element: &Element) -> String {
    let align = Alignment::parse(element.text_property("align", "left"));
    let align_class = match align {
        Alignment::Center => "justify-center",
        Alignment::Right => "justify-end",
        _ => "justify-start",
    };

    format!(
        "\n      <div class=\"button-container {align_class}\">\n        \
         <a href=\"{}\" style=\"display: inline-block; padding: {}; margin: {}; \
         background-color: #0070f3; color: white; text-decoration: none; \
         border-radius: 0.25rem;\">{}</a>\n      </div>",
        element.text_property("link", "#"),
        element.text_property("padding", "0.5rem 1rem"),
        element.text_property("margin", "0"),
        element.content,
    )
}

fn render_stylesheet(template: &Template) -> String {
    format!(
        "/* Styles for {} */\n\
         body {{\n\
         \x20 font-family: system-ui, sans-serif;\n\
         \x20 margin: 0;\n\
         \x20 padding: 0;\n\
         \x20 line-height: 1.5;\n\
         }}\n\
         \n\
         .section {{\n\
         \x20 padding: 1rem;\n\
         }}\n\
         \n\
         .container {{\n\
         \x20 max-width: 1200px;\n\
         \x20 margin: 0 auto;\n\
         \x20 padding: 0 1rem;\n\
         }}\n\
         \n\
         .text-left {{\n\
         \x20 text-align: left;\n\
         }}\n\
         \n\
         .text-center {{\n\
         \x20 text-align: center;\n\
         }}\n\
         \n\
         .text-right {{\n\
         \x20 text-align: right;\n\
         }}\n\
         \n\
         .button-container {{\n\
         \x20 display: flex;\n\
         }}\n\
         \n\
         .justify-start {{\n\
         \x20 justify-content: flex-start;\n\
         }}\n\
         \n\
         .justify-center {{\n\
         \x20 justify-content: center;\n\
         }}\n\
         \n\
         .justify-end {{\n\
         \x20 justify-content: flex-end;\n\
         }}\n\
         \n\
         /* Responsive styles */\n\
         @media (max-width: 768px) {{\n\
         \x20 .container {{\n\
         \x20   padding: 0 0.5rem;\n\
         \x20 }}\n\
         }}\n",
        template.name
    )
}
