use pagesmith_core::{default_template, export, Element, ElementKind, Section, Template};

fn single_element_template(element: Element) -> Template {
    let mut template = Template::new("t", "Test Page");
    template
        .sections
        .push(Section::new("body", "Body").with_elements(vec![element]));
    template
}

#[test]
fn default_template_exports_one_h1_and_two_paragraphs_in_order() {
    let bundle = export(&default_template());

    assert_eq!(bundle.markup.matches("<h1").count(), 1);
    assert_eq!(bundle.markup.matches("<p ").count(), 2);

    let h1_at = bundle.markup.find("<h1").unwrap();
    let first_p = bundle.markup.find("<p ").unwrap();
    let last_p = bundle.markup.rfind("<p ").unwrap();
    assert!(h1_at < first_p);
    assert!(first_p < last_p);

    assert!(bundle
        .markup
        .contains("Welcome to Your Website"));
    assert!(bundle
        .markup
        .contains("© 2025 Your Company. All rights reserved."));
}

#[test]
fn export_is_deterministic() {
    let template = default_template();
    assert_eq!(export(&template), export(&template));
}

#[test]
fn heading_fragment_applies_defaults_when_properties_are_absent() {
    let bundle = export(&single_element_template(Element::with_id(
        "h",
        ElementKind::Heading,
        "Bare Heading",
    )));

    assert!(bundle.markup.contains(
        "<h2 style=\"color: #000000; font-size: 24px; text-align: left\">Bare Heading</h2>"
    ));
}

#[test]
fn heading_fragment_uses_level_property_as_tag() {
    let element = Element::with_id("h", ElementKind::Heading, "Third")
        .with_property("level", "h3")
        .with_property("color", "#112233");
    let bundle = export(&single_element_template(element));

    assert!(bundle
        .markup
        .contains("<h3 style=\"color: #112233; font-size: 24px; text-align: left\">Third</h3>"));
}

#[test]
fn paragraph_fragment_applies_defaults() {
    let bundle = export(&single_element_template(Element::with_id(
        "p",
        ElementKind::Paragraph,
        "Body text",
    )));

    assert!(bundle.markup.contains(
        "<p style=\"color: #333333; font-size: 16px; text-align: left\">Body text</p>"
    ));
}

#[test]
fn image_fragment_defaults_to_empty_src_and_alt() {
    let bundle = export(&single_element_template(Element::with_id(
        "img",
        ElementKind::Image,
        "",
    )));

    assert!(bundle
        .markup
        .contains("<img src=\"\" alt=\"\" style=\"width: 100%; height: auto\">"));
}

#[test]
fn button_alignment_selects_justify_class() {
    for (align, class) in [
        ("left", "justify-start"),
        ("center", "justify-center"),
        ("right", "justify-end"),
    ] {
        let element = Element::with_id("b", ElementKind::Button, "Go")
            .with_property("align", align)
            .with_property("link", "/start");
        let bundle = export(&single_element_template(element));

        assert!(
            bundle
                .markup
                .contains(&format!("<div class=\"button-container {class}\">")),
            "align {align} should map to {class}"
        );
        assert!(bundle.markup.contains("href=\"/start\""));
        assert!(bundle.markup.contains("background-color: #0070f3"));
    }
}

#[test]
fn layout_and_form_kinds_emit_no_markup() {
    for kind in [
        ElementKind::Container,
        ElementKind::Columns,
        ElementKind::Form,
        ElementKind::Input,
    ] {
        let element = Element::with_id("el", kind.clone(), "hidden note");
        let bundle = export(&single_element_template(element));

        assert!(
            !bundle.markup.contains("hidden note"),
            "kind {kind} must not be exported"
        );
    }
}

#[test]
fn unrecognized_kind_emits_no_markup() {
    let element = Element::with_id("el", ElementKind::Other("video".to_string()), "clip text");
    let bundle = export(&single_element_template(element));

    assert!(!bundle.markup.contains("clip text"));
}

#[test]
fn section_background_defaults_to_white() {
    let mut template = Template::new("t", "Test Page");
    template.sections.push(Section::new("plain", "Plain"));
    let bundle = export(&template);

    assert!(bundle
        .markup
        .contains("<div class=\"section\" style=\"background-color: #ffffff\">"));
}

#[test]
fn section_background_uses_section_property() {
    let bundle = export(&default_template());

    assert!(bundle
        .markup
        .contains("<div class=\"section\" style=\"background-color: #f9f9f9\">"));
}

#[test]
fn markup_is_a_complete_html_document() {
    let bundle = export(&default_template());

    assert!(bundle.markup.starts_with("<!DOCTYPE html>"));
    assert!(bundle.markup.contains("<title>Default Template</title>"));
    assert!(bundle.markup.ends_with("</body>\n</html>"));
}

#[test]
fn stylesheet_interpolates_only_the_template_name() {
    let mut renamed = default_template();
    renamed.name = "Landing Page".to_string();

    let default_css = export(&default_template()).stylesheet;
    let renamed_css = export(&renamed).stylesheet;

    assert!(default_css.starts_with("/* Styles for Default Template */"));
    assert!(renamed_css.starts_with("/* Styles for Landing Page */"));
    // Beyond the name comment, the stylesheet is document-independent.
    assert_eq!(
        default_css.split_once("*/").unwrap().1,
        renamed_css.split_once("*/").unwrap().1
    );
    assert!(default_css.contains(".button-container {"));
    assert!(default_css.contains("@media (max-width: 768px)"));
}
