use pagesmith_core::{default_template, Element, ElementKind, PropertyValue, Template};

#[test]
fn new_element_generates_unique_nonempty_ids() {
    let first = Element::new(ElementKind::Heading, "one");
    let second = Element::new(ElementKind::Heading, "two");

    assert!(!first.id.is_empty());
    assert!(first.id.starts_with("element-"));
    assert_ne!(first.id, second.id);
}

#[test]
fn element_serialization_uses_expected_wire_fields() {
    let element = Element::with_id("header-heading", ElementKind::Heading, "Welcome")
        .with_property("level", "h1")
        .with_property("fontSize", "32px");

    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(json["id"], "header-heading");
    assert_eq!(json["type"], "heading");
    assert_eq!(json["content"], "Welcome");
    assert_eq!(json["properties"]["level"], "h1");
    assert_eq!(json["properties"]["fontSize"], "32px");

    let decoded: Element = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, element);
}

#[test]
fn property_scalars_round_trip_untagged() {
    let element = Element::with_id("el", ElementKind::Columns, "")
        .with_property("columns", 2)
        .with_property("gap", "16px")
        .with_property("required", false);

    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(json["properties"]["columns"], 2);
    assert_eq!(json["properties"]["gap"], "16px");
    assert_eq!(json["properties"]["required"], false);

    let decoded: Element = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.property("columns"), Some(&PropertyValue::Integer(2)));
    assert_eq!(
        decoded.property("required"),
        Some(&PropertyValue::Bool(false))
    );
}

#[test]
fn unknown_kind_strings_are_preserved() {
    let json = serde_json::json!({
        "id": "el-1",
        "type": "video",
        "content": "clip"
    });

    let decoded: Element = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.kind, ElementKind::Other("video".to_string()));
    assert_eq!(decoded.kind.as_str(), "video");

    let reencoded = serde_json::to_value(&decoded).unwrap();
    assert_eq!(reencoded["type"], "video");
}

#[test]
fn parse_known_rejects_unknown_kinds() {
    assert_eq!(
        ElementKind::parse_known("heading"),
        Some(ElementKind::Heading)
    );
    assert_eq!(ElementKind::parse_known("video"), None);
    assert_eq!(ElementKind::parse_known(""), None);
}

#[test]
fn default_template_has_expected_sections_and_elements() {
    let template = default_template();

    assert_eq!(template.id, "default-template");
    assert_eq!(template.name, "Default Template");

    let section_ids: Vec<&str> = template
        .sections
        .iter()
        .map(|section| section.id.as_str())
        .collect();
    assert_eq!(section_ids, ["header", "main-content", "footer"]);

    let header = template.section("header").unwrap();
    assert_eq!(header.elements.len(), 2);
    assert_eq!(header.elements[0].kind, ElementKind::Heading);
    assert_eq!(header.elements[0].text_property("level", "h2"), "h1");
    assert_eq!(header.elements[1].kind, ElementKind::Paragraph);

    assert!(template.section("main-content").unwrap().elements.is_empty());

    let footer = template.section("footer").unwrap();
    assert_eq!(footer.elements.len(), 1);
    assert_eq!(footer.elements[0].kind, ElementKind::Paragraph);
}

#[test]
fn default_template_element_ids_are_unique() {
    let template = default_template();
    let mut ids: Vec<&str> = template
        .sections
        .iter()
        .flat_map(|section| section.elements.iter())
        .map(|element| element.id.as_str())
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn template_element_lookup_scans_sections_in_order() {
    let template = default_template();

    let found = template.element("footer-text").unwrap();
    assert_eq!(found.id, "footer-text");
    assert!(template.element("missing-id").is_none());
}

#[test]
fn template_round_trips_through_json() {
    let template = default_template();
    let json = serde_json::to_string(&template).unwrap();
    let decoded: Template = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, template);
}
