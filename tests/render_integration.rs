use corkboard::render::render;

#[test]
fn absent_and_empty_render_to_empty_string() {
    assert_eq!(render(None), "");
    assert_eq!(render(Some("")), "");
}

#[test]
fn bold_markup_renders_strong() {
    let html = render(Some("hello **world**"));
    assert!(html.contains("<strong>world</strong>"));
    assert!(html.contains("hello"));
}

#[test]
fn headings_render_structural_markup() {
    let html = render(Some("# Shopping\n\nmilk and eggs"));
    assert!(html.contains("<h1>Shopping</h1>"));
    assert!(html.contains("milk and eggs"));
}

#[test]
fn image_links_pass_through_unchanged() {
    // Links back at the board's own upload endpoint are not rewritten.
    let html = render(Some("look ![](/uploads/0a1b2c3d)"));
    assert!(html.contains("src=\"/uploads/0a1b2c3d\""));
}

#[test]
fn external_links_render_anchors() {
    let html = render(Some("[docs](https://example.com/docs)"));
    assert!(html.contains("href=\"https://example.com/docs\""));
}

#[test]
fn rendering_is_deterministic() {
    let input = "# Title\n\nsome *emphasis* and ![](/uploads/abc)";
    assert_eq!(render(Some(input)), render(Some(input)));
}
