//! Host-independent exports.

use folio_render::{Page, Scheme};
use folio_web::{render_markup, static_html, ROOT_ELEMENT_ID};

#[test]
fn test_render_markup_matches_page_render() {
    let mut page = Page::default();
    for scheme in Scheme::ALL {
        let expected = page.render(scheme).unwrap();
        assert_eq!(render_markup(scheme.as_str()).unwrap(), expected);
    }
}

#[test]
fn test_render_markup_unknown_scheme_renders_dark() {
    let dark = render_markup("dark").unwrap();
    assert_eq!(render_markup("sepia").unwrap(), dark);
}

#[test]
fn test_static_html_is_a_full_document() {
    let html = static_html(Scheme::Light).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!("<div id=\"{}\">", ROOT_ELEMENT_ID)));
    assert!(html.contains("<title>"));
}

#[test]
fn test_static_html_carries_page_styles_per_scheme() {
    let light = static_html(Scheme::Light).unwrap();
    let dark = static_html(Scheme::Dark).unwrap();

    assert!(light.contains("background-color:#e2e8f0"));
    assert!(dark.contains("background-color:#050505"));
    assert!(dark.contains("overflow-x:hidden"));
    assert_ne!(light, dark);
}
