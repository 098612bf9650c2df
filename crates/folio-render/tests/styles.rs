use folio_render::style::{is_unitless, kebab_case};
use folio_render::{create_styles, CssValue, PaletteSet, Scheme, StyleCache, StyleDecl, StyleSheet};
use insta::assert_snapshot;
use proptest::prelude::*;

fn describe(sheet: &StyleSheet) -> String {
    sheet
        .iter()
        .map(|(key, decl)| format!("{}: {}", key, decl.to_inline()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_dark_styles() {
    let sheet = create_styles(PaletteSet::builtin().for_scheme(Scheme::Dark));
    assert_snapshot!("dark_styles", describe(&sheet));
}

#[test]
fn test_light_styles() {
    let sheet = create_styles(PaletteSet::builtin().for_scheme(Scheme::Light));
    assert_snapshot!("light_styles", describe(&sheet));
}

#[test]
fn test_cache_follows_scheme_changes() {
    let palettes = PaletteSet::builtin();
    let mut cache = StyleCache::new();
    for scheme in [Scheme::Dark, Scheme::Light, Scheme::Light, Scheme::Dark] {
        let sheet = cache.get(palettes.for_scheme(scheme));
        assert_eq!(*sheet, create_styles(palettes.for_scheme(scheme)));
    }
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses), (1, 3));
}

fn property_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("margin"),
        Just("maxWidth"),
        Just("borderRadius"),
        Just("letterSpacing"),
        Just("fontWeight"),
        Just("lineHeight"),
        Just("opacity"),
        Just("zIndex"),
    ]
}

proptest! {
    #[test]
    fn test_kebab_case_is_lowercase(name in "[a-z]{1,8}([A-Z][a-z]{0,8}){0,3}") {
        let kebab = kebab_case(&name);
        prop_assert!(!kebab.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(kebab.replace('-', ""), name.to_ascii_lowercase());
    }

    #[test]
    fn test_numbers_get_px_unless_unitless_or_zero(
        property in property_strategy(),
        n in 1u32..2000
    ) {
        let inline = StyleDecl::new().with(property, n as f64).to_inline();
        let expected_value = if is_unitless(property) {
            n.to_string()
        } else {
            format!("{}px", n)
        };
        prop_assert_eq!(inline, format!("{}:{}", kebab_case(property), expected_value));
    }

    #[test]
    fn test_zero_is_bare(property in property_strategy()) {
        prop_assert_eq!(CssValue::from(0).to_css(property), "0");
    }

    #[test]
    fn test_inline_has_one_declaration_per_property(
        values in prop::collection::vec("[a-z0-9 ]{1,12}", 1..6)
    ) {
        const NAMES: [&str; 6] = ["color", "background", "border", "padding", "display", "cursor"];
        let mut decl = StyleDecl::new();
        for (name, value) in NAMES.iter().zip(&values) {
            decl.set(*name, value.as_str());
        }
        let inline = decl.to_inline();
        prop_assert_eq!(inline.split(';').count(), values.len());
    }
}
