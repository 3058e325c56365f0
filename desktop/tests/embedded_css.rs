#![cfg(test)]
//! The desktop binary embeds `ui/assets/theme/main.css` with `include_str!`.
//! A truncated or relocated file only shows up as broken styling at runtime,
//! so check it here.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_is_present() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "embedded theme is empty"
    );
}

#[test]
fn embedded_css_defines_palette_tokens() {
    for token in ["--color-bg", "--color-accent", "--color-danger", "--sidebar-width"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "custom property `{token}` missing from embedded theme"
        );
    }
}

#[test]
fn braces_are_balanced() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in theme");
}
