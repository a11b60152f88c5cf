#![cfg(test)]
//! Ensures the embedded desktop CSS (shared site theme) stays present and non-trivial.
//!
//! The desktop build inlines `ui/assets/theme/main.css`; a truncated file or a
//! broken path would only show up as unstyled pages at runtime.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", ".status-screen", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn navbar_css_styles_the_language_switcher() {
    for token in [".navbar__inner", ".language-switcher__menu", ".language-switcher__backdrop"] {
        assert!(
            NAVBAR_CSS.contains(token),
            "Expected token `{token}` missing from navbar CSS"
        );
    }
}
