#![cfg(test)]
/*!
Selector lint for the embedded gallery theme.

Blocks build their class names in Rust (`block block--cart theme-neon`,
`heatmap__cell--3`, ...). If a refactor drops one of those selectors from
`ui/assets/theme/main.css` the block still renders, just unstyled. This test
keeps the two in step with a plain substring check.

When you add a block or a class that carries layout, add its selector here.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".gallery__row",
    // Buttons & badges
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".badge--discount",
    // Block shell
    ".block {",
    ".block__header",
    ".block__title",
    ".block__meta",
    ".block__placeholder",
    // Blocks
    ".block--hero",
    ".features__grid",
    ".pricing__tier--highlighted",
    ".product__badge",
    ".cart__totals",
    ".cart__total",
    ".progress__track",
    ".progress__fill",
    ".chart__line",
    ".chart__area",
    ".chart__marker",
    ".chart__line--forecast",
    ".heatmap__grid",
    ".testimonials__dot--active",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn every_theme_has_a_palette() {
    for theme in ["neon", "emerald", "amber", "slate"] {
        let selector = format!(".theme-{theme} {{");
        assert!(
            THEME_CSS.contains(&selector),
            "Theme palette `{selector}` missing"
        );
    }
}

#[test]
fn every_heatmap_level_is_styled() {
    for level in 0..5 {
        let selector = format!(".heatmap__cell--{level}");
        assert!(THEME_CSS.contains(&selector), "`{selector}` missing");
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
