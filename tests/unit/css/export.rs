use super::*;
use crate::foundation::error::AnimlibError;

fn spin() -> CssTarget {
    CssTarget {
        animation_id: "spin".to_string(),
        keyframes_name: "spin".to_string(),
        class_name: "x-spin".to_string(),
    }
}

struct Unreadable;

impl StylesheetSource for Unreadable {
    fn read_stylesheet(&self) -> AnimlibResult<String> {
        Err(AnimlibError::Other(anyhow::anyhow!("offline")))
    }
}

#[test]
fn both_blocks_are_joined_by_a_blank_line() {
    let sheet = "@keyframes spin { to { transform: rotate(360deg); } }\n.x-spin { animation: spin 1s linear infinite; }";
    let css = build_animation_css(&spin(), Some(sheet));
    assert_eq!(
        css,
        "@keyframes spin { to { transform: rotate(360deg); } }\n\n.x-spin { animation: spin 1s linear infinite; }"
    );
}

#[test]
fn missing_class_rule_is_synthesized_after_keyframes() {
    let sheet = "@keyframes spin { to { transform: rotate(360deg); } }";
    let css = build_animation_css(&spin(), Some(sheet));
    let (kf, rule) = css.split_once("\n\n").unwrap();
    assert_eq!(kf, sheet);
    assert_eq!(rule, fallback_rule("x-spin", "spin"));
    assert!(!css.contains("not found"));
}

#[test]
fn webkit_keyframes_are_used_as_fallback() {
    let sheet = "@-webkit-keyframes spin { to { opacity: 0; } }\n.x-spin { color: red; }";
    let css = build_animation_css(&spin(), Some(sheet));
    assert!(css.starts_with("@-webkit-keyframes spin {"));
    assert!(css.ends_with(".x-spin { color: red; }"));
}

#[test]
fn standard_keyframes_win_over_webkit() {
    let sheet = "@-webkit-keyframes spin { to { opacity: 0; } }\n@keyframes spin { to { opacity: 1; } }";
    let css = build_animation_css(&spin(), Some(sheet));
    assert!(css.starts_with("@keyframes spin { to { opacity: 1; } }"));
}

#[test]
fn neither_found_yields_commented_fallback() {
    let css = build_animation_css(&spin(), Some(".other { color: blue; }"));
    assert!(css.starts_with("/*"));
    assert!(css.contains("not found"));
    assert!(css.contains("animation-name: spin;"));
    assert!(css.contains(".x-spin {"));
    assert_eq!(css.matches('{').count(), 1);
}

#[test]
fn unavailable_stylesheet_yields_bare_fallback() {
    let css = export_animation_css(&spin(), &Unreadable);
    assert_eq!(css, fallback_rule("x-spin", "spin"));
    assert!(!css.contains("/*"));
}

#[test]
fn missing_file_degrades_instead_of_failing() {
    let source = FileStylesheet(PathBuf::from("target/does-not-exist/animlib.css"));
    let css = export_animation_css(&spin(), &source);
    assert_eq!(css, fallback_rule("x-spin", "spin"));
}

#[test]
fn fallback_rule_uses_custom_properties_with_defaults() {
    let rule = fallback_rule("x-spin", "spin");
    assert!(rule.starts_with(".x-spin {\n"));
    assert!(rule.contains("animation-duration: var(--animlib-duration, 700ms);"));
    assert!(rule.contains("animation-delay: var(--animlib-delay, 0ms);"));
    assert!(rule.contains("animation-fill-mode: var(--animlib-fill, both);"));
    assert!(rule.ends_with("\n}"));
}

#[test]
fn inline_source_and_file_name() {
    let source = InlineStylesheet("@keyframes spin { to { opacity: 0; } }".to_string());
    assert!(export_animation_css(&spin(), &source).starts_with("@keyframes spin"));
    assert_eq!(export_file_name("fade-in"), "fade-in.css");
}
