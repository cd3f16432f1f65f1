use super::*;

const SHEET: &str = r#"
/* animlib stylesheet */
.animlib-demo { display: inline-block; }

@keyframes animlib-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.animlib-fade-in {
  animation-name: animlib-fade-in;
  animation-duration: var(--animlib-duration, 600ms);
}
"#;

#[test]
fn extracts_keyframes_block_with_header_and_closing_brace() {
    let block = extract_block(SHEET, &KeyframesHeader::standard("animlib-fade-in")).unwrap();
    assert_eq!(
        block.text(),
        "@keyframes animlib-fade-in {\n  from { opacity: 0; }\n  to { opacity: 1; }\n}"
    );
    assert_eq!(&SHEET[block.start()..block.end()], block.text());
}

#[test]
fn extracts_class_block() {
    let block = extract_block(SHEET, &ClassHeader::new("animlib-fade-in")).unwrap();
    assert!(block.text().starts_with(".animlib-fade-in {"));
    assert!(block.text().ends_with('}'));
    assert!(block.text().contains("var(--animlib-duration, 600ms)"));
}

#[test]
fn nested_at_rule_does_not_end_block_early() {
    let sheet = "a{}\n@keyframes pulse {\n  @media (min-width: 1px) {\n    50% { transform: scale(1.1); }\n  }\n  100% { opacity: 1; }\n}\n.after { color: red; }";
    let block = extract_block(sheet, &KeyframesHeader::standard("pulse")).unwrap();
    assert!(block.text().starts_with("@keyframes pulse {"));
    assert!(block.text().contains("100% { opacity: 1; }"));
    assert!(block.text().ends_with("}\n}"));
    assert!(!block.text().contains(".after"));
}

#[test]
fn unbalanced_braces_are_not_found() {
    let sheet = "@keyframes foo { 0% { opacity: 0; }";
    assert!(extract_block(sheet, &KeyframesHeader::standard("foo")).is_none());
}

#[test]
fn missing_header_is_not_found() {
    assert!(extract_block(SHEET, &KeyframesHeader::standard("spin")).is_none());
    assert!(extract_block(SHEET, &ClassHeader::new("spin")).is_none());
    assert!(extract_block("", &KeyframesHeader::standard("spin")).is_none());
}

#[test]
fn first_occurrence_wins() {
    let sheet = "@keyframes dup { from { top: 0; } }\n@keyframes dup { from { top: 9px; } }";
    let block = extract_block(sheet, &KeyframesHeader::standard("dup")).unwrap();
    assert_eq!(block.text(), "@keyframes dup { from { top: 0; } }");
}

#[test]
fn name_must_be_followed_by_brace() {
    let sheet = "@keyframes spinner { to { rotate: 1turn; } }\n@keyframes spin { to { rotate: 2turn; } }";
    let block = extract_block(sheet, &KeyframesHeader::standard("spin")).unwrap();
    assert!(block.text().starts_with("@keyframes spin {"));
}

#[test]
fn webkit_header_only_matches_prefixed_rule() {
    let sheet = "@-webkit-keyframes wob { 50% { left: 1px; } }";
    assert!(extract_block(sheet, &KeyframesHeader::standard("wob")).is_none());
    let block = extract_block(sheet, &KeyframesHeader::webkit("wob")).unwrap();
    assert_eq!(block.text(), sheet);
}

#[test]
fn header_inside_comment_is_still_matched() {
    let sheet = "/* .x {} */ .x { color: red; }";
    let block = extract_block(sheet, &ClassHeader::new("x")).unwrap();
    assert_eq!(block.start(), 3);
    assert_eq!(block.text(), ".x {}");
}

#[test]
fn plain_string_pattern_uses_first_substring() {
    let block = extract_block(SHEET, ".animlib-demo").unwrap();
    assert_eq!(block.text(), ".animlib-demo { display: inline-block; }");
}

#[test]
fn header_without_opening_brace_is_not_found() {
    assert!(extract_block("x @keyframes foo", "@keyframes foo").is_none());
}
