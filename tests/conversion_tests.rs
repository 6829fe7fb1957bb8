mod common;

use common::fixtures::*;
use common::{TestResult, assert_balanced, body, convert_with};
use jelly2groovy::jelly_view::JellyError;
use jelly2groovy::{ConvertError, ConvertOptions, UnknownControlTags, convert_str};

// ============================================================================
// Whole documents
// ============================================================================

#[test]
fn test_config_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let output = convert_str(CONFIG_PAGE)?;
    assert_eq!(output, CONFIG_PAGE_GROOVY);
    assert_balanced(&output);
    Ok(())
}

#[test]
fn test_if_scenario() -> TestResult {
    let xml = r#"<core:if xmlns:core="jelly:core" xmlns:j="urn:jfoo" test="${x > 0}"><j:label text="Hello"/></core:if>"#;
    let output = convert_str(xml)?;
    assert_eq!(body(&output), "if(x > 0) {\n  j.label(text: \"Hello\") \n}\n");
    Ok(())
}

#[test]
fn test_invoke_static_scenario() -> TestResult {
    let xml = r#"<core:invokeStatic xmlns:core="jelly:core" var="v" className="Foo" method="bar"/>"#;
    let output = convert_str(xml)?;
    assert_eq!(body(&output), "def v = Foo.bar\n");
    Ok(())
}

#[test]
fn test_choose_scenario() -> TestResult {
    let xml = r#"<core:choose xmlns:core="jelly:core" xmlns:x="urn:x"><core:when test="${a}"><x:y/></core:when><core:otherwise><x:z/></core:otherwise></core:choose>"#;
    let output = convert_str(xml)?;
    assert_eq!(
        body(&output),
        "  if(a) {\n    x.y() \n  }\n  else {\n    x.z() \n  }\n"
    );
    assert_balanced(&output);
    Ok(())
}

#[test]
fn test_plain_leaves_list_attributes_in_order() -> TestResult {
    let xml = r#"<form><input name="a" value="${it.a}" type="text"/><input type=" hidden " name="b"/></form>"#;
    let output = convert_str(xml)?;
    let lines: Vec<_> = body(&output).lines().collect();
    assert_eq!(
        lines,
        vec![
            "form() {",
            "  input(name: \"a\", value: it.a, type: \"text\") ",
            "  input(type: \"hidden\", name: \"b\") ",
            "}",
        ]
    );
    Ok(())
}

#[test]
fn test_only_first_child_of_wrapper_is_converted() -> TestResult {
    let xml = r#"<j:jelly xmlns:j="jelly:core"><first/><second/></j:jelly>"#;
    let output = convert_str(xml)?;
    assert_eq!(body(&output), "first() \n");
    Ok(())
}

#[test]
fn test_deep_nesting_stays_balanced() -> TestResult {
    let xml = r#"<j:jelly xmlns:j="jelly:core" xmlns:l="/lib/layout">
      <l:a><j:if test="${x}"><l:b><j:choose><j:when test="${y}"><l:c><l:d/></l:c></j:when>
      <j:otherwise><j:set var="z" value="1"><l:e/></j:set></j:otherwise></j:choose></l:b></j:if></l:a>
    </j:jelly>"#;
    let output = convert_str(xml)?;
    assert_balanced(&output);
    Ok(())
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_duplicate_prefix_fails() {
    let err = convert_str(CONFLICTING_PREFIXES).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Source(JellyError::DuplicatePrefix { ref prefix, .. }) if prefix == "x"
    ));
}

#[test]
fn test_malformed_input_fails() {
    let err = convert_str("<j:jelly xmlns:j=\"jelly:core\"><a></j:jelly>").unwrap_err();
    assert!(matches!(err, ConvertError::Source(JellyError::Xml(_))));
}

#[test]
fn test_missing_invoke_static_attribute_fails() {
    let xml = r#"<core:invokeStatic xmlns:core="jelly:core" var="v" className="Foo"/>"#;
    let err = convert_str(xml).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Source(JellyError::MissingAttribute { ref attribute, .. }) if attribute == "method"
    ));
}

#[test]
fn test_strict_mode_rejects_unknown_control_tags() {
    let xml = r#"<j:jelly xmlns:j="jelly:core"><div><j:forEach var="i" items="${list}"/></div></j:jelly>"#;
    assert!(convert_str(xml).is_ok());

    let options = ConvertOptions { unknown_control_tags: UnknownControlTags::Reject, ..Default::default() };
    let err = convert_with(xml, options).unwrap_err();
    assert!(err.to_string().contains("forEach"));
}
