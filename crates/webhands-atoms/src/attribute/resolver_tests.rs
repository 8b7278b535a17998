use super::*;
use crate::testing::{FakeDom, FakeElement};
use serde_json::json;

async fn resolve(element: FakeElement, name: &str) -> Option<String> {
    let (dom, handle) = FakeDom::with("el", element);
    AttributeResolver::new(&dom).resolve(&handle, name).await.unwrap()
}

// ============================================================================
// Style
// ============================================================================

#[tokio::test]
async fn test_style_returns_inline_css() {
    let element = FakeElement::new("div").attr("style", "color: red;");
    let value = resolve(element, "style").await.unwrap();
    assert!(value.contains("color: red"));
}

#[tokio::test]
async fn test_style_without_inline_style_is_null() {
    assert_eq!(resolve(FakeElement::new("div"), "STYLE").await, None);
}

#[tokio::test]
async fn test_style_ignores_property() {
    let element = FakeElement::new("div").prop("style", PropertyValue::Object(json!({})));
    let (dom, handle) = FakeDom::with("el", element);
    AttributeResolver::new(&dom).resolve(&handle, "style").await.unwrap();
    assert_eq!(dom.calls.lock().as_slice(), &["get_attribute:style".to_string()]);
}

// ============================================================================
// Selection
// ============================================================================

#[tokio::test]
async fn test_checked_checkbox_is_true() {
    assert_eq!(resolve(FakeElement::checkbox(true), "checked").await.as_deref(), Some("true"));
}

#[tokio::test]
async fn test_unchecked_checkbox_is_null() {
    assert_eq!(resolve(FakeElement::checkbox(false), "checked").await, None);
}

#[tokio::test]
async fn test_unchecked_checkbox_ignores_checked_attribute() {
    let element = FakeElement::checkbox(false).attr("checked", "checked");
    assert_eq!(resolve(element, "Checked").await, None);
}

#[tokio::test]
async fn test_selected_option() {
    let element = FakeElement {
        selectable: true,
        selected: true,
        ..FakeElement::new("option")
    };
    assert_eq!(resolve(element, "selected").await.as_deref(), Some("true"));
}

#[tokio::test]
async fn test_checked_on_non_selectable_uses_boolean_rule() {
    let element = FakeElement::new("div").attr("checked", "");
    assert_eq!(resolve(element, "checked").await.as_deref(), Some("true"));
}

// ============================================================================
// href / src
// ============================================================================

#[tokio::test]
async fn test_anchor_href_returns_absolute_url() {
    let element = FakeElement::new("a")
        .attr("href", "/docs/index.html")
        .prop("href", "https://example.com/docs/index.html");
    assert_eq!(
        resolve(element, "href").await.as_deref(),
        Some("https://example.com/docs/index.html")
    );
}

#[tokio::test]
async fn test_anchor_without_href_is_null() {
    let element = FakeElement::new("a").prop("href", "");
    assert_eq!(resolve(element, "href").await, None);
}

#[tokio::test]
async fn test_anchor_with_empty_href_returns_empty_string() {
    let element = FakeElement::new("a")
        .attr("href", "")
        .prop("href", "https://example.com/");
    assert_eq!(resolve(element, "href").await.as_deref(), Some(""));
}

#[tokio::test]
async fn test_image_src_returns_absolute_url() {
    let element = FakeElement::new("IMG")
        .attr("src", "logo.png")
        .prop("src", "https://example.com/logo.png");
    assert_eq!(
        resolve(element, "SRC").await.as_deref(),
        Some("https://example.com/logo.png")
    );
}

#[tokio::test]
async fn test_href_on_non_anchor_uses_general_rule() {
    let element = FakeElement::new("link")
        .attr("href", "style.css")
        .prop("href", "https://example.com/style.css");
    assert_eq!(
        resolve(element, "href").await.as_deref(),
        Some("https://example.com/style.css")
    );
    let element = FakeElement::new("div").attr("href", "raw");
    assert_eq!(resolve(element, "href").await.as_deref(), Some("raw"));
}

// ============================================================================
// spellcheck
// ============================================================================

#[tokio::test]
async fn test_spellcheck_attribute_false() {
    let element = FakeElement::new("textarea")
        .attr("spellcheck", "FALSE")
        .prop("spellcheck", true);
    assert_eq!(resolve(element, "spellcheck").await.as_deref(), Some("false"));
}

#[tokio::test]
async fn test_spellcheck_attribute_true() {
    let element = FakeElement::new("textarea")
        .attr("spellcheck", "True")
        .prop("spellcheck", false);
    assert_eq!(resolve(element, "spellcheck").await.as_deref(), Some("true"));
}

#[tokio::test]
async fn test_spellcheck_falls_back_to_property() {
    let element = FakeElement::new("textarea")
        .attr("spellcheck", "")
        .prop("spellcheck", false);
    assert_eq!(resolve(element, "spellcheck").await.as_deref(), Some("false"));

    let element = FakeElement::new("div").prop("spellcheck", true);
    assert_eq!(resolve(element, "spellcheck").await.as_deref(), Some("true"));
}

// ============================================================================
// Boolean attributes
// ============================================================================

#[tokio::test]
async fn test_boolean_absent_and_falsy_is_null() {
    let element = FakeElement::new("button").prop("disabled", false);
    assert_eq!(resolve(element, "disabled").await, None);
}

#[tokio::test]
async fn test_boolean_present_with_any_value_is_true() {
    for raw in ["", "disabled", "false"] {
        let element = FakeElement::new("button")
            .attr("disabled", raw)
            .prop("disabled", false);
        assert_eq!(resolve(element, "disabled").await.as_deref(), Some("true"), "raw={raw:?}");
    }
}

#[tokio::test]
async fn test_boolean_truthy_property_is_true() {
    let element = FakeElement::new("input").prop("readOnly", true);
    assert_eq!(resolve(element, "readonly").await.as_deref(), Some("true"));
}

#[tokio::test]
async fn test_boolean_property_not_read_when_attribute_present() {
    let element = FakeElement::new("input").attr("required", "");
    let (dom, handle) = FakeDom::with("el", element);
    AttributeResolver::new(&dom).resolve(&handle, "required").await.unwrap();
    assert!(!dom.calls.lock().iter().any(|c| c.starts_with("get_property")));
}

// ============================================================================
// General case
// ============================================================================

#[tokio::test]
async fn test_general_prefers_primitive_property() {
    let element = FakeElement::new("input")
        .attr("value", "initial")
        .prop("value", "typed");
    assert_eq!(resolve(element, "value").await.as_deref(), Some("typed"));
}

#[tokio::test]
async fn test_general_class_uses_alias() {
    let element = FakeElement::new("div").prop("className", "a b");
    assert_eq!(resolve(element, "CLASS").await.as_deref(), Some("a b"));
}

#[tokio::test]
async fn test_general_number_property() {
    let element = FakeElement::new("input").prop("maxLength", PropertyValue::Number(10.0));
    assert_eq!(resolve(element, "maxLength").await.as_deref(), Some("10"));
}

#[tokio::test]
async fn test_general_object_property_falls_back_to_attribute() {
    let element = FakeElement::new("div")
        .attr("dataset", "raw")
        .prop("dataset", PropertyValue::Object(json!({"x": 1})));
    assert_eq!(resolve(element, "dataset").await.as_deref(), Some("raw"));
}

#[tokio::test]
async fn test_general_absent_property_falls_back_to_attribute() {
    let element = FakeElement::new("div").attr("data-id", "42");
    assert_eq!(resolve(element, "data-id").await.as_deref(), Some("42"));

    let element = FakeElement::new("div")
        .attr("title", "t")
        .prop("title", PropertyValue::Null);
    assert_eq!(resolve(element, "title").await.as_deref(), Some("t"));
}

#[tokio::test]
async fn test_general_failing_property_falls_back_to_attribute() {
    let element = FakeElement::new("div").attr("foo", "bar").failing_prop("foo");
    assert_eq!(resolve(element, "foo").await.as_deref(), Some("bar"));
}

#[tokio::test]
async fn test_general_empty_string_is_not_null() {
    let element = FakeElement::new("input").prop("value", "");
    assert_eq!(resolve(element, "value").await.as_deref(), Some(""));
}

#[tokio::test]
async fn test_general_nothing_is_null() {
    assert_eq!(resolve(FakeElement::new("div"), "nope").await, None);
}

#[tokio::test]
async fn test_adapter_errors_propagate() {
    let (dom, _) = FakeDom::with("el", FakeElement::new("div"));
    let missing = ElementHandle::new("gone");
    let result = AttributeResolver::new(&dom).resolve(&missing, "style").await;
    assert!(matches!(result, Err(DomError::ElementNotFound(_))));
}

#[tokio::test]
async fn test_resolve_is_repeatable() {
    let element = FakeElement::new("a")
        .attr("href", "x")
        .prop("href", "https://example.com/x");
    let (dom, handle) = FakeDom::with("el", element);
    let resolver = AttributeResolver::new(&dom);
    let first = resolver.resolve(&handle, "href").await.unwrap();
    let second = resolver.resolve(&handle, "href").await.unwrap();
    assert_eq!(first, second);
}
