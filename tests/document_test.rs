use outform::document::{Document, Printable, RenderError};
use outform::formatter::{Formatter, HtmlFormatter, JsonFormatter, TextFormatter};
use proptest::prelude::*;

fn check(formatter: &dyn Formatter, payload: &str, expected: &str, test_name: &str) {
    let document = Document::new(payload.to_string(), formatter);
    assert_eq!(
        document.render().expect("Formatter is bound"),
        expected,
        "Failed the test {test_name}"
    );
}

#[test]
fn test_render_delegates_to_bound_formatter() {
    check(&TextFormatter, "Hello, World!", "Hello, World!", "text");
    check(
        &HtmlFormatter,
        "Hello, World!",
        "<html>Hello, World!</html>",
        "html",
    );
    check(
        &JsonFormatter,
        "Hello, World!",
        "{ \"data\": \"Hello, World!\"}",
        "json",
    );
}

#[test]
fn test_render_without_formatter_fails() {
    let document = Document::unformatted("Hello, World!".to_string());
    let error = document.render().expect_err("No formatter is bound");
    assert!(matches!(error, RenderError::UnboundFormatter));
    assert_eq!(error.to_string(), "Formatter is not set!");
}

#[test]
fn test_render_is_idempotent() {
    let formatter = HtmlFormatter;
    let document = Document::new("Hello, World!".to_string(), &formatter);
    let first = document.render().expect("Formatter is bound");
    let second = document.render().expect("Formatter is bound");
    assert_eq!(first, second);
}

#[test]
fn test_payload_is_kept_verbatim() {
    let document = Document::unformatted("Hello, World!".to_string());
    assert_eq!(document.payload(), "Hello, World!");
}

#[test]
fn test_formatter_shared_across_documents() {
    let formatter = JsonFormatter;
    let first = Document::new("one".to_string(), &formatter);
    let second = Document::new("two".to_string(), &formatter);
    assert_eq!(
        first.render().expect("Formatter is bound"),
        "{ \"data\": \"one\"}"
    );
    assert_eq!(
        second.render().expect("Formatter is bound"),
        "{ \"data\": \"two\"}"
    );
}

// Property-based tests

proptest! {
    #[test]
    fn render_equals_format(s in ".*") {
        let document = Document::new(s.clone(), &HtmlFormatter);
        prop_assert_eq!(document.render().unwrap(), HtmlFormatter.format(&s));
    }
}
