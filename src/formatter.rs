/// Interface for rendering a payload into one output representation.
pub trait Formatter {
    /// Formats a payload into its output representation.
    fn format(&self, data: &str) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, data: &str) -> String {
        data.into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn format(&self, data: &str) -> String {
        format!("<html>{data}</html>")
    }
}

/// Known limitation: quotes and control characters in the payload are not
/// escaped, so the output is not valid JSON for such payloads.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, data: &str) -> String {
        // Exact bytes: a space after the colon, none before the closing brace.
        format!("{{ \"data\": \"{data}\"}}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Text,
    Html,
    Json,
}

impl FormatKind {
    pub const ALL: [FormatKind; 3] = [FormatKind::Text, FormatKind::Html, FormatKind::Json];

    pub fn formatter(&self) -> &'static dyn Formatter {
        match self {
            FormatKind::Text => &TextFormatter,
            FormatKind::Html => &HtmlFormatter,
            FormatKind::Json => &JsonFormatter,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FormatKind::Text => "txt",
            FormatKind::Html => "html",
            FormatKind::Json => "json",
        }
    }
}
