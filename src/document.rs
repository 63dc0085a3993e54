use crate::formatter::Formatter;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum RenderError {
    #[error("Formatter is not set!")]
    UnboundFormatter,
}

/// Interface for values that can render themselves into a string.
pub trait Printable {
    /// Renders the value, failing if no formatter is bound.
    fn render(&self) -> Result<String, RenderError>;
}

/// Binds a payload to a borrowed formatter. The formatter must outlive the
/// document; neither is mutated after construction.
pub struct Document<'f> {
    payload: String,
    formatter: Option<&'f dyn Formatter>,
}

impl<'f> Document<'f> {
    pub fn new(payload: String, formatter: &'f dyn Formatter) -> Self {
        Self {
            payload,
            formatter: Some(formatter),
        }
    }

    pub fn unformatted(payload: String) -> Self {
        Self {
            payload,
            formatter: None,
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl Printable for Document<'_> {
    fn render(&self) -> Result<String, RenderError> {
        let formatter = self.formatter.ok_or(RenderError::UnboundFormatter)?;
        Ok(formatter.format(&self.payload))
    }
}
