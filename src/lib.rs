pub mod document;
pub mod formatter;
pub mod output;
