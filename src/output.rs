use crate::document::{Document, Printable, RenderError};
use crate::formatter::FormatKind;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to write rendered output")]
    Io(#[from] std::io::Error),
}

/// Renders the printable and writes the bytes to an already-open sink.
///
/// The sink stays open: flushing and closing belong to the caller. A render
/// failure is reported before anything is written.
pub fn write_to<W: Write>(sink: &mut W, printable: &dyn Printable) -> Result<(), OutputError> {
    let rendered = printable.render()?;
    sink.write_all(rendered.as_bytes())?;
    Ok(())
}

pub fn output_path(dir: &Path, kind: FormatKind) -> PathBuf {
    dir.join(format!("output.{}", kind.extension()))
}

/// Writes the payload rendered by `kind`'s formatter to `output.<ext>` in
/// `dir`, returning the path written. The file is closed on drop whether or
/// not the write succeeds.
pub fn write_format(dir: &Path, kind: FormatKind, payload: &str) -> Result<PathBuf, OutputError> {
    let document = Document::new(payload.to_string(), kind.formatter());
    let path = output_path(dir, kind);
    let mut file = File::create(&path)?;
    write_to(&mut file, &document)?;
    Ok(path)
}

/// Writes `output.txt`, `output.html` and `output.json` into `dir`, each
/// holding the payload rendered by the matching formatter.
pub fn write_all_formats(dir: &Path, payload: &str) -> Result<(), OutputError> {
    for kind in FormatKind::ALL {
        write_format(dir, kind, payload)?;
    }
    Ok(())
}
