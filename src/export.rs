//! # Export
//!
//! Downloadable artifacts: the rendered PDF or the JSON data file, each with
//! the filename and MIME type a client saves it under.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::document::{self, RenderOptions};
use crate::error::ResumeError;
use crate::resume::ResumeData;
use crate::template;

pub const PDF_FILENAME: &str = "resume.pdf";
pub const JSON_FILENAME: &str = "resume_data.json";

/// A named file ready to be saved or served.
#[derive(Debug, Clone)]
pub struct Export {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    /// Non-fatal render problems (always empty for JSON).
    pub warnings: Vec<String>,
}

/// Render `data` with the named template.
pub fn pdf(
    data: &ResumeData,
    template_name: &str,
    options: &RenderOptions,
) -> Result<Export, ResumeError> {
    let style = template::by_name(template_name)?;
    let doc = document::render_document(data, style, options)?;
    Ok(Export {
        filename: PDF_FILENAME,
        mime: "application/pdf",
        bytes: doc.bytes,
        warnings: doc.warnings,
    })
}

/// Serialize `data` as the pretty-printed JSON data file.
pub fn json(data: &ResumeData) -> Result<Export, ResumeError> {
    Ok(Export {
        filename: JSON_FILENAME,
        mime: "application/json",
        bytes: data.to_json()?.into_bytes(),
        warnings: Vec::new(),
    })
}

impl Export {
    /// Write into `dir` under the export's filename.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ResumeError> {
        let path = dir.as_ref().join(self.filename);
        self.write_as(&path)?;
        Ok(path)
    }

    /// Write to an explicit path.
    pub fn write_as(&self, path: impl AsRef<Path>) -> Result<(), ResumeError> {
        let path = path.as_ref();
        fs::write(path, &self.bytes)?;
        info!(path = %path.display(), size = self.bytes.len(), "Exported {}", self.filename);
        Ok(())
    }
}
