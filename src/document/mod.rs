//! # Resume Document Renderer
//!
//! Compiles [`ResumeData`] into layout IR with a [`TemplateStyle`], then
//! generates the PDF.
//!
//! ```
//! use resume_builder::document::{self, RenderOptions};
//! use resume_builder::resume::ResumeData;
//! use resume_builder::template;
//!
//! let mut data = ResumeData::default();
//! data.personal.name = "Jane Doe".into();
//!
//! let style = template::by_name("Ultra Modern")?;
//!
//! // Compile to IR (inspectable)
//! let compiled = document::compile(&data, style);
//! assert_eq!(compiled.program.texts()[0], "Jane Doe");
//!
//! // Generate PDF bytes
//! let doc = document::render_document(&data, style, &RenderOptions::default())?;
//! assert_eq!(doc.page_count, 1);
//! assert!(doc.bytes.starts_with(b"%PDF"));
//! # Ok::<(), resume_builder::ResumeError>(())
//! ```
//!
//! ## Page layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Name                 ╭────╮  │  header: name, contact, links,
//! │ 📧 … | 📱 … | 📍 …    │ 🙂 │  │  photo at (170, 10) 30×30 mm
//! │ LinkedIn: …          ╰────╯  │
//! │ Professional Summary         │
//! │                              │
//! │ SECTION TITLE                │  one block per entry of sectionOrder,
//! │ ──────────────────────────── │  rule only when the template has borders
//! │ entry                        │
//! └──────────────────────────────┘
//! ```

mod header;
mod sections;

pub use header::{contact_line, social_line};

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::error::ResumeError;
use crate::ir::{Align, Op, Program};
use crate::pdf::FontStyle;
use crate::resume::ResumeData;
use crate::template::{Rgb, TemplateStyle};

/// Render-time knobs that are not part of the resume data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Date printed in the page footer.
    pub generated_on: NaiveDate,
    /// Extra text appended to the footer.
    pub footer_note: Option<String>,
    /// Flate-compress page content streams.
    pub compress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            generated_on: Local::now().date_naive(),
            footer_note: None,
            compress: true,
        }
    }
}

/// A rendered PDF plus the problems that did not stop the render.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub warnings: Vec<String>,
}

/// Output of [`compile`]: the unoptimized program and its warnings.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub program: Program,
    pub warnings: Vec<String>,
}

/// Context passed to component `emit()` methods, carrying the ops buffer,
/// the active template and any warnings raised while emitting.
pub struct EmitContext<'a> {
    pub program: Program,
    pub style: &'a TemplateStyle,
    pub warnings: Vec<String>,
}

impl<'a> EmitContext<'a> {
    pub fn new(style: &'a TemplateStyle) -> Self {
        Self {
            program: Program::new(),
            style,
            warnings: Vec::new(),
        }
    }

    /// Push a single op.
    pub fn push(&mut self, op: Op) {
        self.program.push(op);
    }

    /// Select a style of the template's font family.
    pub fn font(&mut self, style: FontStyle, size: f32) {
        let family = self.style.font;
        self.push(Op::SetFont {
            family,
            style,
            size,
        });
    }

    pub fn text_color(&mut self, color: Rgb) {
        self.push(Op::SetTextColor(color));
    }

    /// One unfilled, left-aligned line.
    pub fn line(&mut self, text: impl Into<String>, height: f32) {
        self.push(Op::Cell {
            text: text.into(),
            height,
            fill: false,
            align: Align::Left,
        });
    }

    /// Word-wrapped text.
    pub fn paragraph(&mut self, text: impl Into<String>, line_height: f32) {
        self.push(Op::MultiCell {
            text: text.into(),
            line_height,
        });
    }

    /// Vertical gap.
    pub fn gap(&mut self, height: f32) {
        self.push(Op::Ln(height));
    }

    /// Record a non-fatal problem.
    pub fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }
}

/// Anything that lays itself out as IR ops.
pub trait Component {
    fn emit(&self, ctx: &mut EmitContext);
}

/// Compile resume data to layout IR.
///
/// Emits the header, then every section of `section_order` that has
/// content. The program is not optimized.
pub fn compile(data: &ResumeData, style: &TemplateStyle) -> Compiled {
    let mut ctx = EmitContext::new(style);
    data.personal.emit(&mut ctx);

    let mut rendered = 0;
    for id in &data.section_order {
        if sections::emit_section(&mut ctx, data, id) {
            rendered += 1;
        }
    }
    debug!(
        template = style.name,
        sections = rendered,
        ops = ctx.program.len(),
        "Compiled resume"
    );

    Compiled {
        program: ctx.program,
        warnings: ctx.warnings,
    }
}

/// Compile, optimize and generate the PDF.
pub fn render_document(
    data: &ResumeData,
    style: &TemplateStyle,
    options: &RenderOptions,
) -> Result<RenderedDocument, ResumeError> {
    let Compiled { program, warnings } = compile(data, style);
    let output = program.optimize().to_pdf(options)?;
    debug!(
        template = style.name,
        pages = output.page_count,
        warnings = warnings.len(),
        "Rendered resume"
    );
    Ok(RenderedDocument {
        bytes: output.bytes,
        page_count: output.page_count,
        warnings,
    })
}
