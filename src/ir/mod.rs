//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for document layout. The IR is a
//! "bytecode" representation that sits between the resume renderer and raw
//! PDF objects.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │  document   │ ──► │     IR      │ ──► │ Optimizer │ ──► │ Codegen  │
//! │  (resume)   │     │  (Vec<Op>)  │     │           │     │  (PDF)   │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: Tests assert on section order and styling without
//!    parsing PDF
//! 2. **Optimizable**: Remove redundant style changes, merge line feeds
//! 3. **Paginated late**: Page breaks are decided only in codegen
//!
//! ## Example
//!
//! ```
//! use resume_builder::document::RenderOptions;
//! use resume_builder::ir::{Align, Op, Program};
//! use resume_builder::pdf::{FontFamily, FontStyle};
//!
//! let mut program = Program::new();
//! program.push(Op::SetFont {
//!     family: FontFamily::Helvetica,
//!     style: FontStyle::Bold,
//!     size: 24.0,
//! });
//! program.push(Op::Cell {
//!     text: "HELLO".into(),
//!     height: 10.0,
//!     fill: false,
//!     align: Align::Left,
//! });
//! program.push(Op::Ln(4.0));
//!
//! // Inspect the IR
//! assert_eq!(program.texts(), vec!["HELLO"]);
//!
//! // Optimize and generate bytes
//! let pdf = program.optimize().to_pdf(&RenderOptions::default())?;
//! assert_eq!(pdf.page_count, 1);
//! # Ok::<(), resume_builder::ResumeError>(())
//! ```

mod codegen;
mod ops;
mod optimize;

// Re-export the ops types (codegen and optimize add methods to Program via impl)
pub use codegen::PdfOutput;
pub use ops::*;
