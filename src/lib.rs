//! # Resume Builder
//!
//! Structured resume data, circular profile avatars and template-driven PDF
//! export. It provides:
//!
//! - **Data store**: the resume record, its edits and its JSON data file
//! - **Templates**: a fixed registry of color/header/border styles
//! - **Renderer**: resume → layout IR → paginated PDF
//! - **Photos**: centered crop, circular mask, 200×200 PNG
//!
//! ## Quick Start
//!
//! ```
//! use resume_builder::{
//!     document::RenderOptions,
//!     export,
//!     resume::{Experience, ResumeData, SkillKind},
//! };
//!
//! let mut data = ResumeData::default();
//! data.personal.name = "Jane Doe".into();
//! data.personal.email = "jane@example.com".into();
//! data.push_experience(Experience {
//!     position: "Engineer".into(),
//!     company: "Acme".into(),
//!     duration: "2020 - 2024".into(),
//!     description: "Built the billing pipeline.".into(),
//! });
//! data.set_skills(SkillKind::Technical, "Rust\nPostgreSQL");
//!
//! // Render with a template from the registry
//! let pdf = export::pdf(&data, "Executive", &RenderOptions::default())?;
//! assert_eq!(pdf.filename, "resume.pdf");
//!
//! // Save the data file for later editing
//! let json = export::json(&data)?;
//! assert_eq!(json.mime, "application/json");
//!
//! # Ok::<(), resume_builder::ResumeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`resume`] | Data store, edits, JSON |
//! | [`template`] | Template registry |
//! | [`document`] | Resume → IR compilation, rendering |
//! | [`ir`] | Layout ops, optimizer, PDF codegen |
//! | [`pdf`] | Page geometry, font metrics, text encoding |
//! | [`photo`] | Avatar processing |
//! | [`export`] | Named files for download or disk |
//! | [`server`] | HTTP export API |
//! | [`error`] | Error types |

pub mod document;
pub mod error;
pub mod export;
pub mod ir;
pub mod pdf;
pub mod photo;
pub mod resume;
pub mod server;
pub mod template;

// Re-exports for convenience
pub use error::ResumeError;
pub use resume::ResumeData;
pub use template::TemplateStyle;
