//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for document
//! layout. The IR is a sequence of opcodes that can be inspected, optimized,
//! and compiled to PDF.
//!
//! ## Design Philosophy
//!
//! The IR sits between the resume renderer and raw PDF objects:
//!
//! ```text
//! Resume → IR (inspectable) → Optimizer → Codegen (paginates) → PDF bytes
//! ```
//!
//! Ops follow a flowing-cursor model. Each op acts at the current cursor;
//! pagination is not represented in the IR at all, the code generator breaks
//! pages when a line would cross the bottom margin. Style changes are
//! individual ops so the optimizer can drop redundant ones.

use crate::pdf::{EmbeddedImage, FontFamily, FontStyle};
use crate::template::Rgb;

/// Horizontal text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Current font and colors, tracked for optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub font: Option<(FontFamily, FontStyle, f32)>,
    pub text_color: Rgb,
    pub fill_color: Rgb,
    pub draw_color: Rgb,
}

impl Default for StyleState {
    fn default() -> Self {
        // PDF graphics state starts out black
        Self {
            font: None,
            text_color: Rgb::new(0, 0, 0),
            fill_color: Rgb::new(0, 0, 0),
            draw_color: Rgb::new(0, 0, 0),
        }
    }
}

/// IR opcodes - the "bytecode" for document layout.
///
/// Lengths are millimetres, font sizes are points.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Style Changes ==========
    /// Select font family, style and size.
    SetFont {
        family: FontFamily,
        style: FontStyle,
        size: f32,
    },

    /// Color used for text.
    SetTextColor(Rgb),

    /// Color used for filled cell backgrounds.
    SetFillColor(Rgb),

    /// Color used for rules.
    SetDrawColor(Rgb),

    // ========== Content ==========
    /// One full-width line of text, then move to the next line.
    Cell {
        text: String,
        height: f32,
        /// Paint the cell background with the fill color first.
        fill: bool,
        align: Align,
    },

    /// Word-wrapped text, one cell per wrapped line.
    MultiCell { text: String, line_height: f32 },

    /// Move the cursor down without drawing.
    Ln(f32),

    /// Full-width horizontal rule at the cursor.
    Rule,

    // ========== Graphics ==========
    /// Image placed at an absolute position on the current page.
    /// Does not move the cursor.
    Image {
        image: EmbeddedImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// A compiled IR program.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Text of every cell and multi-cell, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Cell { text, .. } | Op::MultiCell { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str) -> Op {
        Op::Cell {
            text: text.into(),
            height: 6.0,
            fill: false,
            align: Align::Left,
        }
    }

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
    }

    #[test]
    fn test_program_push() {
        let mut program = Program::new();
        program.push(Op::SetTextColor(Rgb::WHITE));
        program.push(cell("Hello"));
        program.push(Op::Ln(2.0));
        assert_eq!(program.len(), 3);
    }

    #[test]
    fn test_texts() {
        let program: Program = vec![
            cell("Name"),
            Op::Rule,
            Op::MultiCell {
                text: "Long text".into(),
                line_height: 6.0,
            },
        ]
        .into_iter()
        .collect();
        assert_eq!(program.texts(), vec!["Name", "Long text"]);
    }

    #[test]
    fn test_style_state_default() {
        let state = StyleState::default();
        assert!(state.font.is_none());
        assert_eq!(state.text_color, Rgb::new(0, 0, 0));
        assert_eq!(Align::default(), Align::Left);
    }
}
