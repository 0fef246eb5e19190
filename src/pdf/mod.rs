//! # PDF Primitives
//!
//! Low-level building blocks the code generator uses to write PDF objects:
//!
//! - [`metrics`]: Helvetica glyph widths for measuring and wrapping text
//! - [`text`]: WinAnsi encoding and greedy word wrap
//! - [`image`]: decoding images into XObject-ready sample data
//!
//! All layout is done in millimetres with a top-left origin, the way the
//! renderer thinks about a page. Conversion to PDF points (bottom-left
//! origin) happens only when content operators are written.

pub mod image;
pub mod metrics;
pub mod text;

use serde::Serialize;

pub use self::image::EmbeddedImage;

/// Points per millimetre.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// Font family of the standard 14 Type1 fonts used by every template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontFamily {
    Helvetica,
}

/// Weight/slant variant of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
}

impl FontStyle {
    /// All variants, in resource-name order (`F1`..`F3`).
    pub const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic];

    pub fn is_bold(self) -> bool {
        self == FontStyle::Bold
    }

    /// Page resource name the code generator registers this variant under.
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"F1",
            FontStyle::Bold => b"F2",
            FontStyle::Italic => b"F3",
        }
    }
}

impl FontFamily {
    /// PostScript name of the base-14 font for a style.
    pub fn base_font(self, style: FontStyle) -> &'static str {
        match (self, style) {
            (FontFamily::Helvetica, FontStyle::Regular) => "Helvetica",
            (FontFamily::Helvetica, FontStyle::Bold) => "Helvetica-Bold",
            (FontFamily::Helvetica, FontStyle::Italic) => "Helvetica-Oblique",
        }
    }
}

/// # Page Setup
///
/// Physical page and margin geometry, in millimetres.
///
/// ```text
/// ├─10─┼──────────── 190 ────────────┼─10─┤
///   ▲ top margin 10
///   ▼ automatic page break 15 above the bottom edge
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    /// Distance from the bottom edge at which content breaks to a new page.
    pub break_margin: f32,
    /// Horizontal padding inside a cell before the text starts.
    pub cell_padding: f32,
}

impl PageSetup {
    /// ISO A4 portrait.
    pub const A4: Self = Self {
        width: 210.0,
        height: 297.0,
        margin_left: 10.0,
        margin_top: 10.0,
        margin_right: 10.0,
        break_margin: 15.0,
        cell_padding: 1.0,
    };

    /// Width of a full-line cell.
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Width available to wrapped text inside a full-line cell.
    #[inline]
    pub fn text_width(&self) -> f32 {
        self.content_width() - 2.0 * self.cell_padding
    }

    /// Lowest y a line may reach before breaking to the next page.
    #[inline]
    pub fn break_trigger(&self) -> f32 {
        self.height - self.break_margin
    }
}

/// Convert a length from millimetres to points.
#[inline]
pub fn pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_geometry() {
        let page = PageSetup::A4;
        assert_eq!(page.content_width(), 190.0);
        assert_eq!(page.text_width(), 188.0);
        assert_eq!(page.break_trigger(), 282.0);
    }

    #[test]
    fn test_pt_conversion() {
        assert!((pt(25.4) - 72.0).abs() < 1e-4);
        assert!((pt(210.0) - 595.28).abs() < 0.01);
    }

    #[test]
    fn test_base_fonts() {
        let family = FontFamily::Helvetica;
        assert_eq!(family.base_font(FontStyle::Bold), "Helvetica-Bold");
        assert_eq!(family.base_font(FontStyle::Italic), "Helvetica-Oblique");
        assert_eq!(FontStyle::Italic.resource_name(), b"F3");
    }
}
