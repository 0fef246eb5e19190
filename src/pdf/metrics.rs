//! Glyph widths for the base-14 Helvetica fonts.
//!
//! Widths come from the Adobe AFM files, in 1/1000 em. Tables cover ASCII
//! 0x20..=0x7E (index = byte - 32). Oblique variants share the upright widths.
//! Other WinAnsi bytes fall back to [`FALLBACK_WIDTH`].

use super::text::encode_char;
use super::{FontFamily, FontStyle, MM_TO_PT};

/// Width used for encodable characters outside the ASCII tables.
pub const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // sp ! " # $ % & ' ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0-9
    278, 278, 584, 584, 584, 556, 1015,                                             // : ; < = > ? @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N-Z
    278, 278, 278, 469, 556, 333,                                                   // [ \ ] ^ _ `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // n-z
    334, 260, 334, 584,                                                             // { | } ~
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn table(family: FontFamily, style: FontStyle) -> &'static [u16; 95] {
    match family {
        FontFamily::Helvetica if style.is_bold() => &HELVETICA_BOLD,
        FontFamily::Helvetica => &HELVETICA,
    }
}

/// Width of one encoded byte in 1/1000 em.
pub fn byte_width(family: FontFamily, style: FontStyle, byte: u8) -> u16 {
    match byte {
        32..=126 => table(family, style)[(byte - 32) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of a character in 1/1000 em. Characters the font cannot encode
/// are dropped at output time, so they measure zero.
pub fn char_width(family: FontFamily, style: FontStyle, c: char) -> u16 {
    encode_char(c).map_or(0, |b| byte_width(family, style, b))
}

/// Font metrics bound to one family, style and size, measuring in millimetres.
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    pub family: FontFamily,
    pub style: FontStyle,
    /// Font size in points.
    pub size: f32,
}

impl Metrics {
    pub fn new(family: FontFamily, style: FontStyle, size: f32) -> Self {
        Self {
            family,
            style,
            size,
        }
    }

    /// Width of a single character in millimetres.
    pub fn char_width(&self, c: char) -> f32 {
        self.units_to_mm(char_width(self.family, self.style, c) as u32)
    }

    /// Width of a string in millimetres.
    pub fn str_width(&self, s: &str) -> f32 {
        let units: u32 = s
            .chars()
            .map(|c| char_width(self.family, self.style, c) as u32)
            .sum();
        self.units_to_mm(units)
    }

    /// Width of already-encoded bytes in millimetres.
    pub fn encoded_width(&self, bytes: &[u8]) -> f32 {
        let units: u32 = bytes
            .iter()
            .map(|&b| byte_width(self.family, self.style, b) as u32)
            .sum();
        self.units_to_mm(units)
    }

    fn units_to_mm(&self, units: u32) -> f32 {
        units as f32 / 1000.0 * self.size / MM_TO_PT
    }
}
