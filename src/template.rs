//! # Template Registry
//!
//! This module defines the fixed set of visual templates a resume can be
//! rendered with.
//!
//! ## Templates
//!
//! | Name | Primary | Header | Sections | Borders | Spacing |
//! |------|---------|--------|----------|---------|---------|
//! | Executive | #1a365d | gradient | bordered | yes | 1.2 |
//! | Ultra Modern | #e53e3e | bold | modern | no | 1.4 |
//! | Professional Plus | #2b6cb0 | professional | boxed | yes | 1.25 |
//!
//! ## Usage
//!
//! ```
//! use resume_builder::template::{self, HeaderStyle};
//!
//! let style = template::by_name("Executive")?;
//! assert_eq!(style.header_style, HeaderStyle::Gradient);
//! assert!(style.borders);
//! # Ok::<(), resume_builder::ResumeError>(())
//! ```

use serde::{Serialize, Serializer};

use crate::error::ResumeError;
use crate::pdf::FontFamily;

/// Name of the template used when the caller does not pick one.
pub const DEFAULT_TEMPLATE: &str = "Executive";

/// An sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Footer gray (128, 128, 128).
    pub const GRAY: Self = Self::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode `#RRGGBB` at compile time.
    ///
    /// Used for the built-in registry, so a malformed constant fails the
    /// build instead of a render.
    pub const fn hex(s: &str) -> Self {
        match parse_hex(s.as_bytes()) {
            Some(color) => color,
            None => panic!("template color must be #RRGGBB"),
        }
    }

    /// Parse user-supplied `#RRGGBB` text.
    ///
    /// ```
    /// use resume_builder::template::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#1a365d")?, Rgb::new(0x1a, 0x36, 0x5d));
    /// assert!(Rgb::from_hex("1a365d").is_err());
    /// # Ok::<(), resume_builder::ResumeError>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ResumeError> {
        parse_hex(s.trim().as_bytes()).ok_or_else(|| ResumeError::InvalidColor(s.to_string()))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to 0.0..=1.0, the form PDF color operators take.
    pub fn to_unit(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

const fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    match (hex_digit(hi), hex_digit(lo)) {
        (Some(h), Some(l)) => Some(h * 16 + l),
        _ => None,
    }
}

const fn parse_hex(bytes: &[u8]) -> Option<Rgb> {
    if bytes.len() != 7 || bytes[0] != b'#' {
        return None;
    }
    match (
        hex_pair(bytes[1], bytes[2]),
        hex_pair(bytes[3], bytes[4]),
        hex_pair(bytes[5], bytes[6]),
    ) {
        (Some(r), Some(g), Some(b)) => Some(Rgb { r, g, b }),
        _ => None,
    }
}

/// How section titles are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Title sits on a band filled with the primary color.
    Gradient,
    Bold,
    Professional,
}

/// Section body treatment, carried for clients that style their own preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStyle {
    Bordered,
    Modern,
    Boxed,
}

/// # Template Style
///
/// Immutable bundle of visual parameters applied across a whole document.
///
/// ## Colors
///
/// - **primary**: name, section titles, title band fill
/// - **secondary**: italic detail lines (durations, dates)
/// - **text**: body text
/// - **accent**: rule under section titles when `borders` is set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    pub name: &'static str,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub text: Rgb,
    pub accent: Rgb,
    pub font: FontFamily,
    /// Line-spacing multiplier.
    pub spacing: f32,
    /// Draw a full-width rule under each section title.
    pub borders: bool,
    pub header_style: HeaderStyle,
    pub section_style: SectionStyle,
}

impl TemplateStyle {
    /// # Executive
    ///
    /// Navy palette; section titles on a filled band with a rule beneath.
    pub const EXECUTIVE: Self = Self {
        name: "Executive",
        primary: Rgb::hex("#1a365d"),
        secondary: Rgb::hex("#2c5282"),
        text: Rgb::hex("#2d3748"),
        accent: Rgb::hex("#90cdf4"),
        font: FontFamily::Helvetica,
        spacing: 1.2,
        borders: true,
        header_style: HeaderStyle::Gradient,
        section_style: SectionStyle::Bordered,
    };

    /// # Ultra Modern
    ///
    /// Red palette, no rules.
    pub const ULTRA_MODERN: Self = Self {
        name: "Ultra Modern",
        primary: Rgb::hex("#e53e3e"),
        secondary: Rgb::hex("#c53030"),
        text: Rgb::hex("#2d3748"),
        accent: Rgb::hex("#fed7d7"),
        font: FontFamily::Helvetica,
        spacing: 1.4,
        borders: false,
        header_style: HeaderStyle::Bold,
        section_style: SectionStyle::Modern,
    };

    /// # Professional Plus
    pub const PROFESSIONAL_PLUS: Self = Self {
        name: "Professional Plus",
        primary: Rgb::hex("#2b6cb0"),
        secondary: Rgb::hex("#2c5282"),
        text: Rgb::hex("#2d3748"),
        accent: Rgb::hex("#bee3f8"),
        font: FontFamily::Helvetica,
        spacing: 1.25,
        borders: true,
        header_style: HeaderStyle::Professional,
        section_style: SectionStyle::Boxed,
    };
}

/// Every template, in display order.
pub const TEMPLATES: &[TemplateStyle] = &[
    TemplateStyle::EXECUTIVE,
    TemplateStyle::ULTRA_MODERN,
    TemplateStyle::PROFESSIONAL_PLUS,
];

/// List all template names.
pub fn list_templates() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name).collect()
}

/// Look up a template by name.
///
/// Exact names win; otherwise the match is ASCII case-insensitive.
pub fn by_name(name: &str) -> Result<&'static TemplateStyle, ResumeError> {
    let name = name.trim();
    TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .or_else(|| TEMPLATES.iter().find(|t| t.name.eq_ignore_ascii_case(name)))
        .ok_or_else(|| ResumeError::UnknownTemplate(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_templates() {
        assert_eq!(
            list_templates(),
            vec!["Executive", "Ultra Modern", "Professional Plus"]
        );
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("Executive").unwrap().name, "Executive");
        assert_eq!(by_name("ultra modern").unwrap().name, "Ultra Modern"); // Case insensitive
        assert!(matches!(
            by_name("Retro"),
            Err(ResumeError::UnknownTemplate(name)) if name == "Retro"
        ));
    }

    #[test]
    fn test_registry_colors() {
        let exec = by_name("Executive").unwrap();
        assert_eq!(exec.primary, Rgb::new(0x1a, 0x36, 0x5d));
        assert_eq!(exec.secondary, Rgb::new(0x2c, 0x52, 0x82));
        assert_eq!(exec.text, Rgb::new(0x2d, 0x37, 0x48));
        assert_eq!(exec.accent, Rgb::new(0x90, 0xcd, 0xf4));

        let modern = by_name("Ultra Modern").unwrap();
        assert_eq!(modern.primary.to_hex(), "#e53e3e");
        assert_eq!(modern.accent.to_hex(), "#fed7d7");
        assert!(!modern.borders);
        assert_eq!(modern.header_style, HeaderStyle::Bold);
        assert_eq!(modern.section_style, SectionStyle::Modern);

        let plus = by_name("Professional Plus").unwrap();
        assert_eq!(plus.primary.to_hex(), "#2b6cb0");
        assert_eq!(plus.spacing, 1.25);
        assert_eq!(plus.section_style, SectionStyle::Boxed);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#12345g").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert_eq!(Rgb::from_hex(" #FFFFFF ").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_serialize_template() {
        let json = serde_json::to_value(TemplateStyle::EXECUTIVE).unwrap();
        assert_eq!(json["name"], "Executive");
        assert_eq!(json["primary"], "#1a365d");
        assert_eq!(json["headerStyle"], "gradient");
        assert_eq!(json["sectionStyle"], "bordered");
        assert_eq!(json["font"], "Helvetica");
    }
}
