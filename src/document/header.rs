//! Document header: photo, name, contact details and summary.

use super::{Component, EmitContext};
use crate::ir::Op;
use crate::pdf::{EmbeddedImage, FontStyle};
use crate::resume::Personal;

/// Photo position and size on page 1, in millimetres.
const PHOTO_X: f32 = 170.0;
const PHOTO_Y: f32 = 10.0;
const PHOTO_SIZE: f32 = 30.0;

const NAME_PLACEHOLDER: &str = "Your Name";
const CONTACT_PLACEHOLDER: &str = "Contact Information";

fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Present contact fields joined with `" | "`.
///
/// ```
/// use resume_builder::document::contact_line;
/// use resume_builder::resume::Personal;
///
/// let personal = Personal {
///     email: "a@b.com".into(),
///     location: "NYC".into(),
///     ..Default::default()
/// };
/// assert_eq!(contact_line(&personal), "📧 a@b.com | 📍 NYC");
/// assert_eq!(contact_line(&Personal::default()), "Contact Information");
/// ```
pub fn contact_line(personal: &Personal) -> String {
    let parts: Vec<String> = [
        ("📧", &personal.email),
        ("📱", &personal.phone),
        ("📍", &personal.location),
    ]
    .into_iter()
    .filter_map(|(icon, value)| present(value).map(|v| format!("{} {}", icon, v)))
    .collect();

    if parts.is_empty() {
        CONTACT_PLACEHOLDER.to_string()
    } else {
        parts.join(" | ")
    }
}

/// Present social links joined with `" | "`, or `None` when there are none.
pub fn social_line(personal: &Personal) -> Option<String> {
    let parts: Vec<String> = [
        ("LinkedIn", &personal.linkedin),
        ("GitHub", &personal.github),
        ("Website", &personal.website),
    ]
    .into_iter()
    .filter_map(|(label, value)| present(value).map(|v| format!("{}: {}", label, v)))
    .collect();

    (!parts.is_empty()).then(|| parts.join(" | "))
}

impl Component for Personal {
    fn emit(&self, ctx: &mut EmitContext) {
        let style = ctx.style;

        if let Some(bytes) = self.profile_image.as_deref().filter(|b| !b.is_empty()) {
            match EmbeddedImage::decode(bytes) {
                Ok(image) => ctx.push(Op::Image {
                    image,
                    x: PHOTO_X,
                    y: PHOTO_Y,
                    width: PHOTO_SIZE,
                    height: PHOTO_SIZE,
                }),
                Err(e) => ctx.warn(format!("Error adding profile image: {}", e)),
            }
        }

        ctx.font(FontStyle::Bold, 24.0);
        ctx.text_color(style.primary);
        ctx.line(present(&self.name).unwrap_or(NAME_PLACEHOLDER), 10.0);

        ctx.font(FontStyle::Regular, 11.0);
        ctx.text_color(style.text);
        ctx.line(contact_line(self), 6.0);
        if let Some(social) = social_line(self) {
            ctx.line(social, 6.0);
        }

        if let Some(summary) = present(&self.summary) {
            ctx.gap(4.0);
            ctx.font(FontStyle::Bold, 12.0);
            ctx.line("Professional Summary", 6.0);
            ctx.font(FontStyle::Regular, 11.0);
            ctx.paragraph(summary, 6.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateStyle;
    use pretty_assertions::assert_eq;

    fn emit(personal: &Personal) -> EmitContext<'static> {
        let mut ctx = EmitContext::new(&TemplateStyle::EXECUTIVE);
        personal.emit(&mut ctx);
        ctx
    }

    #[test]
    fn test_contact_line_skips_empty_fields() {
        let personal = Personal {
            email: "a@b.com".into(),
            phone: String::new(),
            location: "NYC".into(),
            ..Default::default()
        };
        assert_eq!(contact_line(&personal), "📧 a@b.com | 📍 NYC");
    }

    #[test]
    fn test_contact_line_all_fields() {
        let personal = Personal {
            email: "a@b.com".into(),
            phone: "555-0100".into(),
            location: "NYC".into(),
            ..Default::default()
        };
        assert_eq!(contact_line(&personal), "📧 a@b.com | 📱 555-0100 | 📍 NYC");
    }

    #[test]
    fn test_social_line() {
        assert_eq!(social_line(&Personal::default()), None);
        let personal = Personal {
            linkedin: "in/jane".into(),
            website: "jane.dev".into(),
            ..Default::default()
        };
        assert_eq!(
            social_line(&personal).as_deref(),
            Some("LinkedIn: in/jane | Website: jane.dev")
        );
    }

    #[test]
    fn test_header_placeholders() {
        let ctx = emit(&Personal::default());
        assert_eq!(ctx.program.texts(), vec!["Your Name", "Contact Information"]);
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn test_header_with_summary_and_links() {
        let personal = Personal {
            name: "Jane Doe".into(),
            github: "jdoe".into(),
            summary: "Ships software.".into(),
            ..Default::default()
        };
        let ctx = emit(&personal);
        assert_eq!(
            ctx.program.texts(),
            vec![
                "Jane Doe",
                "Contact Information",
                "GitHub: jdoe",
                "Professional Summary",
                "Ships software."
            ]
        );
        assert!(ctx.program.iter().any(|op| *op == Op::Ln(4.0)));
    }

    #[test]
    fn test_name_uses_primary_color() {
        let ctx = emit(&Personal::default());
        assert_eq!(
            ctx.program.ops[1],
            Op::SetTextColor(TemplateStyle::EXECUTIVE.primary)
        );
    }
}
