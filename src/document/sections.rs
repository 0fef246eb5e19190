//! Section titles and entry layouts.

use super::{Component, EmitContext};
use crate::ir::{Align, Op};
use crate::pdf::FontStyle;
use crate::resume::{
    Certification, CustomEntry, Education, Experience, Project, ResumeData, SectionId, Skills,
};
use crate::template::{HeaderStyle, Rgb};

/// Space above every section title.
pub const SECTION_GAP: f32 = 10.0;
const TITLE_HEIGHT: f32 = 10.0;
const TITLE_GAP: f32 = 4.0;
const ENTRY_GAP: f32 = 2.0;
const LINE_HEIGHT: f32 = 6.0;

/// Emit one section if it has content. Returns whether anything was drawn.
pub fn emit_section(ctx: &mut EmitContext, data: &ResumeData, id: &SectionId) -> bool {
    match id {
        SectionId::Education => emit_entries(ctx, id.title(), &data.education),
        SectionId::Experience => emit_entries(ctx, id.title(), &data.experience),
        SectionId::Projects => emit_entries(ctx, id.title(), &data.projects),
        SectionId::Certifications => emit_entries(ctx, id.title(), &data.certifications),
        SectionId::Skills => {
            if data.skills.is_empty() {
                return false;
            }
            section_title(ctx, id.title());
            data.skills.emit(ctx);
            true
        }
        SectionId::Custom(name) => match data.custom_sections.get(name) {
            Some(entries) => emit_entries(ctx, name, entries),
            None => false,
        },
    }
}

fn emit_entries<T: Component>(ctx: &mut EmitContext, title: &str, entries: &[T]) -> bool {
    if entries.is_empty() {
        return false;
    }
    section_title(ctx, title);
    for entry in entries {
        entry.emit(ctx);
        ctx.gap(ENTRY_GAP);
    }
    true
}

/// Title line in the template's header style, optional rule beneath.
fn section_title(ctx: &mut EmitContext, title: &str) {
    let style = ctx.style;

    ctx.gap(SECTION_GAP);
    ctx.font(FontStyle::Bold, 14.0);
    match style.header_style {
        HeaderStyle::Gradient => {
            ctx.push(Op::SetFillColor(style.primary));
            ctx.text_color(Rgb::WHITE);
            ctx.push(Op::Cell {
                text: title.to_string(),
                height: TITLE_HEIGHT,
                fill: true,
                align: Align::Left,
            });
        }
        HeaderStyle::Bold | HeaderStyle::Professional => {
            ctx.text_color(style.primary);
            ctx.line(title, TITLE_HEIGHT);
        }
    }

    if style.borders {
        ctx.push(Op::SetDrawColor(style.accent));
        ctx.push(Op::Rule);
    }
    ctx.gap(TITLE_GAP);
}

// ============================================================================
// ENTRY LINES
// ============================================================================

fn label(ctx: &mut EmitContext, text: String) {
    let color = ctx.style.text;
    ctx.font(FontStyle::Bold, 11.0);
    ctx.text_color(color);
    ctx.line(text, LINE_HEIGHT);
}

fn detail(ctx: &mut EmitContext, text: String) {
    let color = ctx.style.text;
    ctx.font(FontStyle::Regular, 10.0);
    ctx.text_color(color);
    ctx.line(text, LINE_HEIGHT);
}

fn italic(ctx: &mut EmitContext, text: &str) {
    let color = ctx.style.secondary;
    ctx.font(FontStyle::Italic, 10.0);
    ctx.text_color(color);
    ctx.line(text, LINE_HEIGHT);
}

fn body(ctx: &mut EmitContext, text: &str) {
    let color = ctx.style.text;
    ctx.font(FontStyle::Regular, 10.0);
    ctx.text_color(color);
    ctx.paragraph(text, LINE_HEIGHT);
}

impl Component for Education {
    fn emit(&self, ctx: &mut EmitContext) {
        label(ctx, format!("{} - {}", self.degree, self.institution));
        detail(ctx, format!("{} | GPA: {}", self.year, self.gpa));
    }
}

impl Component for Experience {
    fn emit(&self, ctx: &mut EmitContext) {
        label(ctx, format!("{} at {}", self.position, self.company));
        italic(ctx, &self.duration);
        body(ctx, &self.description);
    }
}

impl Component for Project {
    fn emit(&self, ctx: &mut EmitContext) {
        label(ctx, self.name.clone());
        italic(ctx, &self.duration);
        body(ctx, &self.description);
    }
}

impl Component for Certification {
    fn emit(&self, ctx: &mut EmitContext) {
        label(ctx, self.name.clone());
        detail(ctx, format!("Issuer: {} | Date: {}", self.issuer, self.date));
    }
}

impl Component for CustomEntry {
    fn emit(&self, ctx: &mut EmitContext) {
        label(ctx, self.title.clone());
        if !self.date.trim().is_empty() {
            italic(ctx, &self.date);
        }
        body(ctx, &self.description);
    }
}

impl Component for Skills {
    fn emit(&self, ctx: &mut EmitContext) {
        for (kind, items) in self.groups() {
            label(ctx, kind.label().to_string());
            body(ctx, &items.join(", "));
            ctx.gap(ENTRY_GAP);
        }
    }
}
