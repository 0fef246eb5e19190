//! # Code Generation
//!
//! Lays IR programs out on pages and writes PDF bytes.
//!
//! The generator keeps a cursor in millimetres (top-left origin). Every
//! cell checks whether it still fits above the break trigger and starts a new
//! page when it does not. Pages after the first get a footer when they are
//! closed. PDF objects are written with `pdf-writer`.

use std::borrow::Cow;

use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::debug;

use super::ops::{Align, Op, Program};
use crate::document::RenderOptions;
use crate::error::ResumeError;
use crate::pdf::image::deflate;
use crate::pdf::metrics::Metrics;
use crate::pdf::{EmbeddedImage, FontFamily, FontStyle, MM_TO_PT, PageSetup, pt, text};
use crate::template::Rgb;

const FOOTER_FONT_SIZE: f32 = 8.0;
const FOOTER_HEIGHT: f32 = 10.0;
/// Rule stroke width in millimetres.
const RULE_WIDTH: f32 = 0.2;

/// Result of code generation.
#[derive(Debug, Clone)]
pub struct PdfOutput {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl Program {
    /// Compile the IR program to a PDF on A4 pages.
    pub fn to_pdf(&self, options: &RenderOptions) -> Result<PdfOutput, ResumeError> {
        self.to_pdf_with_setup(&PageSetup::A4, options)
    }

    /// Compile the IR program to a PDF with a specific page setup.
    pub fn to_pdf_with_setup(
        &self,
        setup: &PageSetup,
        options: &RenderOptions,
    ) -> Result<PdfOutput, ResumeError> {
        let mut writer = PageWriter::new(*setup, options);
        for op in &self.ops {
            writer.apply(op)?;
        }
        writer.finish()
    }
}

struct FinishedPage {
    content: Vec<u8>,
    images: Vec<Ref>,
}

struct PageWriter<'a> {
    setup: PageSetup,
    options: &'a RenderOptions,
    pdf: Pdf,
    alloc: Ref,
    pages: Vec<FinishedPage>,
    content: Content,
    images: Vec<Ref>,
    y: f32,
    font: Metrics,
    text_color: Rgb,
    fill_color: Rgb,
    draw_color: Rgb,
}

impl<'a> PageWriter<'a> {
    fn new(setup: PageSetup, options: &'a RenderOptions) -> Self {
        Self {
            setup,
            options,
            pdf: Pdf::new(),
            alloc: Ref::new(1),
            pages: Vec::new(),
            content: Content::new(),
            images: Vec::new(),
            y: setup.margin_top,
            font: Metrics::new(FontFamily::Helvetica, FontStyle::Regular, 11.0),
            text_color: Rgb::new(0, 0, 0),
            fill_color: Rgb::new(0, 0, 0),
            draw_color: Rgb::new(0, 0, 0),
        }
    }

    fn apply(&mut self, op: &Op) -> Result<(), ResumeError> {
        match op {
            Op::SetFont {
                family,
                style,
                size,
            } => {
                self.font = Metrics::new(*family, *style, *size);
            }
            Op::SetTextColor(c) => self.text_color = *c,
            Op::SetFillColor(c) => self.fill_color = *c,
            Op::SetDrawColor(c) => self.draw_color = *c,
            Op::Cell {
                text,
                height,
                fill,
                align,
            } => self.cell(text, *height, *fill, *align),
            Op::MultiCell { text, line_height } => {
                for line in text::wrap(text, self.setup.text_width(), &self.font) {
                    self.cell(&line, *line_height, false, Align::Left);
                }
            }
            Op::Ln(h) => self.y += h,
            Op::Rule => self.rule(),
            Op::Image {
                image,
                x,
                y,
                width,
                height,
            } => self.image(image, *x, *y, *width, *height)?,
        }
        Ok(())
    }

    fn cell(&mut self, text: &str, height: f32, fill: bool, align: Align) {
        if self.y + height > self.setup.break_trigger() {
            self.break_page();
        }

        if fill {
            let (r, g, b) = self.fill_color.to_unit();
            self.content.set_fill_rgb(r, g, b);
            self.content.rect(
                pt(self.setup.margin_left),
                pt(self.setup.height - self.y - height),
                pt(self.setup.content_width()),
                pt(height),
            );
            self.content.fill_nonzero();
        }

        self.draw_text(text, self.y, height, align, self.font, self.text_color);
        self.y += height;
    }

    /// Write one line of text vertically centered in a band of `height`.
    fn draw_text(
        &mut self,
        text: &str,
        top: f32,
        height: f32,
        align: Align,
        font: Metrics,
        color: Rgb,
    ) {
        let bytes = text::encode_line(text);
        if bytes.is_empty() {
            return;
        }

        let x = match align {
            Align::Left => self.setup.margin_left + self.setup.cell_padding,
            Align::Center => {
                self.setup.margin_left
                    + (self.setup.content_width() - font.encoded_width(&bytes)) / 2.0
            }
        };
        let baseline = top + 0.5 * height + 0.3 * font.size / MM_TO_PT;

        let (r, g, b) = color.to_unit();
        self.content.set_fill_rgb(r, g, b);
        self.content.begin_text();
        self.content
            .set_font(Name(font.style.resource_name()), font.size);
        self.content
            .next_line(pt(x), pt(self.setup.height - baseline));
        self.content.show(Str(&bytes));
        self.content.end_text();
    }

    fn rule(&mut self) {
        let (r, g, b) = self.draw_color.to_unit();
        let y = pt(self.setup.height - self.y);
        self.content.set_stroke_rgb(r, g, b);
        self.content.set_line_width(pt(RULE_WIDTH));
        self.content.move_to(pt(self.setup.margin_left), y);
        self.content.line_to(
            pt(self.setup.margin_left + self.setup.content_width()),
            y,
        );
        self.content.stroke();
    }

    fn image(
        &mut self,
        image: &EmbeddedImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), ResumeError> {
        let image_id = self.alloc.bump();

        let mask_id = match &image.alpha {
            Some(alpha) => {
                let id = self.alloc.bump();
                let data = deflate(alpha)?;
                let mut mask = self.pdf.image_xobject(id, &data);
                mask.filter(Filter::FlateDecode);
                mask.width(image.width as i32);
                mask.height(image.height as i32);
                mask.color_space().device_gray();
                mask.bits_per_component(8);
                mask.finish();
                Some(id)
            }
            None => None,
        };

        let data = deflate(&image.rgb)?;
        let mut xobject = self.pdf.image_xobject(image_id, &data);
        xobject.filter(Filter::FlateDecode);
        xobject.width(image.width as i32);
        xobject.height(image.height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
        if let Some(id) = mask_id {
            xobject.s_mask(id);
        }
        xobject.finish();

        self.images.push(image_id);
        let name = format!("Im{}", self.images.len());
        self.content.save_state();
        self.content.transform([
            pt(width),
            0.0,
            0.0,
            pt(height),
            pt(x),
            pt(self.setup.height - y - height),
        ]);
        self.content.x_object(Name(name.as_bytes()));
        self.content.restore_state();
        Ok(())
    }

    fn break_page(&mut self) {
        self.close_page();
        self.y = self.setup.margin_top;
    }

    fn close_page(&mut self) {
        let page_no = self.pages.len() + 1;
        if page_no > 1 {
            self.footer(page_no);
        }
        let content = std::mem::replace(&mut self.content, Content::new()).finish();
        let images = std::mem::take(&mut self.images);
        self.pages.push(FinishedPage { content, images });
    }

    fn footer(&mut self, page_no: usize) {
        let mut label = format!(
            "Page {} | Generated on {}",
            page_no,
            self.options.generated_on.format("%Y-%m-%d")
        );
        if let Some(note) = &self.options.footer_note {
            label.push_str(" | ");
            label.push_str(note);
        }
        let font = Metrics::new(FontFamily::Helvetica, FontStyle::Italic, FOOTER_FONT_SIZE);
        let top = self.setup.height - self.setup.break_margin;
        self.draw_text(&label, top, FOOTER_HEIGHT, Align::Center, font, Rgb::GRAY);
    }

    fn finish(mut self) -> Result<PdfOutput, ResumeError> {
        self.close_page();

        let catalog_id = self.alloc.bump();
        let tree_id = self.alloc.bump();
        let info_id = self.alloc.bump();
        let font_ids: Vec<(FontStyle, Ref)> = FontStyle::ALL
            .iter()
            .map(|&style| (style, self.alloc.bump()))
            .collect();

        let media_box = Rect::new(0.0, 0.0, pt(self.setup.width), pt(self.setup.height));
        let mut page_ids = Vec::with_capacity(self.pages.len());

        for page in &self.pages {
            let page_id = self.alloc.bump();
            let content_id = self.alloc.bump();

            let data: Cow<[u8]> = if self.options.compress {
                Cow::Owned(deflate(&page.content)?)
            } else {
                Cow::Borrowed(&page.content)
            };
            let mut stream = self.pdf.stream(content_id, &data);
            if self.options.compress {
                stream.filter(Filter::FlateDecode);
            }
            stream.finish();

            let mut pdf_page = self.pdf.page(page_id);
            pdf_page.media_box(media_box);
            pdf_page.parent(tree_id);
            pdf_page.contents(content_id);
            let mut resources = pdf_page.resources();
            let mut fonts = resources.fonts();
            for (style, id) in &font_ids {
                fonts.pair(Name(style.resource_name()), *id);
            }
            fonts.finish();
            if !page.images.is_empty() {
                let mut xobjects = resources.x_objects();
                for (i, id) in page.images.iter().enumerate() {
                    let name = format!("Im{}", i + 1);
                    xobjects.pair(Name(name.as_bytes()), *id);
                }
                xobjects.finish();
            }
            resources.finish();
            pdf_page.finish();

            page_ids.push(page_id);
        }

        self.pdf.catalog(catalog_id).pages(tree_id);
        self.pdf
            .pages(tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);
        for (style, id) in &font_ids {
            self.pdf
                .type1_font(*id)
                .base_font(Name(FontFamily::Helvetica.base_font(*style).as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }
        self.pdf
            .document_info(info_id)
            .producer(TextStr(concat!("resume-builder ", env!("CARGO_PKG_VERSION"))));

        let page_count = self.pages.len();
        let bytes = self.pdf.finish();
        debug!(page_count, size = bytes.len(), "PDF generated");
        Ok(PdfOutput { bytes, page_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn options() -> RenderOptions {
        RenderOptions {
            generated_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            footer_note: None,
            compress: false,
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn line(text: &str) -> Op {
        Op::Cell {
            text: text.into(),
            height: 10.0,
            fill: false,
            align: Align::Left,
        }
    }

    #[test]
    fn test_single_page() {
        let program: Program = vec![line("Hello")].into_iter().collect();
        let out = program.to_pdf(&options()).unwrap();
        assert_eq!(out.page_count, 1);
        assert!(out.bytes.starts_with(b"%PDF-"));
        assert!(contains(&out.bytes, b"(Hello) Tj"));
        assert!(contains(&out.bytes, b"/Helvetica-Bold"));
        assert!(contains(&out.bytes, b"/WinAnsiEncoding"));
        assert!(!contains(&out.bytes, b"Generated on"));
    }

    #[test]
    fn test_page_break_adds_footer() {
        // 30 lines of 10mm cannot fit between y=10 and y=282
        let program: Program = (0..30).map(|i| line(&format!("Line {}", i))).collect();
        let out = program.to_pdf(&options()).unwrap();
        assert_eq!(out.page_count, 2);
        assert!(contains(&out.bytes, b"/Count 2"));
        assert!(contains(&out.bytes, b"(Page 2 | Generated on 2024-03-01) Tj"));
        assert!(!contains(&out.bytes, b"Page 1 |"));
    }

    #[test]
    fn test_footer_note() {
        let mut opts = options();
        opts.footer_note = Some("Jane Doe".into());
        let program: Program = (0..30).map(|_| line("x")).collect();
        let out = program.to_pdf(&opts).unwrap();
        assert!(contains(&out.bytes, b"(Page 2 | Generated on 2024-03-01 | Jane Doe) Tj"));
    }

    #[test]
    fn test_line_feed_does_not_break_page() {
        let program: Program = vec![Op::Ln(500.0)].into_iter().collect();
        let out = program.to_pdf(&options()).unwrap();
        assert_eq!(out.page_count, 1);
    }

    #[test]
    fn test_image_xobject() {
        let image = EmbeddedImage {
            width: 2,
            height: 2,
            rgb: vec![255; 12],
            alpha: Some(vec![255, 0, 0, 255]),
        };
        let program: Program = vec![Op::Image {
            image,
            x: 170.0,
            y: 10.0,
            width: 30.0,
            height: 30.0,
        }]
        .into_iter()
        .collect();
        let out = program.to_pdf(&options()).unwrap();
        assert!(contains(&out.bytes, b"/Subtype /Image"));
        assert!(contains(&out.bytes, b"/SMask"));
        assert!(contains(&out.bytes, b"/Im1 Do"));
    }

    fn find(haystack: &[u8], needle: &[u8], from: usize) -> usize {
        from + haystack[from..]
            .windows(needle.len())
            .position(|w| w == needle)
            .unwrap()
    }

    /// Raw bytes of the first stream whose dictionary follows `marker`.
    fn stream_after(bytes: &[u8], marker: &[u8]) -> Vec<u8> {
        let start = find(bytes, b"stream\n", find(bytes, marker, 0)) + b"stream\n".len();
        let end = find(bytes, b"\nendstream", start);
        bytes[start..end].to_vec()
    }

    #[test]
    fn test_compressed_streams() {
        use flate2::read::ZlibDecoder;
        use std::io::Read;

        let program: Program = vec![line("Hidden")].into_iter().collect();
        let plain = program.to_pdf(&options()).unwrap();
        let mut opts = options();
        opts.compress = true;
        let packed = program.to_pdf(&opts).unwrap();

        assert!(!contains(&plain.bytes, b"/FlateDecode"));
        let mut content = Vec::new();
        ZlibDecoder::new(stream_after(&packed.bytes, b"/FlateDecode").as_slice())
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, stream_after(&plain.bytes, b"/Length"));
        assert!(contains(&content, b"(Hidden) Tj"));
    }
}
