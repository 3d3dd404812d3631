//! PDF summary report: all serialized answers grouped by section, with a
//! generation timestamp and the submission reference.

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};
use survey_spec::SerializedRecord;

use crate::{ExportError, SubmissionStamp};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 5.0;
const WRAP_WIDTH: usize = 90;

/// Render a serialized submission to PDF bytes.
pub fn make_pdf(record: &SerializedRecord, stamp: &SubmissionStamp) -> Result<Vec<u8>, ExportError> {
    let title = format!("{} - Summary Report", record.form_title());
    let (doc, page, layer) = PdfDocument::new(title.clone(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "page 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let oblique = doc.add_builtin_font(BuiltinFont::HelveticaOblique)?;

    {
        let mut writer = PageWriter::new(&doc, doc.get_page(page).get_layer(layer));

        writer.text(&title, &bold, 16.0);
        writer.space(LINE_HEIGHT);
        writer.text(
            &format!("Generated: {}", stamp.generated_at.format("%Y-%m-%d %H:%M")),
            &regular,
            10.0,
        );
        writer.text(&format!("Reference: {}", stamp.reference), &regular, 10.0);
        writer.space(LINE_HEIGHT);

        let mut current_section: Option<&str> = None;
        let mut current_record = 0;
        for row in record.rows() {
            if current_section != Some(row.section.as_str()) {
                current_section = Some(row.section.as_str());
                current_record = 0;
                writer.space(LINE_HEIGHT / 2.0);
                writer.text(&row.section, &bold, 12.0);
                writer.rule();
            }
            if row.record_number != current_record {
                current_record = row.record_number;
                // Only label records when a section actually repeats.
                if row.record_number > 1 || section_repeats(record, &row.section) {
                    writer.text(&format!("Record #{current_record}:"), &regular, 9.0);
                }
            }

            let value = if row.value.trim().is_empty() {
                "(not provided)"
            } else {
                row.value.as_str()
            };
            let wrapped = wrap_text(&format!("  \u{2022} {}: {}", row.field, value), WRAP_WIDTH);
            for (i, line) in wrapped.iter().enumerate() {
                if i == 0 {
                    writer.text(line, &regular, 9.0);
                } else {
                    writer.text(&format!("      {line}"), &regular, 9.0);
                }
            }
        }

        writer.space(LINE_HEIGHT);
        writer.rule();
        writer.text(
            "This document was generated automatically from survey responses.",
            &oblique,
            8.0,
        );
        writer.text(
            &format!("Generated on: {}", stamp.generated_at.format("%Y-%m-%d at %H:%M")),
            &oblique,
            8.0,
        );
    }

    Ok(doc.save_to_bytes()?)
}

fn section_repeats(record: &SerializedRecord, section: &str) -> bool {
    record
        .rows()
        .iter()
        .any(|row| row.section == section && row.record_number > 1)
}

/// Rudimentary word wrap to keep long prose answers inside the page.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Tracks the cursor on the current page and starts a new page when the
/// content reaches the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn ensure_room(&mut self) {
        if self.y < MARGIN + 2.0 * LINE_HEIGHT {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "page");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn text(&mut self, text: &str, font: &IndirectFontRef, size: f32) {
        self.ensure_room();
        self.layer.use_text(text, size, Mm(MARGIN), Mm(self.y), font);
        self.y -= LINE_HEIGHT;
    }

    fn space(&mut self, height: f32) {
        self.y -= height;
    }

    fn rule(&mut self) {
        self.ensure_room();
        self.y += LINE_HEIGHT / 2.0;
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(self.y)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(self.y)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
        self.y -= LINE_HEIGHT;
    }
}
