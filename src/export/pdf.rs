use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 20.0;
const LINE_H: f32 = 16.0;

const FONT_SIZE: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const SUBTITLE_FONT_SIZE: f32 = 11.0;

/// What goes on the pages: a title block, one table, then summary lines.
pub struct Report<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [Vec<String>],
    pub footer: &'a [String],
}

/// Minimal multi-page table writer on top of `pdf-writer` (A4, Helvetica).
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page and return the id its content stream must use.
    fn add_page(&mut self) -> Ref {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        content_id
    }

    fn text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn fill_band(content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(MARGIN, y, width, ROW_H);
        content.fill_nonzero();
        content.restore_state();
    }

    fn row(content: &mut Content, y: f32, widths: &[f32], cells: &[String], size: f32) {
        let mut x = MARGIN;
        for (w, cell) in widths.iter().zip(cells) {
            Self::text(content, x + 4.0, y + 6.0, size, cell);
            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, ROW_H);
            content.stroke();
            content.restore_state();
            x += w;
        }
    }

    /// Column widths from the longest cell, scaled down to the printable width.
    fn col_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * 6.5 + 8.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * 6.2 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = PAGE_W - 2.0 * MARGIN;
        if total > max {
            let scale = max / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }
        widths
    }

    pub fn write_report(&mut self, report: &Report) {
        let widths = Self::col_widths(report.headers, report.rows);
        let table_w: f32 = widths.iter().sum();
        let header_row: Vec<String> = report.headers.iter().map(|s| s.to_string()).collect();

        let mut remaining = report.rows;
        let mut page_no = 1;

        loop {
            let content_id = self.add_page();
            let mut content = Content::new();
            let mut y = PAGE_H - MARGIN;

            if page_no == 1 {
                Self::text(&mut content, MARGIN, y, TITLE_FONT_SIZE, report.title);
                y -= LINE_H + 6.0;
                Self::text(&mut content, MARGIN, y, SUBTITLE_FONT_SIZE, report.subtitle);
                y -= LINE_H;
            }

            y -= ROW_H;
            Self::fill_band(&mut content, y, table_w, 0.85);
            Self::row(&mut content, y, &widths, &header_row, HEADER_FONT_SIZE);

            let mut consumed = 0;
            for (i, cells) in remaining.iter().enumerate() {
                if y - ROW_H < MARGIN {
                    break;
                }
                y -= ROW_H;
                if i % 2 == 0 {
                    Self::fill_band(&mut content, y, table_w, 0.96);
                }
                Self::row(&mut content, y, &widths, cells, FONT_SIZE);
                consumed += 1;
            }
            remaining = &remaining[consumed..];

            let footer_fits = y - (report.footer.len() as f32 + 1.0) * LINE_H >= MARGIN;
            if remaining.is_empty() && footer_fits {
                y -= LINE_H;
                for line in report.footer {
                    y -= LINE_H;
                    Self::text(&mut content, MARGIN, y, SUBTITLE_FONT_SIZE, line);
                }
            }

            Self::text(
                &mut content,
                PAGE_W - MARGIN - 40.0,
                MARGIN - 30.0,
                FONT_SIZE,
                &format!("Page {page_no}"),
            );

            self.pdf.stream(content_id, &content.finish());
            page_no += 1;

            if remaining.is_empty() && (footer_fits || report.footer.is_empty()) {
                break;
            }
            if remaining.is_empty() {
                // totals did not fit: one more page for the footer only
                let content_id = self.add_page();
                let mut content = Content::new();
                let mut y = PAGE_H - MARGIN;
                for line in report.footer {
                    y -= LINE_H;
                    Self::text(&mut content, MARGIN, y, SUBTITLE_FONT_SIZE, line);
                }
                self.pdf.stream(content_id, &content.finish());
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
