use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// US-letter, single-column line report. Object IDs are managed by hand:
/// catalog, pages node and font are fixed, everything else comes from
/// `fresh_ref`.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
}

/// First line of the body on the first page; the title sits above it.
const TITLE_Y: f32 = 750.0;
const BODY_TOP: f32 = 720.0;
/// Below this the cursor wraps to a new page, resuming at TITLE_Y.
const BOTTOM_LIMIT: f32 = 100.0;

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
        let next_id = 4;

        // Global font
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // US letter
            page_w: 612.0,
            page_h: 792.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 12.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Create a new page and its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Flush the current page's content stream
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), self.font_size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
    }

    /// One title line, then one line per record, wrapping to a fresh
    /// page whenever the cursor drops below the bottom threshold.
    pub fn write_report(&mut self, title: &str, lines: &[String]) {
        let mut content = self.new_page();

        self.draw_text(&mut content, self.margin, TITLE_Y, title);

        let mut y = BODY_TOP;
        for line in lines {
            self.draw_text(&mut content, self.margin, y, line);
            y -= self.row_h;

            if y < BOTTOM_LIMIT {
                self.finalize_page(content);
                content = self.new_page();
                y = TITLE_Y;
            }
        }

        self.finalize_page(content);
    }

    /// Finish the document and return its bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
