//! Minimal PDF 1.4 writer.
//!
//! Object layout is fixed: 1 catalog, 2 page tree, 3 the shared resource
//! (a JPEG image XObject or the Helvetica font), then one page object and one
//! content stream per page.

use crate::layout::PageLayout;
use std::io::{self, Write};

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const RESOURCE_ID: usize = 3;
const FIRST_PAGE_ID: usize = 4;

/// The single resource shared by all pages.
pub enum SharedResource<'a> {
    Jpeg {
        data: &'a [u8],
        width: u32,
        height: u32,
    },
    Helvetica,
}

impl SharedResource<'_> {
    fn page_resources(&self) -> String {
        match self {
            SharedResource::Jpeg { .. } => {
                format!("<< /XObject << /Im0 {} 0 R >> >>", RESOURCE_ID)
            }
            SharedResource::Helvetica => format!("<< /Font << /F1 {} 0 R >> >>", RESOURCE_ID),
        }
    }
}

struct ObjectWriter<W: Write> {
    out: W,
    written: usize,
    offsets: Vec<usize>,
}

impl<W: Write> ObjectWriter<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            offsets: Vec::new(),
        }
    }

    fn raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    fn begin(&mut self, id: usize) -> io::Result<()> {
        debug_assert_eq!(id, self.offsets.len() + 1, "objects must be written in order");
        self.offsets.push(self.written);
        self.raw(format!("{} 0 obj\n", id).as_bytes())
    }

    fn object(&mut self, id: usize, body: &str) -> io::Result<()> {
        self.begin(id)?;
        self.raw(body.as_bytes())?;
        self.raw(b"\nendobj\n")
    }

    fn stream(&mut self, id: usize, dict: &str, data: &[u8]) -> io::Result<()> {
        self.begin(id)?;
        self.raw(format!("<< {} /Length {} >>\nstream\n", dict, data.len()).as_bytes())?;
        self.raw(data)?;
        self.raw(b"\nendstream\nendobj\n")
    }

    fn finish(mut self) -> io::Result<W> {
        let xref_offset = self.written;
        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", self.offsets.len() + 1);
        for offset in &self.offsets {
            table.push_str(&format!("{:010} 00000 n \n", offset));
        }
        table.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            self.offsets.len() + 1,
            CATALOG_ID,
            xref_offset
        ));
        self.raw(table.as_bytes())?;
        Ok(self.out)
    }
}

/// Writes a document whose pages all reference `resource`. Each entry of
/// `contents` is one page's content stream.
pub fn write_document<W: Write>(
    out: W,
    layout: &PageLayout,
    resource: &SharedResource<'_>,
    contents: &[Vec<u8>],
) -> io::Result<W> {
    let mut writer = ObjectWriter::new(out);
    writer.raw(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n")?;

    let page_ids: Vec<usize> = (0..contents.len())
        .map(|i| FIRST_PAGE_ID + i * 2)
        .collect();

    writer.object(
        CATALOG_ID,
        &format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID),
    )?;

    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");
    writer.object(
        PAGES_ID,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_ids.len()
        ),
    )?;

    match resource {
        SharedResource::Jpeg {
            data,
            width,
            height,
        } => writer.stream(
            RESOURCE_ID,
            &format!(
                "/Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode",
                width, height
            ),
            data,
        )?,
        SharedResource::Helvetica => writer.object(
            RESOURCE_ID,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        )?,
    }

    let resources = resource.page_resources();
    for (page_id, content) in page_ids.iter().zip(contents) {
        writer.object(
            *page_id,
            &format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources {} /Contents {} 0 R >>",
                PAGES_ID,
                layout.width_pt(),
                layout.height_pt(),
                resources,
                page_id + 1
            ),
        )?;
        writer.stream(page_id + 1, "", content)?;
    }

    writer.finish()
}

/// Content stream drawing the shared image into a `width` × `height` mm box
/// whose top-left corner is at (`x`, `y`) mm from the page's top-left.
pub fn image_content(layout: &PageLayout, x: f64, y: f64, width: f64, height: f64) -> Vec<u8> {
    use crate::layout::PT_PER_MM;
    format!(
        "q\n{:.4} 0 0 {:.4} {:.4} {:.4} cm\n/Im0 Do\nQ\n",
        width * PT_PER_MM,
        height * PT_PER_MM,
        x * PT_PER_MM,
        layout.bottom_pt(y, height)
    )
    .into_bytes()
}

/// Encodes `text` as a PDF literal string in WinAnsi. Characters outside
/// Latin-1 become `?`.
pub fn literal_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            ' '..='~' => out.push(c as u8),
            '\u{a0}'..='\u{ff}' => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out.push(b')');
    out
}
