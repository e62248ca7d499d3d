//! Object bookkeeping and byte-exact serialization of the final file.
//!
//! One `ObjectWriter` is one document: it owns the id counter, the registered
//! objects and the page order. The four structural objects (catalog, page tree
//! and the two fonts) live at fixed ids and are only materialized in `build`.

use std::fmt;

use crate::fonts::BuiltinFont;

pub const A4_WIDTH: f32 = 595.0;
pub const A4_HEIGHT: f32 = 842.0;

/// Indirect object number. Generation is always 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjRef(u32);

impl ObjRef {
    pub const CATALOG: ObjRef = ObjRef(1);
    pub const PAGES: ObjRef = ObjRef(2);
    pub const FONT_REGULAR: ObjRef = ObjRef(3);
    pub const FONT_BOLD: ObjRef = ObjRef(4);

    /// First id handed out by `new_id`; everything below is reserved above.
    const FIRST_DYNAMIC: u32 = 5;

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 0 R", self.0)
    }
}

pub struct ObjectWriter {
    next_id: u32,
    objects: Vec<(ObjRef, String)>,
    page_ids: Vec<ObjRef>,
}

impl Default for ObjectWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectWriter {
    pub fn new() -> Self {
        ObjectWriter {
            next_id: ObjRef::FIRST_DYNAMIC,
            objects: Vec::new(),
            page_ids: Vec::new(),
        }
    }

    pub fn new_id(&mut self) -> ObjRef {
        let id = ObjRef(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers an unfiltered stream object holding `text` verbatim.
    ///
    /// `/Length` covers the whole `stream\n...\nendstream` wrapper rather than
    /// the payload alone; previously exported reports carry the same value.
    pub fn add_content(&mut self, text: &str) -> ObjRef {
        let id = self.new_id();
        let stream = format!("stream\n{text}\nendstream");
        self.objects
            .push((id, format!("<< /Length {} >>\n{stream}", stream.len())));
        id
    }

    pub fn add_page(&mut self, content: ObjRef) -> ObjRef {
        self.add_page_sized(content, A4_WIDTH, A4_HEIGHT)
    }

    pub fn add_page_sized(&mut self, content: ObjRef, width: f32, height: f32) -> ObjRef {
        let id = self.new_id();
        let fonts = BuiltinFont::ALL
            .iter()
            .map(|font| format!("/{} {}", font.resource_name(), font.object_id()))
            .collect::<Vec<_>>()
            .join(" ");
        self.objects.push((
            id,
            format!(
                "<< /Type /Page /Parent {} /MediaBox [0 0 {width} {height}] /Contents {content} /Resources << /Font << {fonts} >> >> >>",
                ObjRef::PAGES
            ),
        ));
        self.page_ids.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn build(self) -> Vec<u8> {
        let kids = self
            .page_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut objects: Vec<(ObjRef, String)> = Vec::with_capacity(self.objects.len() + 4);
        objects.push((
            ObjRef::CATALOG,
            format!("<< /Type /Catalog /Pages {} >>", ObjRef::PAGES),
        ));
        objects.push((
            ObjRef::PAGES,
            format!(
                "<< /Type /Pages /Kids [{kids}] /Count {} >>",
                self.page_ids.len()
            ),
        ));
        for font in BuiltinFont::ALL {
            objects.push((font.object_id(), font.dictionary()));
        }
        objects.extend(self.objects);
        objects.sort_by_key(|(id, _)| *id);

        let max_id = objects.last().map_or(0, |(id, _)| id.get()) as usize;

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");

        // Offsets are taken from the buffer as it is written, never computed.
        let mut offsets: Vec<Option<usize>> = vec![None; max_id + 1];
        for (id, body) in &objects {
            offsets[id.get() as usize] = Some(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", id.get()).as_bytes());
        }

        let xref_offset = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", max_id + 1);
        for offset in &offsets[1..] {
            match offset {
                Some(pos) => xref.push_str(&format!("{pos:010} 00000 n \n")),
                None => xref.push_str("0000000000 00000 n \n"),
            }
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root {} >>\nstartxref\n{xref_offset}\n%%EOF",
            max_id + 1,
            ObjRef::CATALOG
        ));
        out.extend_from_slice(xref.as_bytes());
        out
    }
}
