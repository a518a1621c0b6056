//! lopdf implementation of the document backend
//!
//! [`PdfSource`] wraps a parsed source PDF; [`PdfOutput`] collects imposed
//! sheets and writes them out as a new PDF. Each source page becomes one
//! Form XObject in the output, placed on its sheet with a scale/translate
//! matrix and clipped to the destination rectangle.

use crate::layout::Rect;
use crate::marks::generate_cut_guides;
use crate::types::{ImposeError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::backend::{ImposedOutput, SourcePages};
use super::xobject::{PageFrame, create_page_xobject, get_page_dimensions, page_frame};

// =============================================================================
// Source
// =============================================================================

/// A parsed source PDF with its pages in document order
#[derive(Debug, Clone)]
pub struct PdfSource {
    document: Document,
    page_ids: Vec<ObjectId>,
}

impl PdfSource {
    /// Parse a PDF from memory
    pub fn open(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        let page_ids = document.get_pages().values().copied().collect();
        Self {
            document,
            page_ids,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn page_id(&self, index: usize) -> Result<ObjectId> {
        self.page_ids.get(index).copied().ok_or_else(|| {
            ImposeError::InvalidInput(format!(
                "Page index {} out of range ({} pages)",
                index,
                self.page_ids.len()
            ))
        })
    }
}

impl SourcePages for PdfSource {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_size(&self, index: usize) -> Result<(f32, f32)> {
        get_page_dimensions(&self.document, self.page_id(index)?)
    }
}

// =============================================================================
// Output
// =============================================================================

/// Handle to a sheet added to a [`PdfOutput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetHandle(usize);

/// One output page under construction
#[derive(Debug)]
struct SheetCanvas {
    width: f32,
    height: f32,
    content: String,
    xobjects: Dictionary,
    placed: usize,
}

/// Output PDF built from imposed sheets
///
/// All draws into one `PdfOutput` must come from the same source document:
/// copied objects are cached by their source object ID.
#[derive(Debug)]
pub struct PdfOutput {
    document: Document,
    pages_id: ObjectId,
    sheets: Vec<SheetCanvas>,
    /// Source object ID -> output object ID for deep-copied resources
    object_cache: HashMap<ObjectId, ObjectId>,
    /// Source page ID -> Form XObject in the output
    xobject_cache: HashMap<ObjectId, ObjectId>,
}

impl Default for PdfOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfOutput {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        Self {
            document,
            pages_id,
            sheets: Vec::new(),
            object_cache: HashMap::new(),
            xobject_cache: HashMap::new(),
        }
    }

    /// Number of sheets (output pages) added so far
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn canvas(&mut self, sheet: SheetHandle) -> Result<&mut SheetCanvas> {
        self.sheets
            .get_mut(sheet.0)
            .ok_or_else(|| ImposeError::InvalidInput(format!("Unknown sheet {}", sheet.0)))
    }

    fn page_xobject(&mut self, source: &Document, page_id: ObjectId) -> Result<ObjectId> {
        if let Some(&id) = self.xobject_cache.get(&page_id) {
            return Ok(id);
        }
        let id = create_page_xobject(&mut self.document, source, page_id, &mut self.object_cache)?;
        self.xobject_cache.insert(page_id, id);
        Ok(id)
    }

    /// Write the page tree and catalog
    fn build_page_tree(&mut self) {
        let mut page_refs = Vec::with_capacity(self.sheets.len());

        for canvas in std::mem::take(&mut self.sheets) {
            let content_id = self.document.add_object(Stream::new(
                Dictionary::new(),
                canvas.content.into_bytes(),
            ));

            let mut resources = Dictionary::new();
            resources.set("XObject", Object::Dictionary(canvas.xobjects));

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(self.pages_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(canvas.width),
                    Object::Real(canvas.height),
                ]),
            );
            page_dict.set("Contents", Object::Reference(content_id));
            page_dict.set("Resources", Object::Dictionary(resources));

            page_refs.push(Object::Reference(self.document.add_object(page_dict)));
        }

        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.document.trailer.set("Root", catalog_id);
    }

    /// Finish the page tree and hand back the lopdf document
    pub fn into_document(mut self) -> Document {
        self.build_page_tree();
        self.document
    }
}

impl ImposedOutput for PdfOutput {
    type Source = PdfSource;
    type Sheet = SheetHandle;

    fn add_sheet(&mut self, width: f32, height: f32) -> Result<SheetHandle> {
        self.sheets.push(SheetCanvas {
            width,
            height,
            content: String::new(),
            xobjects: Dictionary::new(),
            placed: 0,
        });
        Ok(SheetHandle(self.sheets.len() - 1))
    }

    fn draw(
        &mut self,
        sheet: SheetHandle,
        dest: Rect,
        source: &PdfSource,
        source_page: usize,
    ) -> Result<()> {
        let page_id = source.page_id(source_page)?;
        let frame = page_frame(source.document(), page_id)?;
        let xobject_id = self.page_xobject(source.document(), page_id)?;

        let canvas = self.canvas(sheet)?;
        let name = format!("P{}", canvas.placed);
        canvas.placed += 1;
        canvas
            .xobjects
            .set(name.as_bytes(), Object::Reference(xobject_id));
        canvas
            .content
            .push_str(&placement_command(&name, &dest, &frame));

        Ok(())
    }

    fn draw_cut_guides(&mut self, sheet: SheetHandle, width: f32, height: f32) -> Result<()> {
        let canvas = self.canvas(sheet)?;
        canvas.content.push_str(&generate_cut_guides(width, height));
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let mut document = self.into_document();
        let mut writer = Vec::new();
        document.save_to(&mut writer)?;
        Ok(writer)
    }
}

/// Generate the content stream command that maps a page frame onto `dest`.
///
/// The clip keeps anything drawn outside the page box off neighbouring
/// quadrants.
fn placement_command(xobject_name: &str, dest: &Rect, frame: &PageFrame) -> String {
    let [a, b, c, d, e, f] = placement_matrix(dest, frame);

    format!(
        "q {} {} {} {} re W n {} {} {} {} {} {} cm /{} Do Q\n",
        dest.x0,
        dest.y0,
        dest.width(),
        dest.height(),
        a,
        b,
        c,
        d,
        e,
        f,
        xobject_name
    )
}

/// `cm` operands taking the visible box, turned clockwise by the page's
/// rotation, onto `dest`.
fn placement_matrix(dest: &Rect, frame: &PageFrame) -> [f32; 6] {
    let [bx0, by0, bx1, by1] = frame.bbox;
    let (display_width, display_height) = frame.display_size();
    let sx = dest.width() / display_width;
    let sy = dest.height() / display_height;

    match frame.rotation {
        90 => [0.0, -sy, sx, 0.0, dest.x0 - by0 * sx, dest.y0 + bx1 * sy],
        180 => [-sx, 0.0, 0.0, -sy, dest.x0 + bx1 * sx, dest.y0 + by1 * sy],
        270 => [0.0, sy, -sx, 0.0, dest.x0 + by1 * sx, dest.y0 - bx0 * sy],
        _ => [sx, 0.0, 0.0, sy, dest.x0 - bx0 * sx, dest.y0 - by0 * sy],
    }
}
