//! Document backend capabilities
//!
//! Imposition only needs to know how many pages a source has, how big each
//! one is, and how to project one of them into a rectangle on a new sheet.
//! Everything else about the document format stays behind these traits.

use crate::layout::Rect;
use crate::types::Result;

/// A document whose pages can be imposed
pub trait SourcePages {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// (width, height) of a page in points
    fn page_size(&self, index: usize) -> Result<(f32, f32)>;
}

/// An output document that receives imposed sheets
///
/// Sheets are identified by the handle returned from [`add_sheet`]. Draws
/// onto one sheet take `&mut self` and are therefore serialized; sheets are
/// emitted in the order they were added.
///
/// [`add_sheet`]: ImposedOutput::add_sheet
pub trait ImposedOutput {
    type Source: SourcePages + ?Sized;
    type Sheet: Copy;

    /// Append a blank sheet of the given size in points
    fn add_sheet(&mut self, width: f32, height: f32) -> Result<Self::Sheet>;

    /// Draw a whole source page into `dest` on `sheet`.
    ///
    /// The page box is mapped onto `dest` exactly and clipped to it;
    /// implementations must not pick their own scale.
    fn draw(
        &mut self,
        sheet: Self::Sheet,
        dest: Rect,
        source: &Self::Source,
        source_page: usize,
    ) -> Result<()>;

    /// Mark the cut lines through the middle of a sheet
    fn draw_cut_guides(&mut self, _sheet: Self::Sheet, _width: f32, _height: f32) -> Result<()> {
        Ok(())
    }

    /// Serialize the finished document
    fn finish(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}
