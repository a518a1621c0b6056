//! PDF rendering modules for imposition
//!
//! This module handles everything that touches the document format:
//! - The capability traits the imposition loop draws through
//! - The lopdf backend implementing them
//! - Creating XObjects from source pages and deep copying their resources

mod backend;
mod pdf;
mod xobject;

pub use backend::{ImposedOutput, SourcePages};
pub use pdf::{PdfOutput, PdfSource, SheetHandle};
pub use xobject::{
    PageFrame, copy_object_deep, create_page_xobject, get_page_dimensions, page_box, page_frame,
};
