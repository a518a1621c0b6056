pub mod constants;
pub mod impose;
pub mod layout;
mod marks;
mod options;
mod preview;
pub mod render;
mod stats;
mod types;

pub use impose::{impose, impose_onto, impose_sync, load_pdf, save_pdf};
pub use layout::{
    ImpositionPlan, PagePlacement, Quadrant, Rect, SheetGeometry, SheetPlan, SheetSide,
    SideLayout, fit_centered, plan, quadrant_rects,
};
pub use options::*;
pub use preview::generate_preview;
pub use render::{ImposedOutput, PdfOutput, PdfSource, SourcePages};
pub use stats::{calculate_statistics, document_statistics};
pub use types::*;
