//! 4-up cut-and-stack imposition
//!
//! This module orchestrates the imposition process:
//! 1. Validate the sheet configuration
//! 2. Plan which source page goes into every quadrant
//! 3. Fit every bound page into its quadrant
//! 4. Render the sheets through the document backend

mod io;
mod sheet;

pub use io::{load_pdf, save_pdf};
pub use sheet::render_plan;

use crate::layout::{ImpositionPlan, plan};
use crate::options::ImpositionOptions;
use crate::render::{ImposedOutput, PdfOutput, PdfSource, SourcePages};
use crate::types::*;

/// Main imposition function
///
/// Returns the serialized output PDF.
pub async fn impose(source: &PdfSource, options: &ImpositionOptions) -> Result<Vec<u8>> {
    options.validate()?;

    let source = source.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_sync(&source, &options)).await?
}

/// Blocking variant of [`impose`]
pub fn impose_sync(source: &PdfSource, options: &ImpositionOptions) -> Result<Vec<u8>> {
    let mut output = PdfOutput::new();
    impose_onto(source, &mut output, options)?;
    output.finish()
}

/// Impose `source` onto any backend.
///
/// Everything that can fail on bad input (sheet geometry, page count, source
/// page sizes) is checked before the first sheet is added, so an error never
/// leaves a partially imposed output behind. Returns the plan that was
/// rendered.
pub fn impose_onto<S, O>(
    source: &S,
    output: &mut O,
    options: &ImpositionOptions,
) -> Result<ImpositionPlan>
where
    S: SourcePages,
    O: ImposedOutput<Source = S>,
{
    let geometry = options.sheet_geometry()?;
    let plan = plan(source.page_count(), options.layout_mode)?;

    log::info!(
        "Imposing {} pages as {:?} on {} x {} pt sheets: {} sheets, {} output pages",
        plan.source_pages,
        plan.mode,
        geometry.width,
        geometry.height,
        plan.sheets_total,
        plan.output_pages()
    );

    render_plan(source, output, &plan, &geometry, options.cut_guides)?;
    Ok(plan)
}
