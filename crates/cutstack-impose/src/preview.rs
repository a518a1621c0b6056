use crate::impose::render_plan;
use crate::layout::plan;
use crate::options::ImpositionOptions;
use crate::render::{ImposedOutput, PdfOutput, PdfSource, SourcePages};
use crate::types::*;

/// Generate a preview of the imposition
///
/// Returns a PDF holding only the first `max_sheets` physical sheets. The
/// plan is made for the whole document, so the previewed sheets are exactly
/// the ones the full run would print.
pub async fn generate_preview(
    source: &PdfSource,
    options: &ImpositionOptions,
    max_sheets: usize,
) -> Result<Vec<u8>> {
    if max_sheets == 0 {
        return Err(ImposeError::InvalidInput(
            "Preview needs at least one sheet".to_string(),
        ));
    }

    let source = source.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        let geometry = options.sheet_geometry()?;
        let plan = plan(source.page_count(), options.layout_mode)?.truncated(max_sheets);

        let mut output = PdfOutput::new();
        render_plan(&source, &mut output, &plan, &geometry, options.cut_guides)?;
        output.finish()
    })
    .await?
}
