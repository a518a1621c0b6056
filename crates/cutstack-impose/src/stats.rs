use crate::layout::{padded_page_count, plan};
use crate::options::ImpositionOptions;
use crate::render::SourcePages;
use crate::types::*;

/// Calculate statistics for imposing `source_pages` pages
pub fn calculate_statistics(
    source_pages: usize,
    options: &ImpositionOptions,
) -> Result<ImpositionStatistics> {
    options.validate()?;

    let plan = plan(source_pages, options.layout_mode)?;

    Ok(ImpositionStatistics {
        source_pages,
        padded_pages: padded_page_count(source_pages, options.layout_mode),
        output_sheets: plan.sheets_total,
        output_pages: plan.output_pages(),
        empty_slots: plan.empty_slots(),
    })
}

/// Calculate statistics for imposing a loaded document
pub fn document_statistics(
    source: &impl SourcePages,
    options: &ImpositionOptions,
) -> Result<ImpositionStatistics> {
    calculate_statistics(source.page_count(), options)
}
