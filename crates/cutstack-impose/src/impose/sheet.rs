//! Sheet rendering for imposition

use crate::layout::{ImpositionPlan, PagePlacement, SheetGeometry, SheetSide, calculate_placements};
use crate::render::{ImposedOutput, SourcePages};
use crate::types::*;

/// Placements for one printed side, ready to draw
struct PreparedSide {
    sheet: usize,
    side: SheetSide,
    placements: Vec<PagePlacement>,
}

/// Render every side of `plan` onto `output`.
///
/// All placements are computed first; the backend only sees sheets once the
/// whole plan is known to be drawable.
pub fn render_plan<S, O>(
    source: &S,
    output: &mut O,
    plan: &ImpositionPlan,
    geometry: &SheetGeometry,
    cut_guides: bool,
) -> Result<()>
where
    S: SourcePages,
    O: ImposedOutput<Source = S>,
{
    let source_dimensions = collect_source_dimensions(source)?;

    let prepared = plan
        .sides()
        .map(|(sheet, side)| {
            Ok(PreparedSide {
                sheet,
                side: side.side,
                placements: calculate_placements(side, geometry, &source_dimensions)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    for side in &prepared {
        let handle = output.add_sheet(geometry.width, geometry.height)?;

        for placement in &side.placements {
            output.draw(handle, placement.content_rect, source, placement.source_page)?;
        }

        if cut_guides {
            output.draw_cut_guides(handle, geometry.width, geometry.height)?;
        }

        log::debug!(
            "Sheet {} {:?}: placed pages {:?}",
            side.sheet,
            side.side,
            side.placements
                .iter()
                .map(|p| p.source_page + 1)
                .collect::<Vec<_>>()
        );
    }

    Ok(())
}

/// Get (width, height) of every source page
fn collect_source_dimensions(source: &impl SourcePages) -> Result<Vec<(f32, f32)>> {
    (0..source.page_count())
        .map(|index| source.page_size(index))
        .collect()
}
