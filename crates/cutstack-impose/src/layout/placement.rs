//! Content placement within quadrants
//!
//! Turns a planned side into draw instructions: for every bound quadrant, the
//! rectangle its source page is scaled into.

use crate::types::{ImposeError, Result};

use super::{PagePlacement, Quadrant, Rect, SheetGeometry, SideLayout, fit_page, fit_scale};

/// Calculate the placement of a single source page in a quadrant.
///
/// # Arguments
/// * `geometry` - The validated sheet geometry
/// * `quadrant` - Target quadrant
/// * `source_page` - Index of the source page
/// * `source_width` - Width of the source page in points
/// * `source_height` - Height of the source page in points
pub fn place_page(
    geometry: &SheetGeometry,
    quadrant: Quadrant,
    source_page: usize,
    source_width: f32,
    source_height: f32,
) -> Result<PagePlacement> {
    let target: Rect = geometry.quadrant(quadrant);
    let content_rect = fit_page(source_page, source_width, source_height, target)?;

    Ok(PagePlacement {
        source_page,
        quadrant,
        content_rect,
        scale: fit_scale(source_width, source_height, &target),
    })
}

/// Calculate all page placements for one printed side.
///
/// Empty quadrants produce no placement. Placements come back in quadrant
/// order.
///
/// # Arguments
/// * `side` - The planned side
/// * `geometry` - The validated sheet geometry
/// * `source_dimensions` - (width, height) in points for each source page
pub fn calculate_placements(
    side: &SideLayout,
    geometry: &SheetGeometry,
    source_dimensions: &[(f32, f32)],
) -> Result<Vec<PagePlacement>> {
    side.bound()
        .map(|(quadrant, source_page)| {
            let &(width, height) = source_dimensions.get(source_page).ok_or_else(|| {
                ImposeError::InvalidInput(format!(
                    "Source page {} has no known size ({} pages available)",
                    source_page,
                    source_dimensions.len()
                ))
            })?;
            place_page(geometry, quadrant, source_page, width, height)
        })
        .collect()
}
