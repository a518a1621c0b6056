//! Cut-and-stack slot planning
//!
//! This module decides which source page goes into every quadrant of every
//! output sheet. After printing, the whole pile is cut into four quarter
//! piles; quadrant 0's pile is placed on top of quadrant 1's, and so on.
//! Reading the combined pile from the top gives the source in order.
//!
//! ## Single-sided (4 pages per sheet)
//!
//! Quadrant `q` of sheet `s` holds page `s + q * sheets`:
//!
//! ```text
//! 8 pages, 2 sheets:   sheet 0        sheet 1
//!                      ┌───┬───┐      ┌───┬───┐
//!                      │ 1 │ 3 │      │ 2 │ 4 │
//!                      ├───┼───┤      ├───┼───┤
//!                      │ 5 │ 7 │      │ 6 │ 8 │
//!                      └───┴───┘      └───┴───┘
//! ```
//!
//! ## Double-sided (8 pages per sheet)
//!
//! Each quarter pile holds `2 * sheets` consecutive pages, front then back of
//! each sheet. Sheet `j` carries mini-page `2j + 1 + q * stride` on the front
//! and `2j + 2 + q * stride` on the back of quadrant `q`, with
//! `stride = 2 * sheets`.
//!
//! ## Double-sided, mirrored back
//!
//! Flipping the sheet swaps left and right, so the back side is filled with
//! the left/right neighbour's number in each row:
//!
//! ```text
//! 16 pages, 2 sheets:  sheet 0 front   sheet 0 back
//!                      ┌───┬───┐       ┌───┬───┐
//!                      │ 1 │ 5 │       │ 6 │ 2 │
//!                      ├───┼───┤       ├───┼───┤
//!                      │ 9 │13 │       │14 │10 │
//!                      └───┴───┘       └───┴───┘
//! ```

use crate::constants::{MINI_PAGES_PER_DUPLEX_SHEET, QUADRANTS_PER_SIDE};
use crate::types::{ImposeError, LayoutMode, Result};

use super::{ImpositionPlan, Quadrant, SheetPlan, SheetSide, SideLayout};

// =============================================================================
// Planning
// =============================================================================

/// Plan the slot table for `num_pages` source pages in the given mode.
///
/// # Errors
/// `InvalidInput` when `num_pages` is zero.
pub fn plan(num_pages: usize, mode: LayoutMode) -> Result<ImpositionPlan> {
    if num_pages == 0 {
        return Err(ImposeError::InvalidInput(
            "Cannot impose a document without pages".to_string(),
        ));
    }

    let sheets_total = sheets_needed(num_pages, mode);
    let plan = match mode {
        LayoutMode::SingleSided => plan_single_sided(num_pages, sheets_total),
        LayoutMode::DoubleSided | LayoutMode::DoubleSidedMirrored => {
            plan_double_sided(num_pages, sheets_total, mode)
        }
    };

    log::debug!(
        "Planned {} pages as {:?}: {} sheets, stride {}",
        num_pages,
        mode,
        plan.sheets_total,
        plan.quadrant_stride
    );

    Ok(plan)
}

/// Number of physical sheets needed for `num_pages` source pages.
pub fn sheets_needed(num_pages: usize, mode: LayoutMode) -> usize {
    match mode {
        LayoutMode::SingleSided => num_pages.div_ceil(QUADRANTS_PER_SIDE),
        LayoutMode::DoubleSided | LayoutMode::DoubleSidedMirrored => {
            padded_page_count(num_pages, mode).div_ceil(MINI_PAGES_PER_DUPLEX_SHEET)
        }
    }
}

/// Page count the plan is sized for.
///
/// Duplex modes round an odd count up by one; the extra mini-page is never
/// bound to a source page, it is simply an empty slot.
pub fn padded_page_count(num_pages: usize, mode: LayoutMode) -> usize {
    if mode.is_duplex() && num_pages % 2 == 1 {
        num_pages + 1
    } else {
        num_pages
    }
}

/// Mini-page distance between neighbouring quarter piles in duplex modes.
///
/// Each pile holds the front and back of every sheet, so piles start
/// `2 * sheets_total` mini-pages apart.
pub fn quadrant_stride(sheets_total: usize) -> usize {
    2 * sheets_total
}

fn plan_single_sided(num_pages: usize, sheets_total: usize) -> ImpositionPlan {
    let sheets = (0..sheets_total)
        .map(|sheet| {
            let slots = Quadrant::ALL.map(|q| {
                let index = sheet + q.index() * sheets_total;
                (index < num_pages).then_some(index)
            });
            SheetPlan {
                index: sheet,
                sides: vec![SideLayout {
                    side: SheetSide::Front,
                    slots,
                }],
            }
        })
        .collect();

    ImpositionPlan {
        mode: LayoutMode::SingleSided,
        source_pages: num_pages,
        sheets_total,
        quadrant_stride: sheets_total,
        sheets,
    }
}

fn plan_double_sided(num_pages: usize, sheets_total: usize, mode: LayoutMode) -> ImpositionPlan {
    let stride = quadrant_stride(sheets_total);

    let sheets = (0..sheets_total)
        .map(|sheet| {
            let front_base = 2 * sheet + 1;
            let back_base = 2 * sheet + 2;

            let front = Quadrant::ALL
                .map(|q| bind_mini_page(front_base + q.index() * stride, num_pages));
            let back = Quadrant::ALL.map(|q| {
                let pile = back_pile(q, mode);
                bind_mini_page(back_base + pile.index() * stride, num_pages)
            });

            SheetPlan {
                index: sheet,
                sides: vec![
                    SideLayout {
                        side: SheetSide::Front,
                        slots: front,
                    },
                    SideLayout {
                        side: SheetSide::Back,
                        slots: back,
                    },
                ],
            }
        })
        .collect();

    ImpositionPlan {
        mode,
        source_pages: num_pages,
        sheets_total,
        quadrant_stride: stride,
        sheets,
    }
}

/// Which quarter pile a back-side quadrant contributes to.
fn back_pile(quadrant: Quadrant, mode: LayoutMode) -> Quadrant {
    match mode {
        LayoutMode::DoubleSidedMirrored => quadrant.mirrored(),
        _ => quadrant,
    }
}

/// Convert a one-based mini-page number into a zero-based page index, or
/// None when the number lies beyond the source.
pub fn bind_mini_page(number: usize, num_pages: usize) -> Option<usize> {
    (1..=num_pages).contains(&number).then(|| number - 1)
}

// =============================================================================
// Tests
// =============================================================================
