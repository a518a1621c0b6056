//! Shared constants for 4-up imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Sheet Subdivision
// =============================================================================

/// Quadrants per printed side (2 x 2)
pub const QUADRANTS_PER_SIDE: usize = 4;

/// Mini-pages carried by one duplex sheet (4 front + 4 back)
pub const MINI_PAGES_PER_DUPLEX_SHEET: usize = 2 * QUADRANTS_PER_SIDE;

/// Default inset of every quadrant edge, in points
pub const DEFAULT_MARGIN_PT: f32 = 10.0;

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default source page size when a page carries no MediaBox (US Letter)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);

// =============================================================================
// Cut Guides
// =============================================================================

/// Line width for cut guides (points)
pub const CUT_GUIDE_WIDTH: f32 = 0.25;

/// Dash pattern for cut guides: 4pt dash, 4pt gap
pub const CUT_GUIDE_DASH: &str = "[4 4] 0 d";

/// Grey level for cut guides (0 = black, 1 = white)
pub const CUT_GUIDE_GRAY: f32 = 0.6;
