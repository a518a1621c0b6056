//! Cut guide rendering for imposed sheets
//!
//! Generates PDF content stream operations for the dashed lines along which
//! a printed 4-up sheet is cut into quarters.

use crate::constants::{CUT_GUIDE_DASH, CUT_GUIDE_GRAY, CUT_GUIDE_WIDTH};

/// Generate the horizontal and vertical cut guides through the middle of a
/// `width` x `height` sheet.
pub fn generate_cut_guides(width: f32, height: f32) -> String {
    let mid_x = width / 2.0;
    let mid_y = height / 2.0;

    let mut ops = String::new();

    // Save graphics state
    ops.push_str("q\n");
    ops.push_str(&format!("{} G\n", CUT_GUIDE_GRAY));
    ops.push_str(&format!("{} w\n", CUT_GUIDE_WIDTH));
    ops.push_str(CUT_GUIDE_DASH);
    ops.push('\n');

    // Vertical cut
    ops.push_str(&format!("{} 0 m {} {} l S\n", mid_x, mid_x, height));
    // Horizontal cut
    ops.push_str(&format!("0 {} m {} {} l S\n", mid_y, width, mid_y));

    // Restore graphics state
    ops.push_str("Q\n");

    ops
}
