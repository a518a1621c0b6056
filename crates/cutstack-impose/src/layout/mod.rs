//! Layout calculation modules for imposition
//!
//! This module handles all the pure calculations for 4-up imposition:
//! - Slot planning (which source page goes where)
//! - Quadrant geometry (quadrant rectangles, aspect-preserving fit)
//! - Content placement (draw instructions per side)

mod geometry;
mod placement;
mod planner;
mod types;

pub use geometry::*;
pub use placement::*;
pub use planner::*;
pub use types::*;
