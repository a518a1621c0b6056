//! Layout data types for imposition
//!
//! These types represent the intermediate layout calculations between
//! quadrant planning and PDF rendering.

use crate::types::LayoutMode;

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// One quarter of a printed side.
///
/// The discriminant is the quadrant index used throughout planning; the
/// mapping from index to rectangle is the same on every sheet and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in index order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The quadrant in the same row on the other side of the vertical cut
    pub fn mirrored(self) -> Quadrant {
        match self {
            Quadrant::TopLeft => Quadrant::TopRight,
            Quadrant::TopRight => Quadrant::TopLeft,
            Quadrant::BottomLeft => Quadrant::BottomRight,
            Quadrant::BottomRight => Quadrant::BottomLeft,
        }
    }

    pub fn is_top(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::BottomLeft)
    }
}

/// A rectangular area in points, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Bottom edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        (self.y0 + self.y1) / 2.0
    }

    /// Whether both extents are strictly positive
    pub fn has_area(&self) -> bool {
        self.x1 > self.x0 && self.y1 > self.y0
    }

    /// Check whether `other` lies inside this rectangle, allowing `tolerance`
    /// of slack on every edge.
    pub fn contains_rect(&self, other: &Rect, tolerance: f32) -> bool {
        other.x0 >= self.x0 - tolerance
            && other.y0 >= self.y0 - tolerance
            && other.x1 <= self.x1 + tolerance
            && other.y1 <= self.y1 + tolerance
    }
}

/// Page assignment for one printed side of a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideLayout {
    pub side: SheetSide,
    /// Source page index per quadrant, in quadrant index order (None = empty)
    pub slots: [Option<usize>; 4],
}

impl SideLayout {
    pub fn slot(&self, quadrant: Quadrant) -> Option<usize> {
        self.slots[quadrant.index()]
    }

    /// Bound quadrants with their source page, in quadrant order
    pub fn bound(&self) -> impl Iterator<Item = (Quadrant, usize)> + '_ {
        Quadrant::ALL
            .iter()
            .filter_map(|&q| self.slot(q).map(|page| (q, page)))
    }

    pub fn empty_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }
}

/// One physical output sheet: a front side and, in duplex modes, a back side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    /// Zero-based sheet index
    pub index: usize,
    /// Printed sides, front first
    pub sides: Vec<SideLayout>,
}

impl SheetPlan {
    pub fn side(&self, side: SheetSide) -> Option<&SideLayout> {
        self.sides.iter().find(|layout| layout.side == side)
    }

    pub fn front(&self) -> &SideLayout {
        &self.sides[0]
    }

    pub fn back(&self) -> Option<&SideLayout> {
        self.side(SheetSide::Back)
    }
}

/// Complete slot table for a run
///
/// A pure function of (source page count, layout mode): planning twice with the
/// same inputs yields equal plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionPlan {
    pub mode: LayoutMode,
    /// Number of source pages the plan was made for
    pub source_pages: usize,
    /// Number of physical sheets
    pub sheets_total: usize,
    /// Mini-page distance between neighbouring quadrant stacks
    pub quadrant_stride: usize,
    pub sheets: Vec<SheetPlan>,
}

impl ImpositionPlan {
    /// Every printed side in output order (sheet by sheet, front before back)
    pub fn sides(&self) -> impl Iterator<Item = (usize, &SideLayout)> + '_ {
        self.sheets
            .iter()
            .flat_map(|sheet| sheet.sides.iter().map(move |side| (sheet.index, side)))
    }

    /// Number of pages in the output document
    pub fn output_pages(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.sides.len()).sum()
    }

    pub fn empty_slots(&self) -> usize {
        self.sides().map(|(_, side)| side.empty_count()).sum()
    }

    /// Locate the slot holding a source page as (sheet, side, quadrant)
    pub fn locate(&self, page: usize) -> Option<(usize, SheetSide, Quadrant)> {
        self.sides().find_map(|(sheet, side)| {
            side.bound()
                .find(|&(_, bound)| bound == page)
                .map(|(quadrant, _)| (sheet, side.side, quadrant))
        })
    }

    /// Keep only the first `max_sheets` sheets
    pub fn truncated(mut self, max_sheets: usize) -> Self {
        self.sheets.truncate(max_sheets);
        self
    }
}

/// Final placement of a source page on an output side
///
/// This is the result of all layout calculations and contains
/// everything needed to render the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// Source page index
    pub source_page: usize,
    /// Quadrant the page occupies
    pub quadrant: Quadrant,
    /// Position and size of the page content in points
    pub content_rect: Rect,
    /// Scale factor applied to the source page
    pub scale: f32,
}
