use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(
        "Invalid source page{}: size {} x {}",
        .index.map(|i| format!(" {}", i)).unwrap_or_default(),
        .width,
        .height
    )]
    InvalidSourcePage {
        /// Page index, when the page is known
        index: Option<usize>,
        width: f32,
        height: f32,
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Output sheet sizes, in PostScript points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait for the named sizes)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (842.0, 1191.0),
            PaperSize::A4 => (595.0, 842.0),
            PaperSize::A5 => (420.0, 595.0),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// How source pages are distributed over the quadrants of the output sheets.
///
/// All three modes cut every printed sheet into four quarters; stacking the
/// quarter piles in quadrant order gives the source pages back in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// One printed side per sheet, four pages per sheet
    #[default]
    SingleSided,
    /// Duplex, eight pages per sheet, back quadrants behind their fronts
    DoubleSided,
    /// Duplex with the back side's columns swapped, so the back lines up
    /// with the front when the sheet is flipped on its long edge
    DoubleSidedMirrored,
}

impl LayoutMode {
    /// Number of printed sides on every output sheet
    pub fn sides_per_sheet(self) -> usize {
        match self {
            LayoutMode::SingleSided => 1,
            LayoutMode::DoubleSided | LayoutMode::DoubleSidedMirrored => 2,
        }
    }

    pub fn is_duplex(self) -> bool {
        self.sides_per_sheet() == 2
    }
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Source page count after rounding up to an even count (duplex modes only)
    pub padded_pages: usize,
    /// Number of physical output sheets
    pub output_sheets: usize,
    /// Number of pages in the output document (one per printed side)
    pub output_pages: usize,
    /// Quadrants left empty across the whole run
    pub empty_slots: usize,
}
