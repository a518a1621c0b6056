use crate::constants::DEFAULT_MARGIN_PT;
use crate::layout::SheetGeometry;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpositionOptions {
    /// Which cut-and-stack variant to produce
    pub layout_mode: LayoutMode,

    // Output sheet
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    /// Inset of every quadrant edge, in points
    pub margin_pt: f32,

    /// Draw dashed guides along the two cut lines
    pub cut_guides: bool,
}

impl Default for ImpositionOptions {
    fn default() -> Self {
        Self {
            layout_mode: LayoutMode::SingleSided,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_pt: DEFAULT_MARGIN_PT,
            cut_guides: false,
        }
    }
}

impl ImpositionOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes).map_err(|e| {
            ImposeError::InvalidConfiguration(format!("Failed to parse config: {}", e))
        })?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ImposeError::InvalidConfiguration(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Output sheet (width, height) in points
    pub fn sheet_dimensions_pt(&self) -> (f32, f32) {
        self.paper_size
            .dimensions_with_orientation(self.orientation)
    }

    /// Validated sheet geometry for these options
    pub fn sheet_geometry(&self) -> Result<SheetGeometry> {
        let (width, height) = self.sheet_dimensions_pt();
        SheetGeometry::new(width, height, self.margin_pt)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.sheet_geometry().map(|_| ())
    }
}
