//! Quadrant geometry
//!
//! This module handles the geometric layout of the 2 x 2 quadrant grid on a
//! sheet and the aspect-preserving fit of a source page inside a quadrant.

use crate::types::{ImposeError, Result};

use super::{Quadrant, Rect};

// =============================================================================
// Quadrant Rectangles
// =============================================================================

/// Calculate the four quadrant rectangles of a sheet, inset by `margin`.
///
/// The result is in quadrant index order: top-left, top-right, bottom-left,
/// bottom-right. Every edge of every quadrant is pulled in by `margin`, so
/// neighbouring quadrants are `2 * margin` apart.
///
/// # Errors
/// `InvalidConfiguration` when the sheet size is not positive, the margin is
/// negative, or the margins would leave a quadrant without area.
pub fn quadrant_rects(sheet_width: f32, sheet_height: f32, margin: f32) -> Result<[Rect; 4]> {
    validate_sheet(sheet_width, sheet_height, margin)?;

    let half_w = sheet_width / 2.0;
    let half_h = sheet_height / 2.0;

    Ok([
        Rect::new(margin, half_h + margin, half_w - margin, sheet_height - margin),
        Rect::new(
            half_w + margin,
            half_h + margin,
            sheet_width - margin,
            sheet_height - margin,
        ),
        Rect::new(margin, margin, half_w - margin, half_h - margin),
        Rect::new(half_w + margin, margin, sheet_width - margin, half_h - margin),
    ])
}

fn validate_sheet(sheet_width: f32, sheet_height: f32, margin: f32) -> Result<()> {
    if !(sheet_width.is_finite() && sheet_height.is_finite())
        || sheet_width <= 0.0
        || sheet_height <= 0.0
    {
        return Err(ImposeError::InvalidConfiguration(format!(
            "Sheet size must be positive, got {} x {}",
            sheet_width, sheet_height
        )));
    }

    if !margin.is_finite() || margin < 0.0 {
        return Err(ImposeError::InvalidConfiguration(format!(
            "Margin must be a non-negative number, got {}",
            margin
        )));
    }

    let half_w = sheet_width / 2.0;
    let half_h = sheet_height / 2.0;
    if 2.0 * margin >= half_w || 2.0 * margin >= half_h {
        return Err(ImposeError::InvalidConfiguration(format!(
            "Margin {} leaves no room for a quadrant on a {} x {} sheet",
            margin, sheet_width, sheet_height
        )));
    }

    Ok(())
}

/// Validated sheet dimensions with their quadrant rectangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    quadrants: [Rect; 4],
}

impl SheetGeometry {
    pub fn new(width: f32, height: f32, margin: f32) -> Result<Self> {
        let quadrants = quadrant_rects(width, height, margin)?;
        Ok(Self {
            width,
            height,
            margin,
            quadrants,
        })
    }

    pub fn quadrant(&self, quadrant: Quadrant) -> Rect {
        self.quadrants[quadrant.index()]
    }

    pub fn quadrants(&self) -> &[Rect; 4] {
        &self.quadrants
    }

    /// The whole sheet
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

// =============================================================================
// Fitting
// =============================================================================

/// Scale factor that fits a `src_width` x `src_height` page inside `target`
/// without distortion.
pub fn fit_scale(src_width: f32, src_height: f32, target: &Rect) -> f32 {
    let scale_w = target.width() / src_width;
    let scale_h = target.height() / src_height;
    scale_w.min(scale_h)
}

/// Scale a source page to fit `target`, preserving its aspect ratio, and
/// center it on both axes.
///
/// # Errors
/// `InvalidSourcePage` without a page index for a source without positive,
/// finite extent. Callers that know the page should use [`fit_page`].
pub fn fit_centered(src_width: f32, src_height: f32, target: Rect) -> Result<Rect> {
    fit_into(None, src_width, src_height, target)
}

/// [`fit_centered`] for a known source page index
pub fn fit_page(index: usize, src_width: f32, src_height: f32, target: Rect) -> Result<Rect> {
    fit_into(Some(index), src_width, src_height, target)
}

fn fit_into(index: Option<usize>, src_width: f32, src_height: f32, target: Rect) -> Result<Rect> {
    check_source_size(index, src_width, src_height)?;

    let scale = fit_scale(src_width, src_height, &target);
    let new_width = src_width * scale;
    let new_height = src_height * scale;

    let x0 = target.x0 + (target.width() - new_width) / 2.0;
    let y0 = target.y0 + (target.height() - new_height) / 2.0;

    Ok(Rect::new(x0, y0, x0 + new_width, y0 + new_height))
}

/// Reject pages whose size cannot be scaled.
pub fn check_source_size(index: Option<usize>, width: f32, height: f32) -> Result<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ImposeError::InvalidSourcePage {
            index,
            width,
            height,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_a4_quadrants() {
        let rects = quadrant_rects(595.0, 842.0, 10.0).unwrap();

        assert_eq!(rects[0], Rect::new(10.0, 431.0, 287.5, 832.0));
        assert_eq!(rects[1], Rect::new(307.5, 431.0, 585.0, 832.0));
        assert_eq!(rects[2], Rect::new(10.0, 10.0, 287.5, 411.0));
        assert_eq!(rects[3], Rect::new(307.5, 10.0, 585.0, 411.0));
    }

    #[test]
    fn test_zero_margin_tiles_sheet() {
        let rects = quadrant_rects(400.0, 600.0, 0.0).unwrap();

        assert_eq!(rects[0], Rect::new(0.0, 300.0, 200.0, 600.0));
        assert_eq!(rects[3], Rect::new(200.0, 0.0, 400.0, 300.0));
        let area: f32 = rects.iter().map(|r| r.width() * r.height()).sum();
        assert!((area - 400.0 * 600.0).abs() < EPS);
    }

    #[test]
    fn test_quadrants_sit_in_their_corner() {
        let geometry = SheetGeometry::new(612.0, 792.0, 12.0).unwrap();

        for q in Quadrant::ALL {
            let rect = geometry.quadrant(q);
            assert!(rect.has_area());
            assert_eq!(rect.center_y() > 396.0, q.is_top(), "{:?}", q);
            assert_eq!(rect.center_x() < 306.0, q.is_left(), "{:?}", q);
        }
    }

    #[test]
    fn test_invalid_margins() {
        // 2 * margin must stay below half of each dimension
        assert!(matches!(
            quadrant_rects(595.0, 842.0, 148.75),
            Err(ImposeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            quadrant_rects(595.0, 842.0, -1.0),
            Err(ImposeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            quadrant_rects(595.0, 842.0, f32::NAN),
            Err(ImposeError::InvalidConfiguration(_))
        ));
        assert!(quadrant_rects(595.0, 842.0, 148.0).is_ok());
    }

    #[test]
    fn test_invalid_sheet_size() {
        assert!(matches!(
            SheetGeometry::new(0.0, 842.0, 10.0),
            Err(ImposeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SheetGeometry::new(595.0, -842.0, 10.0),
            Err(ImposeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_fit_portrait_into_top_left() {
        let target = Rect::new(10.0, 431.0, 287.5, 832.0);
        let fitted = fit_centered(300.0, 600.0, target).unwrap();

        let scale = fit_scale(300.0, 600.0, &target);
        assert!((scale - 401.0 / 600.0).abs() < 1e-6);
        assert!((scale - 0.6683).abs() < 1e-4);

        assert!(target.contains_rect(&fitted, EPS));
        assert!((fitted.height() - 401.0).abs() < EPS);
        assert!((fitted.width() - 300.0 * scale).abs() < EPS);

        // Height-limited: flush top and bottom, equal gaps left and right
        assert!((fitted.y0 - target.y0).abs() < EPS);
        assert!((fitted.y1 - target.y1).abs() < EPS);
        let left_gap = fitted.x0 - target.x0;
        let right_gap = target.x1 - fitted.x1;
        assert!((left_gap - right_gap).abs() < EPS);
    }

    #[test]
    fn test_fit_landscape_source() {
        let target = Rect::new(0.0, 0.0, 200.0, 300.0);
        let fitted = fit_centered(800.0, 600.0, target).unwrap();

        // Width-limited
        assert!((fitted.width() - 200.0).abs() < EPS);
        assert!((fitted.height() - 150.0).abs() < EPS);
        assert!((fitted.y0 - 75.0).abs() < EPS);
        assert!((fitted.center_x() - target.center_x()).abs() < EPS);
        assert!((fitted.center_y() - target.center_y()).abs() < EPS);
    }

    #[test]
    fn test_fit_upscales_small_pages() {
        let target = Rect::new(0.0, 0.0, 200.0, 200.0);
        let fitted = fit_centered(50.0, 100.0, target).unwrap();

        assert!((fitted.height() - 200.0).abs() < EPS);
        assert!((fitted.width() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        let target = Rect::new(307.5, 10.0, 585.0, 411.0);
        for &(w, h) in &[(612.0, 792.0), (842.0, 595.0), (1.0, 1000.0), (333.3, 0.5)] {
            let fitted = fit_centered(w, h, target).unwrap();
            let src_ratio = w / h;
            let out_ratio = fitted.width() / fitted.height();
            assert!(
                ((out_ratio - src_ratio) / src_ratio).abs() < 1e-5,
                "{} x {}: {} vs {}",
                w,
                h,
                out_ratio,
                src_ratio
            );
            assert!(target.contains_rect(&fitted, EPS));
        }
    }

    #[test]
    fn test_fit_rejects_degenerate_source() {
        let target = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert!(matches!(
            fit_centered(0.0, 100.0, target),
            Err(ImposeError::InvalidSourcePage { index: None, .. })
        ));
        assert!(matches!(
            fit_page(7, 100.0, -3.0, target),
            Err(ImposeError::InvalidSourcePage { index: Some(7), .. })
        ));
        assert!(fit_centered(f32::INFINITY, 100.0, target).is_err());
    }
}
