use cutstack_impose::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A3.dimensions_pt(), (842.0, 1191.0));
    assert_eq!(PaperSize::A4.dimensions_pt(), (595.0, 842.0));
    assert_eq!(PaperSize::A5.dimensions_pt(), (420.0, 595.0));
    assert_eq!(PaperSize::Letter.dimensions_pt(), (612.0, 792.0));
    assert_eq!(PaperSize::Legal.dimensions_pt(), (612.0, 1008.0));
    assert_eq!(PaperSize::Tabloid.dimensions_pt(), (792.0, 1224.0));

    let custom = PaperSize::Custom {
        width_pt: 100.0,
        height_pt: 200.0,
    };
    assert_eq!(custom.dimensions_pt(), (100.0, 200.0));
}

#[test]
fn test_paper_size_with_orientation() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (595.0, 842.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (842.0, 595.0)
    );
}

#[test]
fn test_layout_mode_sides() {
    assert_eq!(LayoutMode::default(), LayoutMode::SingleSided);
    assert_eq!(LayoutMode::SingleSided.sides_per_sheet(), 1);
    assert_eq!(LayoutMode::DoubleSided.sides_per_sheet(), 2);
    assert_eq!(LayoutMode::DoubleSidedMirrored.sides_per_sheet(), 2);
    assert!(!LayoutMode::SingleSided.is_duplex());
    assert!(LayoutMode::DoubleSidedMirrored.is_duplex());
}

#[test]
fn test_quadrant_order_and_mirroring() {
    for (index, quadrant) in Quadrant::ALL.iter().enumerate() {
        assert_eq!(quadrant.index(), index);
        assert_eq!(quadrant.mirrored().mirrored(), *quadrant);
        assert_eq!(quadrant.mirrored().is_top(), quadrant.is_top());
        assert_ne!(quadrant.mirrored().is_left(), quadrant.is_left());
    }
    assert_eq!(Quadrant::TopLeft.mirrored(), Quadrant::TopRight);
    assert_eq!(Quadrant::BottomRight.mirrored(), Quadrant::BottomLeft);
}

#[test]
fn test_mm_conversion() {
    use cutstack_impose::constants::{mm_to_pt, pt_to_mm};

    assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-4);
    assert!((pt_to_mm(mm_to_pt(5.0)) - 5.0).abs() < 1e-4);
}

#[test]
fn test_error_messages() {
    let err = ImposeError::InvalidSourcePage {
        index: Some(3),
        width: 0.0,
        height: 792.0,
    };
    assert_eq!(err.to_string(), "Invalid source page 3: size 0 x 792");

    let err = ImposeError::InvalidSourcePage {
        index: None,
        width: -1.0,
        height: 10.0,
    };
    assert_eq!(err.to_string(), "Invalid source page: size -1 x 10");

    let err = ImposeError::InvalidInput("document has no pages".to_string());
    assert!(err.to_string().contains("no pages"));
}
