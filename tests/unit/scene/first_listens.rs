use super::*;

use crate::foundation::error::CollageError;
use crate::scene::tests::{BLUE, RED, StubText, solid_covers};

fn tiny_layout() -> FirstListensLayout {
    FirstListensLayout {
        text_width: 5,
        ..FirstListensLayout::new(2, 1)
    }
}

#[test]
fn stock_layout() {
    let layout = FirstListensLayout::default();
    assert_eq!(layout.grid.cell_count(), 81);
    assert_eq!(layout.grid.pad, PadSides::ALL);
    assert_eq!(layout.text_width, 2000);
    assert_eq!(layout.font_size_px, 48.0);
}

#[test]
fn label_column_sits_one_border_right_of_the_grid_and_is_clipped() {
    let mut text = StubText::default();
    let img = render_first_listens(&solid_covers(&[2; 81]), &tiny_layout(), &mut text).unwrap();

    // padded 9x9 grid of 2px cells is 28x28; canvas adds only the text width
    assert_eq!(img.dimensions(), (33, 28));
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(*img.get_pixel(1, 1), RED);
    assert_eq!(*img.get_pixel(26, 26), RED);
    assert_eq!(img.get_pixel(28, 1).0[3], 0);
    assert_eq!(*img.get_pixel(29, 1), BLUE);
    assert_eq!(*img.get_pixel(32, 27), BLUE);
    assert_eq!(img.get_pixel(29, 0).0[3], 0);
}

#[test]
fn all_labels_go_into_one_column() {
    let mut text = StubText::default();
    render_first_listens(&solid_covers(&[2; 81]), &tiny_layout(), &mut text).unwrap();

    assert_eq!(text.calls.len(), 1);
    let (lines, spec) = &text.calls[0];
    assert_eq!(lines.len(), 81);
    assert_eq!(lines[80], "album 80");
    assert_eq!(spec.size, PixelSize::new(5, 28));
    assert_eq!(spec.offset, PixelPoint::new(1, 1));
    assert_eq!(spec.font_size_px, 48.0);
}

#[test]
fn wrong_count_is_rejected() {
    let err = render_first_listens(
        &solid_covers(&[2; 80]),
        &tiny_layout(),
        &mut StubText::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CollageError::InvalidGridShape {
            expected: 81,
            actual: 80
        }
    ));
}
