use image::Rgba;

use super::*;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(rgba))
}

#[test]
fn stacking_mismatched_widths_fails() {
    let a = solid(100, 10, [1, 0, 0, 255]);
    let b = solid(100, 10, [2, 0, 0, 255]);
    let c = solid(200, 10, [3, 0, 0, 255]);
    let err = stack_vertical(&[&a, &b, &c]).unwrap_err();
    assert!(matches!(err, CollageError::DimensionMismatch(_)));
}

#[test]
fn stacking_equal_widths_keeps_pixels_at_cumulative_offsets() {
    let a = solid(100, 50, [255, 0, 0, 255]);
    let b = solid(100, 60, [0, 255, 0, 255]);
    let c = solid(100, 70, [0, 0, 255, 255]);

    let placements = vertical_placements(&[&a, &b, &c]).unwrap();
    let ys = placements.iter().map(|p| p.position.y).collect::<Vec<_>>();
    assert_eq!(ys, vec![0, 50, 110]);

    let out = stack_vertical(&[&a, &b, &c]).unwrap();
    assert_eq!(out.dimensions(), (100, 180));
    assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(99, 49).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(0, 50).0, [0, 255, 0, 255]);
    assert_eq!(out.get_pixel(50, 109).0, [0, 255, 0, 255]);
    assert_eq!(out.get_pixel(0, 110).0, [0, 0, 255, 255]);
    assert_eq!(out.get_pixel(99, 179).0, [0, 0, 255, 255]);
}

#[test]
fn stacking_horizontally_requires_equal_heights() {
    let a = solid(10, 20, [1, 1, 1, 255]);
    let b = solid(30, 20, [2, 2, 2, 255]);
    let out = stack_horizontal(&[&a, &b]).unwrap();
    assert_eq!(out.dimensions(), (40, 20));
    assert_eq!(out.get_pixel(10, 0).0, [2, 2, 2, 255]);

    let c = solid(5, 21, [3, 3, 3, 255]);
    assert!(matches!(
        stack_horizontal(&[&a, &c]),
        Err(CollageError::DimensionMismatch(_))
    ));
}

#[test]
fn assemble_bounds_all_parts_and_leaves_gaps_transparent() {
    let a = solid(4, 4, [9, 9, 9, 255]);
    let b = solid(2, 6, [7, 7, 7, 255]);
    let out = assemble(&[Placement::at(&a, 1, 2), Placement::at(&b, 10, 0)]).unwrap();
    assert_eq!(out.dimensions(), (12, 6));
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(1, 2).0, [9, 9, 9, 255]);
    assert_eq!(out.get_pixel(6, 3).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(11, 5).0, [7, 7, 7, 255]);
}

#[test]
fn later_parts_overwrite_earlier_ones() {
    let a = solid(4, 4, [1, 1, 1, 255]);
    let b = solid(2, 2, [0, 0, 0, 0]);
    let out = assemble(&[Placement::at(&a, 0, 0), Placement::at(&b, 1, 1)]).unwrap();
    // paste replaces, it does not blend
    assert_eq!(out.get_pixel(1, 1).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(3, 3).0, [1, 1, 1, 255]);
}

#[test]
fn explicit_extent_clips_and_pads() {
    let a = solid(10, 10, [5, 5, 5, 255]);
    let out = assemble_with_extent(PixelSize::new(8, 20), &[Placement::at(&a, 2, 2)]);
    assert_eq!(out.dimensions(), (8, 20));
    assert_eq!(out.get_pixel(7, 11).0, [5, 5, 5, 255]);
    assert_eq!(out.get_pixel(7, 12).0, [0, 0, 0, 0]);
}

#[test]
fn empty_inputs_are_degenerate_but_valid() {
    assert_eq!(assemble(&[]).unwrap().dimensions(), (0, 0));
    assert_eq!(ensure_uniform_widths(&[]).unwrap(), 0);
}

#[test]
fn total_height_check() {
    let a = solid(1, 1220, [0, 0, 0, 0]);
    let b = solid(1, 657, [0, 0, 0, 0]);
    let c = solid(1, 983, [0, 0, 0, 0]);
    ensure_total_height(&[&a, &b, &c], 2860).unwrap();
    assert!(matches!(
        ensure_total_height(&[&a, &b], 2860),
        Err(CollageError::DimensionMismatch(_))
    ));
}
