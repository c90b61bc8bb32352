use super::*;

fn rect(x: u32, y: u32, w: u32, h: u32) -> PixelRect {
    PixelRect::new(PixelPoint::new(x, y), PixelSize::new(w, h))
}

#[test]
fn touching_rects_do_not_intersect() {
    let a = rect(0, 0, 10, 10);
    assert!(!a.intersects(rect(10, 0, 10, 10)));
    assert!(!a.intersects(rect(0, 10, 10, 10)));
    assert!(a.intersects(rect(9, 9, 10, 10)));
}

#[test]
fn empty_rect_never_intersects() {
    assert!(!rect(0, 0, 0, 10).intersects(rect(0, 0, 10, 10)));
}

#[test]
fn edges_are_widened() {
    let r = rect(u32::MAX, u32::MAX, 2, 3);
    assert_eq!(r.right(), u64::from(u32::MAX) + 2);
    assert_eq!(r.bottom(), u64::from(u32::MAX) + 3);
    assert!(extent_to_u32(r.right(), "width").is_err());
    assert_eq!(extent_to_u32(7, "width").unwrap(), 7);
}

#[test]
fn size_of_image_matches_dimensions() {
    let img = image::RgbaImage::new(3, 5);
    assert_eq!(PixelSize::of(&img), PixelSize::new(3, 5));
    assert!(!PixelSize::of(&img).is_empty());
    assert!(PixelSize::new(0, 5).is_empty());
}
