use super::*;

#[test]
fn output_path_uses_tag_and_timestamp() {
    assert_eq!(
        output_path(Path::new("output/grids"), "full", 1_700_000_000),
        PathBuf::from("output/grids/full-1700000000.png")
    );
}

#[test]
fn timestamp_is_after_2020() {
    assert!(unix_timestamp().unwrap() > 1_577_836_800);
}

#[test]
fn save_png_creates_parents_and_round_trips_pixels() {
    let dir = std::env::temp_dir().join(format!(
        "coverwall_save_png_{}_{}",
        std::process::id(),
        unix_timestamp().unwrap()
    ));
    let path = output_path(&dir.join("nested"), "grid", 42);

    let mut img = RgbaImage::new(3, 2);
    img.put_pixel(2, 1, image::Rgba([10, 20, 30, 40]));
    save_png(&img, &path).unwrap();

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (3, 2));
    assert_eq!(back.get_pixel(2, 1).0, [10, 20, 30, 40]);
    assert_eq!(back.get_pixel(0, 0).0, [0, 0, 0, 0]);
}
