use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = CollageConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, CollageConfig::default());
    assert_eq!(cfg.output_dir, PathBuf::from("output/grids"));
    assert_eq!(cfg.album_label_format, "{name} ({year})");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = CollageConfig::from_json_str(
        r#"{"output_dir":"renders","album_label_format":"{year} - {name}"}"#,
    )
    .unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("renders"));
    assert_eq!(cfg.font_file, CollageConfig::default().font_file);
    assert_eq!(
        cfg.labeler().unwrap().label("01 [1997-05-21] OK Computer"),
        "1997 - OK Computer"
    );
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(matches!(
        CollageConfig::from_json_str(r#"{"outptu_dir":"x"}"#),
        Err(CollageError::Validation(_))
    ));
}

#[test]
fn bad_pattern_surfaces_when_building_labeler() {
    let cfg = CollageConfig {
        album_name_pattern: r"\[(\d{4})\] (.*)".to_string(),
        ..CollageConfig::default()
    };
    assert!(cfg.labeler().is_err());
}

#[test]
fn missing_font_file_is_an_error() {
    let cfg = CollageConfig {
        font_file: PathBuf::from("does/not/exist.ttf"),
        ..CollageConfig::default()
    };
    assert!(cfg.text_renderer().is_err());
}

#[test]
fn missing_config_file_is_an_error() {
    assert!(CollageConfig::from_json_path(Path::new("does/not/exist.json")).is_err());
}
