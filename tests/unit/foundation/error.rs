use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CollageError::invalid_grid_shape(42, 41)
            .to_string()
            .contains("invalid grid shape:")
    );
    assert!(
        CollageError::dimension_mismatch("x")
            .to_string()
            .contains("dimension mismatch:")
    );
    assert!(
        CollageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn invalid_grid_shape_reports_both_counts() {
    let msg = CollageError::invalid_grid_shape(42, 41).to_string();
    assert!(msg.contains("42"));
    assert!(msg.contains("41"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CollageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
