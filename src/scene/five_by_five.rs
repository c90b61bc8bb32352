use image::RgbaImage;

use crate::foundation::error::CollageResult;
use crate::layout::grid::{GridSpec, build_grid};
use crate::source::covers::CoverSet;

/// Unpadded 5x5 grid of `cell_size` covers.
pub fn five_by_five_spec(cell_size: u32, border: u32) -> GridSpec {
    GridSpec::new(5, 5, cell_size, border)
}

/// Render a plain grid with no labels.
pub fn render_five_by_five(covers: &CoverSet, spec: &GridSpec) -> CollageResult<RgbaImage> {
    build_grid(covers.images(), spec)
}
