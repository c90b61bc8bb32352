use image::RgbaImage;

use crate::compose::assembler::{Placement, assemble_with_extent};
use crate::foundation::core::{PixelPoint, PixelSize, extent_to_u32};
use crate::foundation::error::CollageResult;
use crate::layout::grid::{GridSpec, PadSides, build_grid};
use crate::source::covers::CoverSet;
use crate::text::column::{TextColumnSpec, TextRasterizer};

/// A fully padded 9x9 grid with one wide label column to its right.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FirstListensLayout {
    /// Cover grid.
    pub grid: GridSpec,
    /// Width of the label column.
    pub text_width: u32,
    /// Label font size in pixels.
    pub font_size_px: f32,
    /// Straight RGBA8 label color.
    pub text_color_rgba8: [u8; 4],
}

impl FirstListensLayout {
    /// Layout for `cell_size` covers separated (and surrounded) by `border` pixels.
    pub fn new(cell_size: u32, border: u32) -> Self {
        Self {
            grid: GridSpec::new(9, 9, cell_size, border).with_padding(PadSides::ALL),
            text_width: 2000,
            font_size_px: 48.0,
            text_color_rgba8: [255, 255, 255, 255],
        }
    }

    /// Replace the label color.
    pub fn with_text_color(mut self, color: [u8; 4]) -> Self {
        self.text_color_rgba8 = color;
        self
    }
}

impl Default for FirstListensLayout {
    fn default() -> Self {
        Self::new(500, 10)
    }
}

/// Render the grid, then place every label in one column starting one border in from the grid's
/// right edge. The canvas is exactly `grid width + text width` wide and grid-tall; overflow is
/// clipped.
#[tracing::instrument(skip_all, fields(covers = covers.len(), cell = layout.grid.cell_size))]
pub fn render_first_listens(
    covers: &CoverSet,
    layout: &FirstListensLayout,
    text: &mut dyn TextRasterizer,
) -> CollageResult<RgbaImage> {
    let grid = build_grid(covers.images(), &layout.grid)?;
    let border = layout.grid.border;

    let column_spec = TextColumnSpec::new(
        PixelSize::new(layout.text_width, grid.height()),
        PixelPoint::new(border, border),
        layout.font_size_px,
    )
    .with_color(layout.text_color_rgba8);
    let column = text.render_column(covers.labels(), &column_spec)?;

    let extent = PixelSize::new(
        extent_to_u32(
            u64::from(grid.width()) + u64::from(layout.text_width),
            "collage width",
        )?,
        grid.height(),
    );
    let column_x = extent_to_u32(u64::from(grid.width()) + u64::from(border), "label x")?;
    Ok(assemble_with_extent(
        extent,
        &[
            Placement::at(&grid, 0, 0),
            Placement::at(&column, column_x, border),
        ],
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/first_listens.rs"]
mod tests;
