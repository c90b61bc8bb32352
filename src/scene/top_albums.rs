use image::RgbaImage;

use crate::compose::assembler::{
    Placement, assemble, assemble_with_extent, ensure_total_height, ensure_uniform_widths,
    vertical_placements,
};
use crate::foundation::core::{PixelPoint, PixelSize, extent_to_u32};
use crate::foundation::error::{CollageError, CollageResult};
use crate::layout::grid::{GridSpec, PadSides, Side, build_grid};
use crate::source::covers::CoverSet;
use crate::text::column::{TextColumnSpec, TextRasterizer};

/// One tier of the collage: a grid and the label column rendered beside it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tier {
    /// Grid holding this tier's covers; its cell count decides how many covers it takes.
    pub grid: GridSpec,
    /// Label column for the same covers.
    pub text: TextColumnSpec,
}

/// Three stacked tiers of shrinking covers with a label column on the right.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TopAlbumsLayout {
    /// Tiers from top to bottom. Grids must share one width.
    pub tiers: Vec<Tier>,
    /// Margin left and right of the stacked grids and below the last one.
    pub margin: u32,
}

impl Default for TopAlbumsLayout {
    fn default() -> Self {
        const TEXT_WIDTH: u32 = 940;
        const FONT_SIZE_PX: f32 = 40.0;
        let column = |height: u32, y: u32| {
            TextColumnSpec::new(
                PixelSize::new(TEXT_WIDTH, height),
                PixelPoint::new(10, y),
                FONT_SIZE_PX,
            )
        };

        Self {
            tiers: vec![
                Tier {
                    grid: GridSpec::new(2, 5, 600, 10)
                        .with_padding(PadSides::from_sides(Some(&[Side::Top, Side::Bottom][..]))),
                    text: column(1220, 10),
                },
                Tier {
                    grid: GridSpec::new(2, 6, 500, 8)
                        .with_padding(PadSides::from_sides(Some(&[Side::Bottom][..]))),
                    text: column(657, 10),
                },
                Tier {
                    // columns paired two by two
                    grid: GridSpec::new(2, 10, 300, 4).with_column_offset(1, [2, 4, 6, 8]),
                    text: column(983, 8),
                },
            ],
            margin: 10,
        }
    }
}

impl TopAlbumsLayout {
    /// Total number of covers consumed by all tiers.
    pub fn cover_count(&self) -> usize {
        self.tiers.iter().map(|t| t.grid.cell_count()).sum()
    }

    /// Use `color` for every tier's labels.
    pub fn with_text_color(mut self, color: [u8; 4]) -> Self {
        for tier in &mut self.tiers {
            tier.text.color_rgba8 = color;
        }
        self
    }
}

/// Stack the tiers' grids with a margin, then attach the tiers' label columns on the right.
#[tracing::instrument(skip_all, fields(covers = covers.len(), tiers = layout.tiers.len()))]
pub fn render_top_albums(
    covers: &CoverSet,
    layout: &TopAlbumsLayout,
    text: &mut dyn TextRasterizer,
) -> CollageResult<RgbaImage> {
    let expected = layout.cover_count();
    if covers.len() != expected {
        return Err(CollageError::invalid_grid_shape(expected, covers.len()));
    }

    let mut grids = Vec::with_capacity(layout.tiers.len());
    let mut columns = Vec::with_capacity(layout.tiers.len());
    let mut start = 0;
    for tier in &layout.tiers {
        let end = start + tier.grid.cell_count();
        grids.push(build_grid(&covers.images()[start..end], &tier.grid)?);
        columns.push(text.render_column(&covers.labels()[start..end], &tier.text)?);
        start = end;
    }

    let grid_refs = grids.iter().collect::<Vec<_>>();
    let grid_width = ensure_uniform_widths(&grid_refs)?;
    let mut placements = vertical_placements(&grid_refs)?;
    for p in &mut placements {
        p.position.x = layout.margin;
    }
    let stacked_height = grids.iter().map(|g| u64::from(g.height())).sum::<u64>();
    let margin = u64::from(layout.margin);
    let super_grid = assemble_with_extent(
        PixelSize::new(
            extent_to_u32(u64::from(grid_width) + 2 * margin, "collage width")?,
            extent_to_u32(stacked_height + margin, "collage height")?,
        ),
        &placements,
    );
    tracing::debug!(
        width = super_grid.width(),
        height = super_grid.height(),
        "tiers stacked"
    );

    let column_refs = columns.iter().collect::<Vec<_>>();
    ensure_total_height(&column_refs, super_grid.height())?;
    let mut parts = vec![Placement::at(&super_grid, 0, 0)];
    for mut p in vertical_placements(&column_refs)? {
        p.position.x = super_grid.width();
        parts.push(p);
    }
    assemble(&parts)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/top_albums.rs"]
mod tests;
