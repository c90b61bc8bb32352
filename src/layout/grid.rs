use std::collections::BTreeSet;

use image::{RgbaImage, imageops};

use crate::foundation::core::{PixelPoint, PixelRect, PixelSize, extent_to_u32};
use crate::foundation::error::{CollageError, CollageResult};

/// One edge of a grid that may receive outer padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Above the first row.
    Top,
    /// Below the last row.
    #[serde(alias = "bot")]
    Bottom,
    /// Left of the first column.
    Left,
    /// Right of the last column.
    Right,
    /// Shorthand for all four sides.
    All,
}

impl std::str::FromStr for Side {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" | "bot" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "all" => Ok(Self::All),
            other => Err(CollageError::validation(format!("unknown grid side '{other}'"))),
        }
    }
}

/// Which outer edges of a grid get one extra border width of spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PadSides {
    /// Pad above the first row.
    pub top: bool,
    /// Pad below the last row.
    pub bottom: bool,
    /// Pad left of the first column.
    pub left: bool,
    /// Pad right of the last column.
    pub right: bool,
}

impl PadSides {
    /// No outer padding.
    pub const NONE: Self = Self {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    /// Padding on every side.
    pub const ALL: Self = Self {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    /// Resolve an optional side list. `None` or an empty list means no padding, and
    /// [`Side::All`] anywhere in the list pads every side.
    pub fn from_sides(sides: Option<&[Side]>) -> Self {
        let Some(sides) = sides else {
            return Self::NONE;
        };
        if sides.contains(&Side::All) {
            return Self::ALL;
        }
        Self {
            top: sides.contains(&Side::Top),
            bottom: sides.contains(&Side::Bottom),
            left: sides.contains(&Side::Left),
            right: sides.contains(&Side::Right),
        }
    }

    /// Resolve side names, silently skipping any that are not recognized.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sides = names
            .into_iter()
            .filter_map(|n| n.as_ref().parse::<Side>().ok())
            .collect::<Vec<_>>();
        Self::from_sides(Some(sides.as_slice()))
    }

    fn count_horizontal(self) -> u64 {
        u64::from(self.left) + u64::from(self.right)
    }

    fn count_vertical(self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }
}

/// Extra spacing inserted before selected grid lines.
///
/// A line index `i` in `lines` shifts every cell whose index is `>= i` by `amount` pixels, so a
/// cell is pushed by `amount` times the number of listed lines at or before it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OffsetRule {
    /// Pixels added per listed line.
    pub amount: u32,
    /// Grid line indices (columns or rows) receiving the extra spacing.
    pub lines: BTreeSet<u32>,
}

impl OffsetRule {
    /// Build a rule from an amount and line indices.
    pub fn new(amount: u32, lines: impl IntoIterator<Item = u32>) -> Self {
        Self {
            amount,
            lines: lines.into_iter().collect(),
        }
    }

    /// Extra offset applied to the cell at `index`.
    pub fn extra_before(&self, index: u32) -> u64 {
        let n = self.lines.range(..=index).count() as u64;
        u64::from(self.amount) * n
    }

    /// Extra extent the rule adds to the whole grid.
    pub fn total(&self) -> u64 {
        u64::from(self.amount) * self.lines.len() as u64
    }

    fn validate(&self, limit: u32, axis: &str) -> CollageResult<()> {
        if let Some(&bad) = self.lines.iter().find(|&&i| i >= limit) {
            return Err(CollageError::validation(format!(
                "{axis} offset index {bad} is outside [0, {limit})"
            )));
        }
        Ok(())
    }
}

/// Declarative description of one fixed-cell grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Side length of every square cell, in pixels.
    pub cell_size: u32,
    /// Uniform spacing between neighbouring cells (and padded outer edges).
    pub border: u32,
    /// Outer edges that receive one border of padding.
    #[serde(default)]
    pub pad: PadSides,
    /// Extra spacing before selected columns.
    #[serde(default)]
    pub column_offset: OffsetRule,
    /// Extra spacing before selected rows.
    #[serde(default)]
    pub row_offset: OffsetRule,
}

impl GridSpec {
    /// Unpadded grid with no custom offsets.
    pub fn new(rows: u32, cols: u32, cell_size: u32, border: u32) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            border,
            pad: PadSides::NONE,
            column_offset: OffsetRule::default(),
            row_offset: OffsetRule::default(),
        }
    }

    /// Replace the outer padding.
    pub fn with_padding(mut self, pad: PadSides) -> Self {
        self.pad = pad;
        self
    }

    /// Add `amount` pixels before each listed column.
    pub fn with_column_offset(mut self, amount: u32, columns: impl IntoIterator<Item = u32>) -> Self {
        self.column_offset = OffsetRule::new(amount, columns);
        self
    }

    /// Add `amount` pixels before each listed row.
    pub fn with_row_offset(mut self, amount: u32, rows: impl IntoIterator<Item = u32>) -> Self {
        self.row_offset = OffsetRule::new(amount, rows);
        self
    }

    /// Number of images the grid holds.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }
}

/// Resolved geometry of a [`GridSpec`]: canvas size and the anchor of every cell.
#[derive(Clone, Debug)]
pub struct GridLayout {
    spec: GridSpec,
    canvas: PixelSize,
    anchors: Vec<PixelPoint>,
}

impl GridLayout {
    /// Validate `spec` and compute its geometry.
    pub fn new(spec: &GridSpec) -> CollageResult<Self> {
        if spec.rows == 0 || spec.cols == 0 {
            return Err(CollageError::validation(format!(
                "grid must have at least one row and column (got {}x{})",
                spec.rows, spec.cols
            )));
        }
        if spec.cell_size == 0 {
            return Err(CollageError::validation("grid cell_size must be > 0"));
        }
        spec.column_offset.validate(spec.cols, "column")?;
        spec.row_offset.validate(spec.rows, "row")?;

        let b = u64::from(spec.border);
        let d = u64::from(spec.cell_size);

        let width = axis_extent(
            spec.cols,
            spec.pad.count_horizontal(),
            spec,
            &spec.column_offset,
            "grid width",
        )?;
        let height = axis_extent(
            spec.rows,
            spec.pad.count_vertical(),
            spec,
            &spec.row_offset,
            "grid height",
        )?;
        // every anchor lies inside the canvas, so the sums below cannot overflow
        let canvas = PixelSize::new(
            extent_to_u32(width, "grid width")?,
            extent_to_u32(height, "grid height")?,
        );

        let mut anchors = Vec::with_capacity(spec.cell_count());
        for row in 0..spec.rows {
            let y = (u64::from(row) + u64::from(spec.pad.top)) * b
                + u64::from(row) * d
                + spec.row_offset.extra_before(row);
            for col in 0..spec.cols {
                let x = (u64::from(col) + u64::from(spec.pad.left)) * b
                    + u64::from(col) * d
                    + spec.column_offset.extra_before(col);
                anchors.push(PixelPoint::new(
                    extent_to_u32(x, "anchor x")?,
                    extent_to_u32(y, "anchor y")?,
                ));
            }
        }

        Ok(Self {
            spec: spec.clone(),
            canvas,
            anchors,
        })
    }

    /// Spec this layout was resolved from.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Size of the transparent canvas the grid is drawn on.
    pub fn canvas_size(&self) -> PixelSize {
        self.canvas
    }

    /// Anchor of the cell at `(row, col)`, or `None` outside the grid.
    pub fn anchor(&self, row: u32, col: u32) -> Option<PixelPoint> {
        if row >= self.spec.rows || col >= self.spec.cols {
            return None;
        }
        let idx = (row as usize) * (self.spec.cols as usize) + col as usize;
        self.anchors.get(idx).copied()
    }

    /// Anchors of all cells in row-major order.
    pub fn anchors(&self) -> &[PixelPoint] {
        &self.anchors
    }

    /// Pixel bounds of the cell at `(row, col)`.
    pub fn cell_rect(&self, row: u32, col: u32) -> Option<PixelRect> {
        let side = self.spec.cell_size;
        self.anchor(row, col)
            .map(|origin| PixelRect::new(origin, PixelSize::new(side, side)))
    }
}

/// `((count - 1) + pads) * border + count * cell_size + offsets`, or a validation error when it
/// does not fit in `u64`.
fn axis_extent(
    count: u32,
    pads: u64,
    spec: &GridSpec,
    offset: &OffsetRule,
    what: &str,
) -> CollageResult<u64> {
    let n = u64::from(count);
    (n - 1 + pads)
        .checked_mul(u64::from(spec.border))
        .and_then(|gaps| gaps.checked_add(n.checked_mul(u64::from(spec.cell_size))?))
        .and_then(|v| v.checked_add(offset.total()))
        .ok_or_else(|| CollageError::validation(format!("{what} overflows")))
}

/// Resize every image to `spec.cell_size` and paste it at its anchor on a new transparent
/// canvas. Images are consumed in row-major order.
#[tracing::instrument(skip(images, spec), fields(rows = spec.rows, cols = spec.cols, cell = spec.cell_size))]
pub fn build_grid(images: &[RgbaImage], spec: &GridSpec) -> CollageResult<RgbaImage> {
    if images.len() != spec.cell_count() {
        return Err(CollageError::invalid_grid_shape(
            spec.cell_count(),
            images.len(),
        ));
    }
    let layout = GridLayout::new(spec)?;
    let size = layout.canvas_size();
    tracing::debug!(width = size.width, height = size.height, "grid canvas");

    let d = spec.cell_size;
    let mut canvas = RgbaImage::new(size.width, size.height);
    for (img, anchor) in images.iter().zip(layout.anchors()) {
        let (x, y) = (i64::from(anchor.x), i64::from(anchor.y));
        if img.dimensions() == (d, d) {
            imageops::replace(&mut canvas, img, x, y);
        } else {
            let cell = imageops::resize(img, d, d, imageops::FilterType::CatmullRom);
            imageops::replace(&mut canvas, &cell, x, y);
        }
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
