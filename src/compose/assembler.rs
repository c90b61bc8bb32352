use image::{RgbaImage, imageops};

use crate::foundation::core::{PixelPoint, PixelRect, PixelSize, extent_to_u32};
use crate::foundation::error::{CollageError, CollageResult};

/// A sub-canvas and the position it is pasted at inside the assembled canvas.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    /// Pixels to paste. Never modified.
    pub canvas: &'a RgbaImage,
    /// Top-left corner inside the parent canvas.
    pub position: PixelPoint,
}

impl<'a> Placement<'a> {
    /// Place `canvas` with its top-left corner at `(x, y)`.
    pub fn at(canvas: &'a RgbaImage, x: u32, y: u32) -> Self {
        Self {
            canvas,
            position: PixelPoint::new(x, y),
        }
    }

    /// Pixel bounds covered by this placement.
    pub fn rect(&self) -> PixelRect {
        PixelRect::new(self.position, PixelSize::of(self.canvas))
    }
}

/// Smallest extent (anchored at the origin) that contains every placement.
pub fn bounding_extent(parts: &[Placement<'_>]) -> CollageResult<PixelSize> {
    let right = parts.iter().map(|p| p.rect().right()).max().unwrap_or(0);
    let bottom = parts.iter().map(|p| p.rect().bottom()).max().unwrap_or(0);
    Ok(PixelSize::new(
        extent_to_u32(right, "assembled width")?,
        extent_to_u32(bottom, "assembled height")?,
    ))
}

/// Paste `parts` in order onto the minimal transparent canvas bounding all of them.
///
/// Positions are trusted: overlapping parts are not detected and later parts win.
#[tracing::instrument(skip(parts), fields(parts = parts.len()))]
pub fn assemble(parts: &[Placement<'_>]) -> CollageResult<RgbaImage> {
    let extent = bounding_extent(parts)?;
    Ok(assemble_with_extent(extent, parts))
}

/// Paste `parts` in order onto a transparent canvas of exactly `extent`.
///
/// Anything extending past `extent` is clipped.
pub fn assemble_with_extent(extent: PixelSize, parts: &[Placement<'_>]) -> RgbaImage {
    tracing::debug!(width = extent.width, height = extent.height, "assembling canvas");
    let mut out = RgbaImage::new(extent.width, extent.height);
    for part in parts {
        imageops::replace(
            &mut out,
            part.canvas,
            i64::from(part.position.x),
            i64::from(part.position.y),
        );
    }
    out
}

/// Check every canvas has the same width and return it (`0` for an empty list).
pub fn ensure_uniform_widths(canvases: &[&RgbaImage]) -> CollageResult<u32> {
    ensure_uniform(canvases, "width", |c| c.width())
}

/// Check every canvas has the same height and return it (`0` for an empty list).
pub fn ensure_uniform_heights(canvases: &[&RgbaImage]) -> CollageResult<u32> {
    ensure_uniform(canvases, "height", |c| c.height())
}

fn ensure_uniform(
    canvases: &[&RgbaImage],
    axis: &str,
    extent: impl Fn(&RgbaImage) -> u32,
) -> CollageResult<u32> {
    let Some(first) = canvases.first() else {
        return Ok(0);
    };
    let expected = extent(*first);
    for (idx, c) in canvases.iter().enumerate().skip(1) {
        let got = extent(*c);
        if got != expected {
            return Err(CollageError::dimension_mismatch(format!(
                "canvas {idx} has {axis} {got}, expected {expected}"
            )));
        }
    }
    Ok(expected)
}

/// Check the canvases, stacked along one axis, add up to exactly `expected` pixels tall.
pub fn ensure_total_height(canvases: &[&RgbaImage], expected: u32) -> CollageResult<()> {
    let total = canvases.iter().map(|c| u64::from(c.height())).sum::<u64>();
    if total != u64::from(expected) {
        return Err(CollageError::dimension_mismatch(format!(
            "stacked height {total} does not match {expected}"
        )));
    }
    Ok(())
}

/// Top-to-bottom placements for canvases of equal width, each directly below the previous.
pub fn vertical_placements<'a>(canvases: &[&'a RgbaImage]) -> CollageResult<Vec<Placement<'a>>> {
    ensure_uniform_widths(canvases)?;
    let mut y = 0u64;
    let mut out = Vec::with_capacity(canvases.len());
    for &c in canvases {
        out.push(Placement::at(c, 0, extent_to_u32(y, "stack offset")?));
        y += u64::from(c.height());
    }
    Ok(out)
}

/// Left-to-right placements for canvases of equal height, each directly right of the previous.
pub fn horizontal_placements<'a>(
    canvases: &[&'a RgbaImage],
) -> CollageResult<Vec<Placement<'a>>> {
    ensure_uniform_heights(canvases)?;
    let mut x = 0u64;
    let mut out = Vec::with_capacity(canvases.len());
    for &c in canvases {
        out.push(Placement::at(c, extent_to_u32(x, "stack offset")?, 0));
        x += u64::from(c.width());
    }
    Ok(out)
}

/// Stack equal-width canvases vertically.
pub fn stack_vertical(canvases: &[&RgbaImage]) -> CollageResult<RgbaImage> {
    assemble(&vertical_placements(canvases)?)
}

/// Stack equal-height canvases horizontally.
pub fn stack_horizontal(canvases: &[&RgbaImage]) -> CollageResult<RgbaImage> {
    assemble(&horizontal_placements(canvases)?)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/assembler.rs"]
mod tests;
