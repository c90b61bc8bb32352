use crate::foundation::error::{CollageError, CollageResult};

/// Integer pixel position, origin at the top-left corner of a canvas.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelPoint {
    /// Horizontal offset in pixels.
    pub x: u32,
    /// Vertical offset in pixels.
    pub y: u32,
}

impl PixelPoint {
    /// Construct a point from its coordinates.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Integer pixel extent of a canvas or cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Construct a size from its extents.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of an existing RGBA canvas.
    pub fn of(image: &image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    /// `true` when either extent is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned pixel rectangle (`origin` inclusive, far edges exclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    /// Top-left corner.
    pub origin: PixelPoint,
    /// Extent.
    pub size: PixelSize,
}

impl PixelRect {
    /// Construct a rectangle from an origin and a size.
    pub const fn new(origin: PixelPoint, size: PixelSize) -> Self {
        Self { origin, size }
    }

    /// Exclusive right edge, widened so large canvases cannot overflow.
    pub fn right(self) -> u64 {
        u64::from(self.origin.x) + u64::from(self.size.width)
    }

    /// Exclusive bottom edge, widened so large canvases cannot overflow.
    pub fn bottom(self) -> u64 {
        u64::from(self.origin.y) + u64::from(self.size.height)
    }

    /// `true` when both rectangles share at least one pixel.
    pub fn intersects(self, other: PixelRect) -> bool {
        if self.size.is_empty() || other.size.is_empty() {
            return false;
        }
        u64::from(self.origin.x) < other.right()
            && u64::from(other.origin.x) < self.right()
            && u64::from(self.origin.y) < other.bottom()
            && u64::from(other.origin.y) < self.bottom()
    }
}

/// Narrow a widened pixel extent back to `u32`, failing on canvases no image buffer can hold.
pub(crate) fn extent_to_u32(v: u64, what: &str) -> CollageResult<u32> {
    u32::try_from(v).map_err(|_| CollageError::validation(format!("{what} {v} exceeds u32")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
