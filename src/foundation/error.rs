/// Convenience result type used across coverwall.
pub type CollageResult<T> = Result<T, CollageError>;

/// Top-level error taxonomy used by layout, assembly and scene APIs.
#[derive(thiserror::Error, Debug)]
pub enum CollageError {
    /// The number of supplied images does not fill the declared grid exactly.
    #[error("invalid grid shape: expected {expected} images, got {actual}")]
    InvalidGridShape {
        /// `rows * cols` of the declared grid.
        expected: usize,
        /// Number of images actually supplied.
        actual: usize,
    },

    /// Canvases that must line up (stacked grids, paired text columns) disagree in size.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Invalid user-provided layout or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CollageError {
    /// Build a [`CollageError::InvalidGridShape`] value.
    pub fn invalid_grid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidGridShape { expected, actual }
    }

    /// Build a [`CollageError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`CollageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
