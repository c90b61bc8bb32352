use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{CollageError, CollageResult};
use crate::naming::label::AlbumLabeler;

/// List the regular files directly inside `dir`, in the order the filesystem yields them.
///
/// No sorting is applied; directory order decides grid placement and label order.
pub fn list_cover_files(dir: &Path) -> CollageResult<Vec<PathBuf>> {
    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("read cover directory '{}'", dir.display()))?;
    let mut out = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("list cover directory '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            out.push(path);
        }
    }
    Ok(out)
}

/// Fail with [`CollageError::InvalidGridShape`] unless exactly `expected` covers were found.
pub fn expect_cover_count(paths: &[PathBuf], expected: usize) -> CollageResult<()> {
    if paths.len() != expected {
        return Err(CollageError::invalid_grid_shape(expected, paths.len()));
    }
    Ok(())
}

/// Decode one cover file into straight-alpha RGBA8.
pub fn decode_cover(path: &Path) -> CollageResult<RgbaImage> {
    let img = image::open(path).with_context(|| format!("decode cover '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

/// File name without its final extension, lossily converted to UTF-8.
pub fn file_stem_lossy(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decoded covers with their display labels, index-aligned with each other.
///
/// Only [`CoverSet::load`] and [`CoverSet::from_parts`] build one, so `images` and `labels`
/// always have the same length.
#[derive(Clone, Debug, Default)]
pub struct CoverSet {
    paths: Vec<PathBuf>,
    images: Vec<RgbaImage>,
    labels: Vec<String>,
}

impl CoverSet {
    /// Decode every file in `paths` and label it with `labeler`.
    pub fn load(paths: Vec<PathBuf>, labeler: &AlbumLabeler) -> CollageResult<Self> {
        let mut images = Vec::with_capacity(paths.len());
        let mut labels = Vec::with_capacity(paths.len());
        for path in &paths {
            images.push(decode_cover(path)?);
            labels.push(labeler.label(&file_stem_lossy(path)));
        }
        tracing::debug!(covers = images.len(), "covers decoded");
        Ok(Self {
            paths,
            images,
            labels,
        })
    }

    /// Covers built in memory, e.g. by tests or callers that decode elsewhere.
    pub fn from_parts(images: Vec<RgbaImage>, labels: Vec<String>) -> CollageResult<Self> {
        if images.len() != labels.len() {
            return Err(CollageError::validation(format!(
                "{} covers but {} labels",
                images.len(),
                labels.len()
            )));
        }
        Ok(Self {
            paths: Vec::new(),
            images,
            labels,
        })
    }

    /// Source files in load order; empty for sets built with [`CoverSet::from_parts`].
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Decoded covers.
    pub fn images(&self) -> &[RgbaImage] {
        &self.images
    }

    /// Labels derived from each file stem.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of covers.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// `true` when no covers are loaded.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/covers.rs"]
mod tests;
