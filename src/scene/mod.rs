pub(crate) mod first_listens;
pub(crate) mod five_by_five;
pub(crate) mod top_albums;

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::config::CollageConfig;
use crate::foundation::error::{CollageError, CollageResult};
use crate::layout::grid::GridSpec;
use crate::output::{output_path, save_png, unix_timestamp};
use crate::source::covers::{CoverSet, expect_cover_count, list_cover_files};
use crate::text::column::TextRasterizer;

use first_listens::{FirstListensLayout, render_first_listens};
use five_by_five::{five_by_five_spec, render_five_by_five};
use top_albums::{TopAlbumsLayout, render_top_albums};

/// One of the fixed collage shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
    /// 25 covers, no labels.
    FiveByFive(GridSpec),
    /// 42 covers in three tiers with label columns.
    TopAlbums(TopAlbumsLayout),
    /// 81 covers with one label column.
    FirstListens(FirstListensLayout),
}

impl Scene {
    /// Plain 5x5 grid.
    pub fn five_by_five(cell_size: u32, border: u32) -> Self {
        Self::FiveByFive(five_by_five_spec(cell_size, border))
    }

    /// Three-tier collage with its stock geometry.
    pub fn top_albums() -> Self {
        Self::TopAlbums(TopAlbumsLayout::default())
    }

    /// Padded 9x9 grid with a label column.
    pub fn first_listens(cell_size: u32, border: u32) -> Self {
        Self::FirstListens(FirstListensLayout::new(cell_size, border))
    }

    /// Number of covers the input directory must hold.
    pub fn expected_covers(&self) -> usize {
        match self {
            Self::FiveByFive(spec) => spec.cell_count(),
            Self::TopAlbums(layout) => layout.cover_count(),
            Self::FirstListens(layout) => layout.grid.cell_count(),
        }
    }

    /// Whether rendering draws labels.
    pub fn needs_text(&self) -> bool {
        !matches!(self, Self::FiveByFive(_))
    }

    /// Prefix of the output file name. Plain grids are named after their input directory.
    pub fn output_tag(&self, input_dir: &Path) -> String {
        match self {
            Self::FiveByFive(_) => input_dir
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "grid".to_string()),
            Self::TopAlbums(_) => "full".to_string(),
            Self::FirstListens(_) => "first-listens-full".to_string(),
        }
    }

    /// Use `color` for all label text.
    pub fn with_text_color(self, color: [u8; 4]) -> Self {
        match self {
            Self::FiveByFive(spec) => Self::FiveByFive(spec),
            Self::TopAlbums(layout) => Self::TopAlbums(layout.with_text_color(color)),
            Self::FirstListens(layout) => Self::FirstListens(layout.with_text_color(color)),
        }
    }

    /// Render the scene from already-loaded covers.
    ///
    /// `text` may be `None` only for scenes where [`Scene::needs_text`] is false.
    pub fn render(
        &self,
        covers: &CoverSet,
        text: Option<&mut dyn TextRasterizer>,
    ) -> CollageResult<RgbaImage> {
        let expected = self.expected_covers();
        if covers.len() != expected {
            return Err(CollageError::invalid_grid_shape(expected, covers.len()));
        }
        match self {
            Self::FiveByFive(spec) => render_five_by_five(covers, spec),
            Self::TopAlbums(layout) => render_top_albums(covers, layout, require_text(text)?),
            Self::FirstListens(layout) => {
                render_first_listens(covers, layout, require_text(text)?)
            }
        }
    }
}

fn require_text(text: Option<&mut dyn TextRasterizer>) -> CollageResult<&mut dyn TextRasterizer> {
    text.ok_or_else(|| CollageError::validation("scene draws labels but no text renderer was given"))
}

/// Options for [`run_scene`] that do not belong to the scene itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// Sort the directory listing by file name before loading.
    pub sorted: bool,
}

/// List, load, render and save one scene; returns the written PNG path.
///
/// Nothing is written unless every step before saving succeeds.
#[tracing::instrument(skip(scene, input_dir, config, text), fields(dir = %input_dir.display()))]
pub fn run_scene(
    scene: &Scene,
    input_dir: &Path,
    config: &CollageConfig,
    opts: RunOptions,
    text: Option<&mut dyn TextRasterizer>,
) -> CollageResult<PathBuf> {
    let mut paths = list_cover_files(input_dir)?;
    if opts.sorted {
        paths.sort();
    }
    expect_cover_count(&paths, scene.expected_covers())?;

    let labeler = config.labeler()?;
    let covers = CoverSet::load(paths, &labeler)?;
    let image = scene
        .clone()
        .with_text_color(config.text_color_rgba8)
        .render(&covers, text)?;

    let path = output_path(
        &config.output_dir,
        &scene.output_tag(input_dir),
        unix_timestamp()?,
    );
    save_png(&image, &path)?;
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mod.rs"]
mod tests;
