use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{CollageError, CollageResult};
use crate::naming::label::{AlbumLabeler, DEFAULT_ALBUM_LABEL_FORMAT, DEFAULT_ALBUM_NAME_PATTERN};
use crate::text::column::TextColumnRenderer;

/// Process-wide settings, loaded once and passed explicitly to whatever needs them.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollageConfig {
    /// Directory rendered PNGs are written to.
    pub output_dir: PathBuf,
    /// TrueType/OpenType font used for label columns.
    pub font_file: PathBuf,
    /// Filename pattern with `name` and `year` groups.
    pub album_name_pattern: String,
    /// Label template with `{name}` and `{year}` placeholders.
    pub album_label_format: String,
    /// Straight RGBA8 color of label text.
    pub text_color_rgba8: [u8; 4],
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output/grids"),
            font_file: PathBuf::from("assets/fonts/SEGOEUI.TTF"),
            album_name_pattern: DEFAULT_ALBUM_NAME_PATTERN.to_string(),
            album_label_format: DEFAULT_ALBUM_LABEL_FORMAT.to_string(),
            text_color_rgba8: [255, 255, 255, 255],
        }
    }
}

impl CollageConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> CollageResult<Self> {
        serde_json::from_str(s).map_err(|e| CollageError::validation(format!("config: {e}")))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_path(path: &Path) -> CollageResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Labeler built from the configured pattern and template.
    pub fn labeler(&self) -> CollageResult<AlbumLabeler> {
        AlbumLabeler::new(&self.album_name_pattern, self.album_label_format.clone())
    }

    /// Text renderer for the configured font file.
    pub fn text_renderer(&self) -> CollageResult<TextColumnRenderer> {
        TextColumnRenderer::from_font_file(&self.font_file)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
