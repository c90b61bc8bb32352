use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{CollageError, CollageResult};

/// Seconds since the Unix epoch, used to keep output names unique per run.
pub fn unix_timestamp() -> CollageResult<u64> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|e| CollageError::validation(format!("system clock before unix epoch: {e}")))?;
    Ok(now.as_secs())
}

/// `<dir>/<tag>-<timestamp>.png`.
pub fn output_path(dir: &Path, tag: &str, timestamp: u64) -> PathBuf {
    dir.join(format!("{tag}-{timestamp}.png"))
}

/// Encode `image` as PNG at `path`, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> CollageResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        image.as_raw(),
        image.width(),
        image.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::info!(path = %path.display(), width = image.width(), height = image.height(), "wrote collage");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/output/output.rs"]
mod tests;
