//! Coverwall renders album covers into fixed-layout PNG collages.
//!
//! A directory of cover images becomes a grid of equally sized square cells, optionally
//! accompanied by a column of labels derived from the file names.
//!
//! # Pipeline overview
//!
//! 1. **Load**: list the directory, check the cover count, decode images ([`CoverSet`])
//! 2. **Label**: `"<prefix>[yyyy-mm-dd] <name>"` file stems become `"<name> (<yyyy>)"` ([`AlbumLabeler`])
//! 3. **Lay out**: each grid gets a transparent canvas and one anchor per cell ([`GridLayout`])
//! 4. **Draw**: covers are resized into their cells, labels are rasterized as text blocks
//! 5. **Assemble**: sub-canvases are pasted at fixed positions onto the final canvas
//! 6. **Save**: the result is written as `<output_dir>/<tag>-<unix_ts>.png`
//!
//! The built-in layouts live in [`Scene`]; [`run_scene`] drives a whole run.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Straight-alpha RGBA8** everywhere; pasting replaces pixels and never blends.
//! - **Explicit configuration**: settings are a plain [`CollageConfig`] value passed by callers.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod foundation;
mod layout;
mod naming;
mod scene;
mod source;
mod text;

/// JSON-loadable run settings.
pub mod config;
/// Output naming and PNG encoding.
pub mod output;

pub use compose::assembler::{
    Placement, assemble, assemble_with_extent, bounding_extent, ensure_total_height,
    ensure_uniform_heights, ensure_uniform_widths, horizontal_placements, stack_horizontal,
    stack_vertical, vertical_placements,
};
pub use config::CollageConfig;
pub use foundation::core::{PixelPoint, PixelRect, PixelSize};
pub use foundation::error::{CollageError, CollageResult};
pub use layout::grid::{GridLayout, GridSpec, OffsetRule, PadSides, Side, build_grid};
pub use naming::label::{AlbumLabeler, DEFAULT_ALBUM_LABEL_FORMAT, DEFAULT_ALBUM_NAME_PATTERN};
pub use output::{output_path, save_png, unix_timestamp};
pub use scene::first_listens::{FirstListensLayout, render_first_listens};
pub use scene::five_by_five::{five_by_five_spec, render_five_by_five};
pub use scene::top_albums::{Tier, TopAlbumsLayout, render_top_albums};
pub use scene::{RunOptions, Scene, run_scene};
pub use source::covers::{
    CoverSet, decode_cover, expect_cover_count, file_stem_lossy, list_cover_files,
};
pub use text::column::{
    TextAlign, TextColumnRenderer, TextColumnSpec, TextRasterizer, join_lines,
};
