use std::{borrow::Cow, path::Path};

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::core::{PixelPoint, PixelSize};
use crate::foundation::error::{CollageError, CollageResult};

/// Horizontal alignment of lines within a text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered on the widest line.
    Center,
    /// Flush right against the widest line.
    Right,
}

/// Geometry and styling of one rendered text column.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextColumnSpec {
    /// Canvas size; text past it is clipped.
    pub size: PixelSize,
    /// Top-left of the text block inside the canvas.
    pub offset: PixelPoint,
    /// Line alignment inside the block.
    #[serde(default)]
    pub align: TextAlign,
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Straight (non-premultiplied) RGBA8 fill color.
    #[serde(default = "default_text_color")]
    pub color_rgba8: [u8; 4],
}

fn default_text_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl TextColumnSpec {
    /// Left-aligned white text of `font_size_px` drawn at `offset` on a `size` canvas.
    pub fn new(size: PixelSize, offset: PixelPoint, font_size_px: f32) -> Self {
        Self {
            size,
            offset,
            align: TextAlign::Left,
            font_size_px,
            color_rgba8: default_text_color(),
        }
    }

    /// Replace the alignment.
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Replace the fill color.
    pub fn with_color(mut self, color_rgba8: [u8; 4]) -> Self {
        self.color_rgba8 = color_rgba8;
        self
    }

    fn canvas_u16(&self) -> CollageResult<(u16, u16)> {
        let w = u16::try_from(self.size.width)
            .map_err(|_| CollageError::validation("text column width exceeds u16"))?;
        let h = u16::try_from(self.size.height)
            .map_err(|_| CollageError::validation("text column height exceeds u16"))?;
        Ok((w, h))
    }
}

/// Draws label columns onto transparent canvases.
pub trait TextRasterizer {
    /// Render `lines` as one multi-line block according to `spec`.
    fn render_column(&mut self, lines: &[String], spec: &TextColumnSpec)
    -> CollageResult<RgbaImage>;
}

/// Join lines with a single `\n` between neighbours and none after the last.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrush {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

/// [`TextRasterizer`] backed by a single TrueType/OpenType font.
///
/// Shaping and line layout go through Parley; glyphs are filled with `vello_cpu`.
pub struct TextColumnRenderer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for TextColumnRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextColumnRenderer")
            .field("family_name", &self.family_name)
            .finish()
    }
}

impl TextColumnRenderer {
    /// Load the font at `path`.
    pub fn from_font_file(path: &Path) -> CollageResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        Self::from_font_bytes(bytes)
    }

    /// Register `font_bytes` and use its first family for every column.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> CollageResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let (family_id, face_index) = families
            .first()
            .map(|(id, fonts)| (*id, fonts.first().map_or(0, |f| f.index())))
            .ok_or_else(|| {
                CollageError::validation("no font families registered from font bytes")
            })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CollageError::validation("registered font family has no name"))?
            .to_string();
        tracing::debug!(family = %family_name, face_index, "text font registered");

        // same face parley registered, not face 0 of a collection
        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), face_index);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    /// Family name resolved from the font data.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Face index inside the font file used for both shaping and drawing.
    pub fn face_index(&self) -> u32 {
        self.font.index
    }

    fn layout(
        &mut self,
        text: &str,
        spec: &TextColumnSpec,
    ) -> CollageResult<parley::Layout<TextBrush>> {
        if !spec.font_size_px.is_finite() || spec.font_size_px <= 0.0 {
            return Err(CollageError::validation(
                "text font_size_px must be finite and > 0",
            ));
        }
        let [r, g, b, a] = spec.color_rgba8;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(spec.font_size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush { r, g, b, a }));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        let alignment = match spec.align {
            TextAlign::Left => parley::Alignment::Start,
            TextAlign::Center => parley::Alignment::Center,
            TextAlign::Right => parley::Alignment::End,
        };
        layout.align(None, alignment, parley::AlignmentOptions::default());
        Ok(layout)
    }
}

impl TextRasterizer for TextColumnRenderer {
    #[tracing::instrument(skip(self, lines, spec), fields(lines = lines.len()))]
    fn render_column(
        &mut self,
        lines: &[String],
        spec: &TextColumnSpec,
    ) -> CollageResult<RgbaImage> {
        let (w, h) = spec.canvas_u16()?;
        let text = join_lines(lines);
        let layout = self.layout(&text, spec)?;
        if w == 0 || h == 0 {
            return Ok(RgbaImage::new(spec.size.width, spec.size.height));
        }

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(spec.offset.x),
            f64::from(spec.offset.y),
        )));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        let mut straight = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_in_place(&mut straight);
        RgbaImage::from_raw(spec.size.width, spec.size.height, straight)
            .ok_or_else(|| CollageError::validation("text pixmap byte len mismatch"))
    }
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/column.rs"]
mod tests;
