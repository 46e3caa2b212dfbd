//! PNG renderer — rasterizes the SVG document with resvg.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use super::svg::SvgRenderer;
use crate::error::{MindmapError, Result};
use crate::layout::RadialLayout;
use crate::tree::MindmapTree;

#[derive(Debug, Clone)]
pub struct PngRenderer {
    pub svg: SvgRenderer,
    /// Raster scale applied on top of the SVG pixel size.
    pub scale: f32,
}

impl PngRenderer {
    pub fn new(svg: SvgRenderer, scale: f32) -> Self {
        Self { svg, scale }
    }
}

/// Rasterize an SVG document to PNG bytes.
pub fn rasterize(svg: &str, scale: f32) -> Result<Vec<u8>> {
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(MindmapError::Render(format!(
            "scale must be a positive number, got {scale}"
        )));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| MindmapError::Render(format!("cannot parse generated SVG: {err}")))?;

    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * scale).ceil();
    let height = (size.height() as f32 * scale).ceil();
    if width < 1.0 || height < 1.0 || width > u32::MAX as f32 || height > u32::MAX as f32 {
        return Err(MindmapError::Render(format!(
            "scaled size {width}x{height} is out of range"
        )));
    }
    let (width, height) = (width as u32, height as u32);

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        MindmapError::Render(format!("cannot allocate {width}x{height} pixmap"))
    })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    tracing::debug!(width, height, "rasterized mind map");

    pixmap
        .encode_png()
        .map_err(|err| MindmapError::Render(format!("cannot encode PNG: {err}")))
}

impl super::Renderer for PngRenderer {
    fn render(&self, tree: &MindmapTree, layout: &RadialLayout) -> Result<Vec<u8>> {
        rasterize(&self.svg.render_document(tree, layout), self.scale)
    }
}
