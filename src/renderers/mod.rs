//! Renderers and the Renderer trait.

pub mod png;
pub mod svg;

pub use png::PngRenderer;
pub use svg::SvgRenderer;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::layout::RadialLayout;
use crate::tree::MindmapTree;

/// Trait for image renderers: laid-out tree in, file contents out.
pub trait Renderer {
    fn render(&self, tree: &MindmapTree, layout: &RadialLayout) -> Result<Vec<u8>>;
}

/// Pick the renderer for the output path in `config`.
pub fn for_config(config: &RenderConfig) -> Box<dyn Renderer> {
    let svg = SvgRenderer::new(config.unit_px, config.title.clone());
    if config.wants_svg() {
        Box::new(svg)
    } else {
        Box::new(PngRenderer::new(svg, config.scale))
    }
}
