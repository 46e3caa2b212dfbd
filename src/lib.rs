//! edm-mindmap — radial mind map of a research paper catalogue.
//!
//! Pipeline: YAML catalogue → `tree::TreeBuilder` → `layout::radial_layout`
//! → `renderers` (SVG, optionally rasterized to PNG).
//!
//! Public API: `render_svg()`, `render_png()`, `generate()`.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod layout;
pub mod renderers;
pub mod tree;

use std::fs;
use std::path::PathBuf;

pub use catalogue::Catalogue;
pub use config::RenderConfig;
pub use error::{MindmapError, Result};
pub use layout::RadialLayout;
pub use tree::{MindmapTree, TreeBuilder};

use renderers::{PngRenderer, Renderer, SvgRenderer};

/// Build the tree and its layout for `catalogue`.
pub fn build_and_layout(
    catalogue: &Catalogue,
    config: &RenderConfig,
) -> Result<(MindmapTree, RadialLayout)> {
    let tree = TreeBuilder::new(&config.root_label).build(catalogue)?;
    let layout = layout::layout_with_config(&tree, config);
    Ok((tree, layout))
}

/// Render `catalogue` to an SVG document.
pub fn render_svg(catalogue: &Catalogue, config: &RenderConfig) -> Result<String> {
    let (tree, layout) = build_and_layout(catalogue, config)?;
    Ok(SvgRenderer::new(config.unit_px, config.title.clone()).render_document(&tree, &layout))
}

/// Render `catalogue` to PNG bytes.
pub fn render_png(catalogue: &Catalogue, config: &RenderConfig) -> Result<Vec<u8>> {
    let (tree, layout) = build_and_layout(catalogue, config)?;
    let svg = SvgRenderer::new(config.unit_px, config.title.clone());
    PngRenderer::new(svg, config.scale).render(&tree, &layout)
}

/// Read `config.input`, render it, and write the image to `config.output`.
///
/// Nothing is written unless the whole catalogue is well-formed. Returns the
/// path written.
pub fn generate(config: &RenderConfig) -> Result<PathBuf> {
    let catalogue = Catalogue::load(&config.input)?;
    let (tree, layout) = build_and_layout(&catalogue, config)?;
    let bytes = renderers::for_config(config).render(&tree, &layout)?;

    fs::write(&config.output, bytes).map_err(|source| MindmapError::Io {
        path: config.output.clone(),
        source,
    })?;
    tracing::info!(output = %config.output.display(), nodes = tree.node_count(), "wrote mind map");
    Ok(config.output.clone())
}
