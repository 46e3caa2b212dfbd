//! Configuration for the mind map pipeline.

use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "papers.yaml";
pub const DEFAULT_OUTPUT: &str = "edm_mindmap.png";
pub const DEFAULT_ROOT_LABEL: &str = "Empirical\nDynamical\nModeling";
pub const DEFAULT_TITLE: &str = "Empirical Dynamical Modeling — Paper Landscape";
/// Ring radius per breadth-first depth, in layout units.
pub const DEFAULT_RING_RADII: [f64; 4] = [0.0, 3.5, 7.0, 10.5];

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Catalogue to read.
    pub input: PathBuf,
    /// Image to write. A `.svg` extension selects SVG output, anything else PNG.
    pub output: PathBuf,
    pub ring_radii: Vec<f64>,
    /// Label of the single root node. May contain newlines.
    pub root_label: String,
    pub title: String,
    /// Pixels per layout unit.
    pub unit_px: f64,
    /// Raster scale factor applied when encoding PNG.
    pub scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ring_radii: DEFAULT_RING_RADII.to_vec(),
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            unit_px: 90.0,
            scale: 1.0,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// True when the output path asks for an SVG document.
    pub fn wants_svg(&self) -> bool {
        self.output
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }
}
