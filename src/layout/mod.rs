//! Layout engine — radial placement of the catalogue tree.

pub mod radial;
pub mod types;

pub use radial::{bfs_layers, radial_layout, ring_angle};
pub use types::{LayoutNode, Point, RadialLayout, RingRadii};

use crate::config::RenderConfig;
use crate::tree::MindmapTree;

/// Run the radial layout with the ring radii from `config`.
pub fn layout_with_config(tree: &MindmapTree, config: &RenderConfig) -> RadialLayout {
    radial_layout(tree, &RingRadii::new(config.ring_radii.clone()))
}
