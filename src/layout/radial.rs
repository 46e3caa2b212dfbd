//! Radial layout — breadth-first depth becomes ring radius.
//!
//! Phases:
//!   1. Pin the root at the origin.
//!   2. Split the tree into breadth-first layers, children visited in the
//!      order they were added.
//!   3. Layer d sits on ring `radii.radius_for(d)`.
//!   4. The i-th of M nodes in a layer sits at angle `2π·i/M − π/2`.
//!
//! Angles are measured in a y-down frame, so −π/2 is the top of the image
//! and increasing angle runs clockwise.

use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_2, TAU};

use petgraph::graph::NodeIndex;

use super::types::{LayoutNode, Point, RadialLayout, RingRadii};
use crate::tree::MindmapTree;

/// Breadth-first layers from the root. Layer 0 holds only the root.
pub fn bfs_layers(tree: &MindmapTree) -> Vec<Vec<NodeIndex>> {
    let mut layers: Vec<Vec<NodeIndex>> = Vec::new();
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
    queue.push_back((tree.root(), 0));

    while let Some((idx, depth)) = queue.pop_front() {
        if layers.len() <= depth {
            layers.push(Vec::new());
        }
        layers[depth].push(idx);
        for child in tree.children(idx) {
            queue.push_back((child, depth + 1));
        }
    }
    layers
}

/// Angle of the i-th of `count` nodes on a ring.
pub fn ring_angle(i: usize, count: usize) -> f64 {
    TAU * i as f64 / count as f64 - FRAC_PI_2
}

/// Assign a position to every node of `tree`.
pub fn radial_layout(tree: &MindmapTree, radii: &RingRadii) -> RadialLayout {
    let mut layout = RadialLayout::default();

    for (depth, layer) in bfs_layers(tree).into_iter().enumerate() {
        let count = layer.len();
        let radius = radii.radius_for(depth);
        for (order, idx) in layer.into_iter().enumerate() {
            let data = tree.node(idx);
            let position = if depth == 0 {
                Point::ORIGIN
            } else {
                Point::polar(radius, ring_angle(order, count))
            };
            layout.push(LayoutNode {
                label: data.label.clone(),
                tier: data.tier,
                layer: depth,
                order,
                position,
            });
        }
        tracing::debug!(depth, count, radius, "placed ring");
    }

    layout
}

// ─── Tests ───────────────────────────────────────────────────────────────────
