//! Layout types: Point, RingRadii, LayoutNode, RadialLayout.

use std::collections::HashMap;

use crate::config::DEFAULT_RING_RADII;
use crate::tree::Tier;

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive x axis, in (−π, π].
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

// ─── RingRadii ───────────────────────────────────────────────────────────────

/// Ring radius per breadth-first depth.
///
/// Depths past the last entry share the outermost ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingRadii(Vec<f64>);

impl RingRadii {
    /// An empty list falls back to the default radii.
    pub fn new(radii: Vec<f64>) -> Self {
        if radii.is_empty() {
            Self::default()
        } else {
            Self(radii)
        }
    }

    pub fn radius_for(&self, depth: usize) -> f64 {
        self.0[depth.min(self.0.len() - 1)]
    }

    pub fn outermost(&self) -> f64 {
        self.0[self.0.len() - 1]
    }
}

impl Default for RingRadii {
    fn default() -> Self {
        Self(DEFAULT_RING_RADII.to_vec())
    }
}

// ─── LayoutNode ──────────────────────────────────────────────────────────────

/// A node with its ring and position.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub label: String,
    pub tier: Tier,
    /// Breadth-first depth from the root.
    pub layer: usize,
    /// Index within the layer, in discovery order.
    pub order: usize,
    pub position: Point,
}

// ─── RadialLayout ────────────────────────────────────────────────────────────

/// Output of the radial layout: every node of the tree with a position.
#[derive(Debug, Clone, Default)]
pub struct RadialLayout {
    /// Nodes in breadth-first discovery order, root first.
    pub nodes: Vec<LayoutNode>,
    index: HashMap<String, usize>,
}

impl RadialLayout {
    pub(crate) fn push(&mut self, node: LayoutNode) {
        self.index.insert(node.label.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&LayoutNode> {
        self.index.get(label).map(|&i| &self.nodes[i])
    }

    pub fn position(&self, label: &str) -> Option<Point> {
        self.get(label).map(|n| n.position)
    }

    /// Largest distance of any node from the origin.
    pub fn extent(&self) -> f64 {
        self.nodes
            .iter()
            .map(|n| n.position.norm())
            .fold(0.0, f64::max)
    }

    /// Label → position map.
    pub fn positions(&self) -> HashMap<&str, Point> {
        self.nodes
            .iter()
            .map(|n| (n.label.as_str(), n.position))
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
