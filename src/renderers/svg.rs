//! SVG renderer — converts the tree and its radial layout to an SVG string.
//!
//! Layout units are scaled by `unit_px`; the root sits at the centre of the
//! drawing area, below a title band. SVG's y axis points down, which puts
//! angle −π/2 at the top of the image.

use crate::layout::{Point, RadialLayout};
use crate::tree::{MindmapTree, NodeStyle, Tier};

// ── Constants ────────────────────────────────────────────────────────────────

const BACKGROUND: &str = "#0D1117";
const EDGE_COLOR: &str = "#3A3A5C";
const LEGEND_FILL: &str = "#1C1C2E";
const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";

const EDGE_WIDTH_PT: f64 = 0.9;
const EDGE_OPACITY: f64 = 0.75;
const NODE_OPACITY: f64 = 0.92;
const TITLE_PT: f64 = 17.0;
const LEGEND_PT: f64 = 11.0;

/// Layout units of blank space kept around the outermost ring.
const MARGIN_UNITS: f64 = 1.5;
/// Points per layout unit; converts matplotlib-style pt sizes to pixels.
const PT_PER_UNIT: f64 = 45.0;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn font(size: f64) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size:.1}" font-weight="bold""#)
}

/// Marker radius in pt for a marker area given in pt².
pub fn marker_radius_pt(style: &NodeStyle) -> f64 {
    style.size.sqrt() / 2.0
}

// ── SvgRenderer ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Pixels per layout unit.
    pub unit_px: f64,
    pub title: String,
}

impl SvgRenderer {
    pub fn new(unit_px: f64, title: impl Into<String>) -> Self {
        Self {
            unit_px,
            title: title.into(),
        }
    }

    fn pt(&self, points: f64) -> f64 {
        points * self.unit_px / PT_PER_UNIT
    }

    fn title_band(&self) -> f64 {
        self.pt(TITLE_PT) * 3.0
    }

    /// Image size in pixels and the pixel position of the origin.
    fn frame(&self, layout: &RadialLayout) -> (f64, f64, Point) {
        let half = (layout.extent() + MARGIN_UNITS) * self.unit_px;
        let band = self.title_band();
        (half * 2.0, half * 2.0 + band, Point::new(half, band + half))
    }

    fn to_px(&self, origin: Point, p: Point) -> Point {
        Point::new(origin.x + p.x * self.unit_px, origin.y + p.y * self.unit_px)
    }

    fn render_edge(&self, from: Point, to: Point) -> String {
        format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{EDGE_COLOR}" stroke-width="{:.2}" stroke-opacity="{EDGE_OPACITY}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            self.pt(EDGE_WIDTH_PT)
        )
    }

    fn render_node(&self, at: Point, style: &NodeStyle) -> String {
        format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{NODE_OPACITY}"/>"#,
            at.x,
            at.y,
            self.pt(marker_radius_pt(style)),
            style.color
        )
    }

    fn render_label(&self, at: Point, label: &str, style: &NodeStyle) -> String {
        let size = self.pt(style.font_size);
        let line_h = size * 1.2;
        let lines: Vec<String> = label.split('\n').map(escape).collect();
        let f = font(size);

        if lines.len() == 1 {
            return format!(
                r#"<text x="{:.2}" y="{:.2}" dominant-baseline="central" text-anchor="middle" fill="white" {f}>{}</text>"#,
                at.x, at.y, lines[0]
            );
        }

        // Vertically centre the block of lines on the node.
        let start_y = at.y - line_h * (lines.len() - 1) as f64 / 2.0;
        let tspans: String = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                format!(
                    r#"<tspan x="{:.2}" y="{:.2}">{line}</tspan>"#,
                    at.x,
                    start_y + i as f64 * line_h
                )
            })
            .collect();
        format!(
            r#"<text text-anchor="middle" dominant-baseline="central" fill="white" {f}>{tspans}</text>"#
        )
    }

    fn render_legend(&self, width: f64, height: f64) -> String {
        let size = self.pt(LEGEND_PT);
        let row_h = size * 1.6;
        let box_w = size * 9.0;
        let box_h = row_h * Tier::ALL.len() as f64 + size;
        let x = width - box_w - size;
        let y = height - box_h - size;
        let f = font(size);

        let mut parts = vec![format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{box_w:.2}" height="{box_h:.2}" rx="{:.2}" fill="{LEGEND_FILL}" fill-opacity="0.85"/>"#,
            size / 3.0
        )];
        for (i, tier) in Tier::ALL.iter().enumerate() {
            let row_y = y + size / 2.0 + row_h * i as f64;
            parts.push(format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                x + size / 2.0,
                row_y + size * 0.2,
                size * 1.6,
                size,
                tier.style().color
            ));
            parts.push(format!(
                r#"<text x="{:.2}" y="{:.2}" dominant-baseline="central" fill="white" {f}>{}</text>"#,
                x + size * 2.6,
                row_y + size * 0.7,
                tier.legend_label()
            ));
        }
        parts.join("\n")
    }

    /// Render the laid-out tree to an SVG document.
    ///
    /// Nodes of `tree` missing from `layout` are skipped.
    pub fn render_document(&self, tree: &MindmapTree, layout: &RadialLayout) -> String {
        let (width, height, origin) = self.frame(layout);

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"#
            ),
            format!(r#"<rect width="100%" height="100%" fill="{BACKGROUND}"/>"#),
        ];

        // Edges (behind nodes).
        for (from, to) in tree.edges() {
            if let (Some(a), Some(b)) = (layout.position(from), layout.position(to)) {
                parts.push(self.render_edge(self.to_px(origin, a), self.to_px(origin, b)));
            }
        }

        // Nodes, larger tiers first so smaller markers sit on top.
        for tier in Tier::ALL {
            let style = tier.style();
            for node in layout.nodes.iter().filter(|n| n.tier == tier) {
                parts.push(self.render_node(self.to_px(origin, node.position), &style));
            }
        }

        // Labels on top of every marker.
        for node in &layout.nodes {
            let style = node.tier.style();
            parts.push(self.render_label(self.to_px(origin, node.position), &node.label, &style));
        }

        parts.push(self.render_legend(width, height));

        if !self.title.is_empty() {
            parts.push(format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="central" fill="white" {}>{}</text>"#,
                width / 2.0,
                self.title_band() / 2.0,
                font(self.pt(TITLE_PT)),
                escape(&self.title)
            ));
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

impl super::Renderer for SvgRenderer {
    fn render(&self, tree: &MindmapTree, layout: &RadialLayout) -> crate::Result<Vec<u8>> {
        Ok(self.render_document(tree, layout).into_bytes())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
