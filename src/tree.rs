//! Tree builder — turns a `Catalogue` into a petgraph DiGraph.
//!
//! The result is always a tree: one root, every other node with exactly one
//! parent. Node identity is the display label, so labels must be unique;
//! paper labels are made unique by a per-build `LabelCounter`, category and
//! subcategory names must already be.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::catalogue::{Catalogue, Paper};
use crate::config::DEFAULT_ROOT_LABEL;
use crate::error::{MindmapError, Result};

// ─── Tier / NodeStyle ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Root,
    Category,
    Subcategory,
    Paper,
}

/// Visual attributes of a node. A pure function of its tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub tier: Tier,
    pub color: &'static str,
    /// Marker area in pt².
    pub size: f64,
    /// Label font size in pt.
    pub font_size: f64,
}

const STYLES: [NodeStyle; 4] = [
    NodeStyle {
        tier: Tier::Root,
        color: "#F0A500",
        size: 6000.0,
        font_size: 9.0,
    },
    NodeStyle {
        tier: Tier::Category,
        color: "#E05C5C",
        size: 3500.0,
        font_size: 8.0,
    },
    NodeStyle {
        tier: Tier::Subcategory,
        color: "#5CA4E0",
        size: 2000.0,
        font_size: 7.0,
    },
    NodeStyle {
        tier: Tier::Paper,
        color: "#5CE08A",
        size: 900.0,
        font_size: 5.5,
    },
];

impl Tier {
    /// All tiers, largest first. Also the drawing order.
    pub const ALL: [Tier; 4] = [Tier::Root, Tier::Category, Tier::Subcategory, Tier::Paper];

    pub fn style(self) -> NodeStyle {
        STYLES[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Root => "root",
            Tier::Category => "category",
            Tier::Subcategory => "subcategory",
            Tier::Paper => "paper",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            Tier::Root => "Root",
            Tier::Category => "Category",
            Tier::Subcategory => "Sub-category",
            Tier::Paper => "Paper",
        }
    }
}

// ─── Node data ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub label: String,
    pub tier: Tier,
}

impl NodeData {
    pub fn style(&self) -> NodeStyle {
        self.tier.style()
    }
}

// ─── LabelCounter ────────────────────────────────────────────────────────────

/// Disambiguates repeated paper labels within one build.
///
/// The first occurrence of a base label is returned bare, the Nth (N > 1)
/// gets a `[N]` suffix. Counting is keyed by the base label alone, not by
/// parent.
#[derive(Debug, Default)]
pub struct LabelCounter {
    seen: HashMap<String, usize>,
}

impl LabelCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_label(&mut self, base: &str) -> String {
        let count = self.seen.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_string()
        } else {
            format!("{base}[{count}]")
        }
    }
}

/// Base label of a paper: first author's last name and the year, on two lines.
///
/// `location` names the record in error messages.
pub fn paper_base_label(paper: &Paper, location: &str) -> Result<String> {
    let authors = paper.authors_text(location)?;
    let year = paper.year_text(location)?;
    let first_author = authors.split(',').next().unwrap_or_default();
    let last_name = first_author
        .split_whitespace()
        .last()
        .ok_or_else(|| MindmapError::malformed(location, "empty `authors`"))?;
    Ok(format!("{last_name}\n({year})"))
}

// ─── MindmapTree ─────────────────────────────────────────────────────────────

/// The built catalogue tree. Edges point parent → child.
#[derive(Debug, Clone)]
pub struct MindmapTree {
    pub digraph: DiGraph<NodeData, ()>,
    /// Maps label → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    root: NodeIndex,
}

impl MindmapTree {
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn root_label(&self) -> &str {
        &self.digraph[self.root].label
    }

    pub fn node(&self, idx: NodeIndex) -> &NodeData {
        &self.digraph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.node_index.get(label).copied()
    }

    pub fn tier(&self, label: &str) -> Option<Tier> {
        self.index_of(label).map(|idx| self.digraph[idx].tier)
    }

    pub fn style(&self, label: &str) -> Option<NodeStyle> {
        self.tier(label).map(Tier::style)
    }

    /// Number of incoming edges for `label`. Returns 0 if the node is absent.
    pub fn in_degree(&self, label: &str) -> usize {
        match self.index_of(label) {
            None => 0,
            Some(idx) => self
                .digraph
                .edges_directed(idx, Direction::Incoming)
                .count(),
        }
    }

    /// Children of `idx` in the order they were added.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<_> = self
            .digraph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect();
        out.sort_by_key(|(eid, _)| *eid);
        out.into_iter().map(|(_, target)| target).collect()
    }

    /// All labels in insertion order.
    pub fn labels(&self) -> Vec<&str> {
        self.digraph
            .node_indices()
            .map(|idx| self.digraph[idx].label.as_str())
            .collect()
    }

    /// Labels of every node in `tier`, in insertion order.
    pub fn nodes_of_tier(&self, tier: Tier) -> Vec<&str> {
        self.digraph
            .node_indices()
            .filter(|&idx| self.digraph[idx].tier == tier)
            .map(|idx| self.digraph[idx].label.as_str())
            .collect()
    }

    /// All edges as `(parent, child)` label pairs, in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.digraph
            .edge_indices()
            .filter_map(|eidx| self.digraph.edge_endpoints(eidx))
            .map(|(a, b)| (self.digraph[a].label.as_str(), self.digraph[b].label.as_str()))
            .collect()
    }
}

// ─── TreeBuilder ─────────────────────────────────────────────────────────────

/// Builds one `MindmapTree`. Owns the label counter, so collision counting
/// never leaks between builds.
pub struct TreeBuilder {
    digraph: DiGraph<NodeData, ()>,
    node_index: HashMap<String, NodeIndex>,
    labels: LabelCounter,
    root: NodeIndex,
}

impl TreeBuilder {
    pub fn new(root_label: &str) -> Self {
        let mut digraph = DiGraph::new();
        let root = digraph.add_node(NodeData {
            label: root_label.to_string(),
            tier: Tier::Root,
        });
        let mut node_index = HashMap::new();
        node_index.insert(root_label.to_string(), root);
        Self {
            digraph,
            node_index,
            labels: LabelCounter::new(),
            root,
        }
    }

    /// Consume the builder and construct the tree for `catalogue`.
    ///
    /// Fails on the first malformed record; no partial tree is returned.
    pub fn build(mut self, catalogue: &Catalogue) -> Result<MindmapTree> {
        let categories = catalogue
            .categories
            .as_ref()
            .ok_or_else(|| MindmapError::malformed("<document>", "missing `categories`"))?;
        if categories.is_empty() {
            tracing::warn!("catalogue has no categories; only the root will be drawn");
        }

        for (ci, cat) in categories.iter().enumerate() {
            let loc = format!("categories[{ci}]");
            let name = cat.name_text(&loc)?;
            let cnode = self.add_node(name, Tier::Category, &loc)?;
            self.digraph.add_edge(self.root, cnode, ());

            for (pi, paper) in cat.papers.iter().enumerate() {
                self.add_paper(cnode, paper, &format!("{loc}.papers[{pi}]"))?;
            }

            for (si, sub) in cat.subcategories.iter().enumerate() {
                let sloc = format!("{loc}.subcategories[{si}]");
                let name = sub.name_text(&sloc)?;
                let snode = self.add_node(name, Tier::Subcategory, &sloc)?;
                self.digraph.add_edge(cnode, snode, ());
                for (pi, paper) in sub.papers.iter().enumerate() {
                    self.add_paper(snode, paper, &format!("{sloc}.papers[{pi}]"))?;
                }
            }
        }

        tracing::info!(
            nodes = self.digraph.node_count(),
            edges = self.digraph.edge_count(),
            "built catalogue tree"
        );
        Ok(MindmapTree {
            digraph: self.digraph,
            node_index: self.node_index,
            root: self.root,
        })
    }

    fn add_paper(&mut self, parent: NodeIndex, paper: &Paper, loc: &str) -> Result<NodeIndex> {
        let base = paper_base_label(paper, loc)?;
        let label = self.labels.next_label(&base);
        let idx = self.add_node(&label, Tier::Paper, loc)?;
        self.digraph.add_edge(parent, idx, ());
        Ok(idx)
    }

    fn add_node(&mut self, label: &str, tier: Tier, loc: &str) -> Result<NodeIndex> {
        if self.node_index.contains_key(label) {
            return Err(MindmapError::malformed(
                loc,
                format!("duplicate node {label:?}"),
            ));
        }
        let idx = self.digraph.add_node(NodeData {
            label: label.to_string(),
            tier,
        });
        self.node_index.insert(label.to_string(), idx);
        tracing::debug!(label, tier = tier.name(), "added node");
        Ok(idx)
    }
}

/// Build a tree with the default root label.
pub fn build_tree(catalogue: &Catalogue) -> Result<MindmapTree> {
    TreeBuilder::new(DEFAULT_ROOT_LABEL).build(catalogue)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
