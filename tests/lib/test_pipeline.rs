//! Integration tests for the library pipeline: catalogue → tree → layout → image.

use std::f64::consts::PI;
use std::fs;

use edm_mindmap::layout::RingRadii;
use edm_mindmap::tree::Tier;
use edm_mindmap::{Catalogue, MindmapError, RenderConfig, build_and_layout, generate, render_svg};

const SAMPLE: &str = r#"
categories:
  - name: Theory
    papers:
      - authors: "Smith, J."
        year: 2001
      - authors: "Smith, J."
        year: 2001
    subcategories:
      - name: Embedding
        papers:
          - authors: "Floris Takens"
            year: 1981
  - name: Causality
    papers:
      - authors: "Sugihara, G., May, R., Ye, H."
        year: 2012
  - name: Forecasting
  - name: Software
"#;

fn sample() -> Catalogue {
    Catalogue::from_yaml_str(SAMPLE).unwrap()
}

// ── Tree ──────────────────────────────────────────────────────────────────────

#[test]
fn test_duplicate_labels_round_trip() {
    let (tree, _) = build_and_layout(&sample(), &RenderConfig::new()).unwrap();
    let papers = tree.nodes_of_tier(Tier::Paper);
    assert_eq!(
        papers,
        vec!["Smith\n(2001)", "Smith\n(2001)[2]", "Takens\n(1981)", "Sugihara\n(2012)"]
    );
}

#[test]
fn test_every_non_root_has_one_parent() {
    let (tree, _) = build_and_layout(&sample(), &RenderConfig::new()).unwrap();
    let root = tree.root_label().to_string();
    assert_eq!(tree.in_degree(&root), 0);
    assert_eq!(tree.edge_count(), tree.node_count() - 1);
    for label in tree.labels() {
        if label != root {
            assert_eq!(tree.in_degree(label), 1, "{label}");
        }
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[test]
fn test_categories_on_first_ring_clockwise_from_top() {
    let (_, layout) = build_and_layout(&sample(), &RenderConfig::new()).unwrap();
    let expect = [
        ("Theory", -PI / 2.0),
        ("Causality", 0.0),
        ("Forecasting", PI / 2.0),
        ("Software", PI),
    ];
    for (label, angle) in expect {
        let p = layout.position(label).unwrap();
        assert!((p.norm() - 3.5).abs() < 1e-9);
        assert!((p.x - 3.5 * angle.cos()).abs() < 1e-9, "{label}");
        assert!((p.y - 3.5 * angle.sin()).abs() < 1e-9, "{label}");
    }
}

#[test]
fn test_radius_follows_depth() {
    let (tree, layout) = build_and_layout(&sample(), &RenderConfig::new()).unwrap();
    let radii = RingRadii::default();
    assert_eq!(layout.len(), tree.node_count());
    assert_eq!(layout.position(tree.root_label()).unwrap().norm(), 0.0);
    for node in &layout.nodes {
        assert!((node.position.norm() - radii.radius_for(node.layer)).abs() < 1e-9);
    }
    assert_eq!(layout.get("Takens\n(1981)").unwrap().layer, 3);
}

#[test]
fn test_custom_ring_radii_clamp() {
    let mut config = RenderConfig::new();
    config.ring_radii = vec![0.0, 2.0];
    let (_, layout) = build_and_layout(&sample(), &config).unwrap();
    assert!((layout.position("Takens\n(1981)").unwrap().norm() - 2.0).abs() < 1e-9);
    assert!((layout.position("Embedding").unwrap().norm() - 2.0).abs() < 1e-9);
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[test]
fn test_paper_without_year_is_malformed() {
    let cat = Catalogue::from_yaml_str(
        "categories:\n  - name: T\n    papers:\n      - authors: \"Smith, J.\"\n",
    )
    .unwrap();
    let err = render_svg(&cat, &RenderConfig::new()).unwrap_err();
    assert!(matches!(err, MindmapError::MalformedInput { .. }), "{err}");
}

#[test]
fn test_wrong_typed_fields_are_malformed() {
    let cases = [
        (
            "categories:\n  - name: T\n    papers:\n      - { authors: [a, b], year: 2001 }\n",
            "`authors` must be a string",
        ),
        ("categories:\n  - name: [a]\n", "`name` must be a string"),
        (
            "categories:\n  - name: T\n    papers:\n      - { authors: \"Smith, J.\", year: true }\n",
            "`year` must be an integer or string",
        ),
    ];
    for (text, expected) in cases {
        let cat = Catalogue::from_yaml_str(text).unwrap();
        match build_and_layout(&cat, &RenderConfig::new()).unwrap_err() {
            MindmapError::MalformedInput { reason, .. } => assert_eq!(reason, expected),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_duplicate_subcategory_names_rejected() {
    let cat = Catalogue::from_yaml_str(
        "categories:\n  - name: A\n    subcategories:\n      - name: X\n  - name: B\n    subcategories:\n      - name: X\n",
    )
    .unwrap();
    let err = build_and_layout(&cat, &RenderConfig::new()).unwrap_err();
    assert!(err.to_string().contains("categories[1].subcategories[0]"), "{err}");
}

// ── Output ────────────────────────────────────────────────────────────────────

#[test]
fn test_generate_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("papers.yaml");
    let output = dir.path().join("map.svg");
    fs::write(&input, SAMPLE).unwrap();

    let config = RenderConfig::new().with_input(&input).with_output(&output);
    let written = generate(&config).unwrap();
    assert_eq!(written, output);

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(">Smith</tspan>"));
    assert!(svg.contains("Paper Landscape"));
}

#[test]
fn test_generate_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("papers.yaml");
    let output = dir.path().join("map.png");
    fs::write(&input, SAMPLE).unwrap();

    let mut config = RenderConfig::new().with_input(&input).with_output(&output);
    config.scale = 0.25;
    generate(&config).unwrap();

    let png = fs::read(&output).unwrap();
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn test_generate_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.yaml");
    let output = dir.path().join("map.png");

    let config = RenderConfig::new().with_input(&input).with_output(&output);
    match generate(&config).unwrap_err() {
        MindmapError::MissingSourceFile(p) => assert_eq!(p, input),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_generate_malformed_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("papers.yaml");
    let output = dir.path().join("map.svg");
    fs::write(&input, "categories:\n  - papers: []\n").unwrap();

    let config = RenderConfig::new().with_input(&input).with_output(&output);
    assert!(generate(&config).is_err());
    assert!(!output.exists());
}
