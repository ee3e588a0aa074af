//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use armature::{ArmatureError, DiagramBuilder, config::AppConfig};

const MEMBERS: &str = "\
Name,Annotation,Stereotype
Child,,
Parent,abstract,Information Holder
";

const CONNECTIONS: &str = "\
Kind,From,To
inherits,Child,Parent
";

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_parse_valid_csv() {
    let builder = DiagramBuilder::default();
    let model = builder
        .parse(MEMBERS, CONNECTIONS)
        .expect("valid CSV should parse");

    assert_eq!(model.name(), "Class Diagram");
    assert_eq!(model.members().len(), 2);
    assert_eq!(model.connections().len(), 1);
}

#[test]
fn test_dot_source_contains_nodes_and_styles() {
    let builder = DiagramBuilder::default();
    let model = builder.parse(MEMBERS, CONNECTIONS).expect("valid CSV");
    let dot = builder.dot_source(&model).expect("known kinds");

    assert!(dot.contains("digraph"), "output should be a digraph");
    assert!(dot.contains("Child"), "node ids should appear");
    assert!(dot.contains("Parent"), "node ids should appear");
    assert!(dot.contains("record"), "members render as records");
    assert!(
        dot.contains("«abstract» Parent"),
        "annotation should prefix the label"
    );
    assert!(dot.contains("empty"), "inherits uses an empty triangle tail");
}

#[test]
fn test_header_only_connections_yield_zero_edges() {
    use dot_structures::{Graph, Stmt};

    let builder = DiagramBuilder::default();
    let model = builder
        .parse(MEMBERS, "Kind,From,To\n")
        .expect("header-only connections are valid");
    let graph = builder.build_graph(&model).expect("no connections");

    let Graph::DiGraph { stmts, .. } = graph else {
        panic!("expected a digraph");
    };
    let nodes = stmts.iter().filter(|s| matches!(s, Stmt::Node(_))).count();
    let edges = stmts.iter().filter(|s| matches!(s, Stmt::Edge(_))).count();
    assert_eq!(nodes, 2);
    assert_eq!(edges, 0);
}

#[test]
fn test_unknown_kind_fails_at_build_not_parse() {
    let builder = DiagramBuilder::default();
    let model = builder
        .parse(MEMBERS, "Kind,From,To\nunknown_kind,Child,Parent\n")
        .expect("parsing should not validate kinds");

    let result = builder.build_graph(&model);
    assert!(matches!(result, Err(ArmatureError::Connection(_))));
}

#[test]
fn test_malformed_row_fails_at_parse() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("Name,Annotation,Stereotype\nJustAName\n", CONNECTIONS);
    assert!(matches!(result, Err(ArmatureError::Parse { .. })));
}

#[test]
fn test_load_csv_missing_file_is_a_file_access_error() {
    let builder = DiagramBuilder::default();
    let result = builder.load_csv("does-not-exist.csv", "also-missing.csv");
    assert!(matches!(result, Err(ArmatureError::FileAccess { .. })));
}

#[test]
fn test_render_dot_writes_a_file() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let output = temp_dir.path().join("diagram.dot");

    let builder = DiagramBuilder::default();
    let model = builder.parse(MEMBERS, CONNECTIONS).expect("valid CSV");
    builder.render(&model, &output).expect("dot export");

    let written = std::fs::read_to_string(&output).expect("output file exists");
    assert!(written.contains("digraph"));
}

#[test]
fn test_render_rejects_unknown_extension() {
    let builder = DiagramBuilder::default();
    let model = builder.parse(MEMBERS, CONNECTIONS).expect("valid CSV");
    let result = builder.render(&model, "diagram.tiff");
    assert!(matches!(result, Err(ArmatureError::Export(_))));
}

#[test]
fn test_builder_with_custom_name() {
    let mut config = AppConfig::default();
    config.graph_mut().set_name("Payments");

    let builder = DiagramBuilder::new(config);
    let model = builder.parse(MEMBERS, CONNECTIONS).expect("valid CSV");
    assert_eq!(model.name(), "Payments");

    let dot = builder.dot_source(&model).expect("known kinds");
    assert!(dot.contains("Payments"));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let model1 = builder.parse(MEMBERS, CONNECTIONS).expect("first model");
    let model2 = builder
        .parse("Name,Annotation,Stereotype\nOther,,\n", "Kind,From,To\n")
        .expect("second model");

    let dot1 = builder.dot_source(&model1).expect("first dot");
    let dot2 = builder.dot_source(&model2).expect("second dot");
    assert!(dot1.contains("Child"));
    assert!(dot2.contains("Other"));
}
