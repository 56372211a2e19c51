//! End-to-end: JSON project model on disk through the engine to DOT text.

mod common;

use std::io::Write;
use std::path::PathBuf;

use depgraph::app::dto::{FilterOptions, GraphMode, GraphRequest};
use depgraph::app::engine::GraphEngine;
use tempfile::NamedTempFile;

use common::fixtures::PROJECT_MODEL;

fn model_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PROJECT_MODEL.as_bytes()).unwrap();
    file
}

fn request(project_file: PathBuf, mode: GraphMode) -> GraphRequest {
    GraphRequest {
        project_file,
        project: None,
        mode,
        style_files: Vec::new(),
        filter: FilterOptions::default(),
        graph_name: "G".into(),
    }
}

#[test]
fn test_aggregated_graph() {
    let file = model_file();
    let response =
        GraphEngine::run(&request(file.path().to_path_buf(), GraphMode::Aggregate)).unwrap();

    // parent, api, impl, slf4j 2.0.9, junit, slf4j 1.7.36
    assert_eq!(response.node_count, 6);
    // 2 module edges + 2 api deps + 3 impl deps
    assert_eq!(response.edge_count, 7);
    assert!(!response.dot.contains("corp-parent"));
    assert!(response.dot.starts_with("digraph \"G\" {\n  node [shape=\"box\""));

    let edges: Vec<&str> = response
        .dot
        .lines()
        .filter(|l| l.contains(" -> "))
        .map(str::trim)
        .collect();
    assert_eq!(
        edges,
        [
            "\"1\" -> \"2\"",
            "\"1\" -> \"3\"",
            "\"2\" -> \"4\"",
            "\"2\" -> \"5\"",
            "\"3\" -> \"2\"",
            "\"2\" -> \"4\"[style=\"dashed\"]",
            "\"3\" -> \"6\"[style=\"dashed\",color=\"red\",fontcolor=\"red\"]",
        ]
    );
}

#[test]
fn test_aggregation_is_byte_identical_across_runs() {
    let file = model_file();
    let req = request(file.path().to_path_buf(), GraphMode::Aggregate);
    let first = GraphEngine::run(&req).unwrap().dot;
    let second = GraphEngine::run(&req).unwrap().dot;
    assert_eq!(first, second);
}

#[test]
fn test_single_project_graph() {
    let file = model_file();
    let mut req = request(file.path().to_path_buf(), GraphMode::Single);
    req.project = Some("api".into());
    let response = GraphEngine::run(&req).unwrap();

    assert_eq!(response.node_count, 3);
    assert_eq!(response.edge_count, 2);
}

#[test]
fn test_scope_filter_drops_test_dependencies() {
    let file = model_file();
    let mut req = request(file.path().to_path_buf(), GraphMode::Aggregate);
    req.filter.scopes = vec!["compile".into()];
    let response = GraphEngine::run(&req).unwrap();

    assert!(!response.dot.contains("junit"));
    assert_eq!(response.edge_count, 6);
}

#[test]
fn test_excluded_module_removes_its_subgraph() {
    let file = model_file();
    let mut req = request(file.path().to_path_buf(), GraphMode::Aggregate);
    req.filter.excludes = vec!["com.example:impl".into()];
    let response = GraphEngine::run(&req).unwrap();

    // parent -> api, api -> slf4j, api -> junit
    assert_eq!(response.edge_count, 3);
    assert!(!response.dot.contains("<br/>impl<br/>"));
    assert!(!response.dot.contains("1.7.36"));
}

#[test]
fn test_unknown_project_is_an_error() {
    let file = model_file();
    let mut req = request(file.path().to_path_buf(), GraphMode::Single);
    req.project = Some("missing".into());
    let err = GraphEngine::run(&req).unwrap_err();
    assert!(err.to_string().contains("Project not found: missing"));
}

#[test]
fn test_parent_cycle_in_model_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"root": "p", "projects": [
            {{"id": "p", "group-id": "g", "artifact-id": "p", "version": "1", "modules": ["a"]}},
            {{"id": "a", "group-id": "g", "artifact-id": "a", "version": "1", "parent": "b"}},
            {{"id": "b", "group-id": "g", "artifact-id": "b", "version": "1", "parent": "a"}}
        ]}}"#
    )
    .unwrap();

    let req = request(file.path().to_path_buf(), GraphMode::Aggregate);
    let err = GraphEngine::run(&req).unwrap_err();
    assert!(format!("{err:#}").contains("Parent cycle involving project"));
}

#[test]
fn test_scoped_style_applies_to_test_dependencies() {
    let file = model_file();
    let mut style = NamedTempFile::new().unwrap();
    write!(
        style,
        r#"{{"scoped-nodes": {{"test": {{"type": "ellipse", "color": "grey"}}}}}}"#
    )
    .unwrap();

    let mut req = request(file.path().to_path_buf(), GraphMode::Aggregate);
    req.style_files = vec![style.path().to_path_buf()];
    let response = GraphEngine::run(&req).unwrap();

    let junit = response
        .dot
        .lines()
        .find(|l| l.contains("junit</font>") || l.contains("<br/>junit<br/>"))
        .unwrap();
    assert!(junit.contains("shape=\"ellipse\""), "{junit}");
    assert!(junit.contains("color=\"grey\""), "{junit}");
}
