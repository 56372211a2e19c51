//! Test fixture generators for integration tests.
#![allow(dead_code)]

use depgraph::domain::edge::NodeResolution;
use depgraph::domain::node::Artifact;
use depgraph::domain::tree::DependencyNode;

pub fn artifact(group_id: &str, artifact_id: &str, version: &str, scope: &str) -> Artifact {
    Artifact::new(group_id, artifact_id, version).with_scope(scope)
}

pub fn dep(artifact_id: &str, version: &str, resolution: NodeResolution) -> DependencyNode {
    DependencyNode::new(artifact("org.lib", artifact_id, version, "compile"), resolution)
}

pub fn project_root(artifact_id: &str) -> DependencyNode {
    DependencyNode::new(
        Artifact::new("com.example", artifact_id, "1.0"),
        NodeResolution::Included,
    )
}

/// `A` with children `B` (included), `C` (duplicate) and `D` (conflict, loses to `B`'s version).
pub fn classification_tree() -> DependencyNode {
    project_root("a")
        .with_child(dep("b", "2.0", NodeResolution::Included))
        .with_child(dep("c", "1.0", NodeResolution::OmittedForDuplicate))
        .with_child(dep("d", "1.0", NodeResolution::OmittedForConflict))
}

/// Project model with a parent, two nested modules and a grandparent above the root.
pub const PROJECT_MODEL: &str = r#"{
  "root": "parent",
  "projects": [
    { "id": "corp", "group-id": "com.example", "artifact-id": "corp-parent", "version": "7" },
    { "id": "parent", "group-id": "com.example", "artifact-id": "parent", "version": "1.0",
      "parent": "corp", "modules": ["api", "impl"],
      "dependencies": { "group-id": "com.example", "artifact-id": "parent", "version": "1.0" } },
    { "id": "api", "group-id": "com.example", "artifact-id": "api", "version": "1.0",
      "parent": "parent",
      "dependencies": {
        "group-id": "com.example", "artifact-id": "api", "version": "1.0",
        "children": [
          { "group-id": "org.slf4j", "artifact-id": "slf4j-api", "version": "2.0.9",
            "scopes": ["compile"] },
          { "group-id": "junit", "artifact-id": "junit", "version": "4.13.2",
            "scopes": ["test"] }
        ]
      } },
    { "id": "impl", "group-id": "com.example", "artifact-id": "impl", "version": "1.0",
      "parent": "parent",
      "dependencies": {
        "group-id": "com.example", "artifact-id": "impl", "version": "1.0",
        "children": [
          { "group-id": "com.example", "artifact-id": "api", "version": "1.0",
            "scopes": ["compile"],
            "children": [
              { "group-id": "org.slf4j", "artifact-id": "slf4j-api", "version": "2.0.9",
                "scopes": ["compile"], "resolution": "omitted-for-duplicate" }
            ] },
          { "group-id": "org.slf4j", "artifact-id": "slf4j-api", "version": "1.7.36",
            "scopes": ["compile"], "resolution": "omitted-for-conflict" }
        ]
      } }
  ]
}"#;
