//! TOML tree files
//!
//! ```toml
//! name = "foo"
//!
//! [[children]]
//! name = "bar1.ts"
//!
//! [[children]]
//! name = "bar2.ts"
//! icon = "+"
//!
//! [[children.children]]
//! name = "baz1.ts"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{Label, Node};
use crate::render::TreeRenderer;
use crate::sample::sample_tree;

/// One node as written in a tree file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl From<NodeSpec> for Node<Label> {
    fn from(spec: NodeSpec) -> Self {
        let body = Label {
            name: spec.name,
            icon: spec.icon,
        };
        Node::with_children(body, spec.children.into_iter().map(Node::from).collect())
    }
}

/// Parses tree file content; `origin` only labels error messages.
pub fn parse_tree(content: &str, origin: &str) -> ApplicationResult<Node<Label>> {
    let spec: NodeSpec = toml::from_str(content).map_err(|e| ApplicationError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    Ok(spec.into())
}

#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> ApplicationResult<Node<Label>> {
    let content = fs::read_to_string(path).with_path_context("read tree file", path)?;
    let tree = parse_tree(&content, &path.display().to_string())?;
    debug!(nodes = tree.node_count(), depth = tree.depth(), "tree file loaded");
    Ok(tree)
}

#[instrument(level = "debug", skip(settings))]
pub fn render_file(path: &Path, settings: &Settings) -> ApplicationResult<String> {
    let tree = load_tree(path)?;
    Ok(TreeRenderer::new(settings.rules()).render(&tree))
}

pub fn render_sample(settings: &Settings) -> ApplicationResult<String> {
    Ok(TreeRenderer::new(settings.rules()).render(&sample_tree()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_tables_when_parsing_then_builds_ordered_tree() {
        let content = r#"
name = "foo"

[[children]]
name = "bar1.ts"

[[children]]
name = "bar2.ts"
icon = "+"

[[children.children]]
name = "baz1.ts"

[[children]]
name = "bar3.ts"
"#;
        let tree = parse_tree(content, "inline").expect("parse");
        assert_eq!(tree.body.name, "foo");
        let names: Vec<_> = tree.children.iter().map(|c| c.body.name.as_str()).collect();
        assert_eq!(names, vec!["bar1.ts", "bar2.ts", "bar3.ts"]);
        assert_eq!(tree.children[1].body.icon.as_deref(), Some("+"));
        assert_eq!(tree.children[1].children[0].body.name, "baz1.ts");
    }

    #[test]
    fn given_missing_name_when_parsing_then_parse_error_names_origin() {
        let err = parse_tree("icon = \"x\"", "broken.toml").unwrap_err();
        assert!(matches!(err, ApplicationError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"), "{err}");
    }

    #[test]
    fn given_missing_file_when_loading_then_operation_failed_with_path() {
        let err = load_tree(Path::new("/nonexistent/tree.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tree.toml"), "{err}");
    }
}
