//! Tree drawing
//!
//! Depth-first, pre-order: one line per node, joined with `\n`, no trailing
//! newline. The walk uses an explicit work-stack, so tree depth is bounded by
//! memory, not by the call stack. All state is local to a render call.
//!
//! Owned [`Node`] trees cannot contain cycles. Index-linked trees go through
//! [`render_arena`], which validates them first.

use tracing::{debug, instrument, trace};

use crate::domain::{Displayable, DomainResult, IndentKind, Node, NodeArena, RenderRules};

/// Draws trees with a fixed set of [`RenderRules`].
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    rules: RenderRules,
}

impl TreeRenderer {
    pub fn new(rules: RenderRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RenderRules {
        &self.rules
    }

    #[instrument(level = "debug", skip_all)]
    pub fn render<T: Displayable>(&self, root: &Node<T>) -> String {
        let mut lines = Vec::new();
        // Ancestor indentation of the current path, and where each level ends in it
        let mut indent = String::new();
        let mut level_ends: Vec<usize> = Vec::new();
        let mut pending: Vec<(&Node<T>, usize, Option<IndentKind>)> = vec![(root, 0, None)];

        while let Some((node, depth, kind)) = pending.pop() {
            level_ends.truncate(depth.saturating_sub(1));
            indent.truncate(level_ends.last().copied().unwrap_or(0));

            let mut line = indent.clone();
            if let Some(kind) = kind {
                line.push_str(self.rules.connector(kind));
            }
            let hint = self
                .rules
                .max_width
                .map(|width| width.saturating_sub(line.chars().count()));
            line.push_str(&node.body.display(hint));
            trace!(depth, line = %line);
            lines.push(line);

            if let Some(kind) = kind {
                indent.push_str(self.rules.segment(kind));
                level_ends.push(indent.len());
            }
            // Push children in reverse order for left-to-right traversal
            let count = node.children.len();
            for (idx, child) in node.children.iter().enumerate().rev() {
                pending.push((child, depth + 1, Some(IndentKind::for_position(idx, count))));
            }
        }

        debug!(lines = lines.len(), style = ?self.rules.style, "tree rendered");
        lines.join("\n")
    }

    /// Validates an index-linked tree, then renders it.
    #[instrument(level = "debug", skip_all)]
    pub fn render_arena<T: Displayable + Clone>(&self, arena: &NodeArena<T>) -> DomainResult<String> {
        let tree = arena.to_tree()?;
        Ok(self.render(&tree))
    }
}

/// Renders `root` with `rules`.
pub fn render<T: Displayable>(rules: &RenderRules, root: &Node<T>) -> String {
    TreeRenderer::new(rules.clone()).render(root)
}

/// Renders an index-linked tree, failing with `InvalidTree` on malformed links.
pub fn render_arena<T: Displayable + Clone>(
    rules: &RenderRules,
    arena: &NodeArena<T>,
) -> DomainResult<String> {
    TreeRenderer::new(rules.clone()).render_arena(arena)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::util::testing;

    fn scenario_tree() -> Node<&'static str> {
        Node::with_children(
            "foo",
            vec![
                Node::new("bar1"),
                Node::with_children(
                    "bar2",
                    vec![
                        Node::new("baz1").with_child(Node::new("foo1")),
                        Node::with_children("baz2", vec![Node::new("foo1"), Node::new("foo2")]),
                    ],
                ),
                Node::new("bar3"),
                Node::new("bar4"),
            ],
        )
    }

    #[test]
    fn given_scenario_tree_when_rendering_unicode_then_matches_expected() {
        testing::init_test_setup();
        let expected = "\
foo
├──bar1
├──bar2
│  ├──baz1
│  │  └──foo1
│  └──baz2
│     ├──foo1
│     └──foo2
├──bar3
└──bar4";
        assert_eq!(render(&RenderRules::unicode(), &scenario_tree()), expected);
    }

    #[test]
    fn given_scenario_tree_when_rendering_depth_only_then_repeats_vertical_per_level() {
        let rules = RenderRules::depth_only("| ", "+ ");
        let expected = "\
foo
+ bar1
+ bar2
| + baz1
| | + foo1
| + baz2
| | + foo1
| | + foo2
+ bar3
+ bar4";
        assert_eq!(render(&rules, &scenario_tree()), expected);
    }

    #[test]
    fn given_single_node_when_rendering_then_no_prefix_and_no_newline() {
        let out = render(&RenderRules::unicode(), &Node::new("alone"));
        assert_eq!(out, "alone");
    }

    #[test]
    fn given_only_child_when_rendering_then_uses_last_connector() {
        let tree = Node::new("root").with_child(Node::new("only"));
        assert_eq!(render(&RenderRules::ascii(), &tree), "root\n`--only");
    }

    #[test]
    fn given_max_width_when_rendering_then_payload_gets_remaining_width() {
        let rules = RenderRules::unicode().with_max_width(Some(6));
        let tree = Node::new("rootnode").with_child(Node::new("child").with_child(Node::new("grandchild")));
        // prefixes are 3 and 6 chars wide
        assert_eq!(render(&rules, &tree), "rootno\n└──chi\n   └──");
    }

    #[test]
    fn given_renderer_when_rendering_twice_then_output_is_identical() {
        let renderer = TreeRenderer::new(RenderRules::unicode());
        let tree = scenario_tree();
        assert_eq!(renderer.render(&tree), renderer.render(&tree));
    }

    #[test]
    fn given_chain_of_100k_levels_when_rendering_then_one_line_per_level() {
        let mut node = Node::new("leaf".to_string());
        for level in (0..100_000).rev() {
            node = Node::new(format!("n{level}")).with_child(node);
        }
        // empty filler keeps lines short; the walk depth is what matters
        let rules = RenderRules {
            blank: String::new(),
            ..RenderRules::unicode()
        };
        let out = render(&rules, &node);
        assert_eq!(out.lines().count(), 100_001);
        assert_eq!(out.lines().next(), Some("n0"));
        assert_eq!(out.lines().last(), Some("└──leaf"));
    }

    #[test]
    fn given_cyclic_arena_when_rendering_then_invalid_tree() {
        let mut arena = NodeArena::new();
        let root = arena.insert_node("root", None);
        let child = arena.insert_node("child", Some(root));
        arena.add_child(child, root).expect("link");
        let result = render_arena(&RenderRules::unicode(), &arena);
        assert!(matches!(result, Err(DomainError::InvalidTree { .. })));
    }

    #[test]
    fn given_valid_arena_when_rendering_then_matches_owned_tree() {
        let mut arena = NodeArena::new();
        let root = arena.insert_node("root", None);
        let a = arena.insert_node("a", Some(root));
        arena.insert_node("a1", Some(a));
        arena.insert_node("b", Some(root));
        let expected = render(
            &RenderRules::unicode(),
            &Node::with_children("root", vec![Node::new("a").with_child(Node::new("a1")), Node::new("b")]),
        );
        assert_eq!(render_arena(&RenderRules::unicode(), &arena), Ok(expected));
    }
}
