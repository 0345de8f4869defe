//! Demo tree used by `treedraw demo`.

use crate::domain::{Label, Node};

fn file(name: &str) -> Node<Label> {
    Node::new(Label::new(name))
}

/// Small source tree: `foo` with four files, `bar2.ts` nesting two levels.
pub fn sample_tree() -> Node<Label> {
    Node::with_children(
        Label::new("foo"),
        vec![
            file("bar1.ts"),
            Node::with_children(
                Label::new("bar2.ts"),
                vec![
                    file("baz1.ts").with_child(file("foo1.ts")),
                    Node::with_children(
                        Label::new("baz2.ts"),
                        vec![file("foo1.ts"), file("foo2.ts")],
                    ),
                ],
            ),
            file("bar3.ts"),
            file("bar4.ts"),
        ],
    )
}
