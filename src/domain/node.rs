use std::fmt;

/// Anything that can produce the text of a single tree line.
///
/// `max_width` is a hint in characters. Implementations may ignore it.
pub trait Displayable {
    fn display(&self, max_width: Option<usize>) -> String;
}

impl<T: fmt::Display + ?Sized> Displayable for T {
    fn display(&self, max_width: Option<usize>) -> String {
        let text = self.to_string();
        match max_width {
            Some(width) if text.chars().count() > width => text.chars().take(width).collect(),
            _ => text,
        }
    }
}

/// Tree node owning its payload and its ordered children.
///
/// Children are rendered in insertion order. A node without children is a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub body: T,
    pub children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn new(body: T) -> Self {
        Self {
            body,
            children: Vec::new(),
        }
    }

    pub fn with_children(body: T, children: Vec<Node<T>>) -> Self {
        Self { body, children }
    }

    /// Builder-style append, keeps sibling order.
    pub fn with_child(mut self, child: Node<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Node<T>) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            max_depth = max_depth.max(depth);
            pending.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        max_depth
    }
}

// Flattens the subtree before dropping so deep chains don't recurse.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// File-like payload: a name with an optional icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub icon: Option<String>,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon {
            Some(icon) => write!(f, "{} {}", icon, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> Node<&'static str> {
        Node::new("root")
            .with_child(Node::new("a").with_child(Node::new("a1")))
            .with_child(Node::new("b"))
    }

    #[test]
    fn given_tree_when_counting_then_includes_every_node() {
        let tree = small_tree();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 3);
        assert!(!tree.is_leaf());
        assert!(tree.children[1].is_leaf());
    }

    #[test]
    fn given_width_hint_when_displaying_then_truncates_by_chars() {
        assert_eq!("baz1.ts".display(Some(4)), "baz1");
        assert_eq!("│ äö".display(Some(3)), "│ ä");
        assert_eq!("foo".display(Some(10)), "foo");
        assert_eq!("foo".display(Some(0)), "");
        assert_eq!("foo".display(None), "foo");
    }

    #[test]
    fn given_label_with_icon_when_displaying_then_icon_precedes_name() {
        assert_eq!(Label::new("bar1.ts").display(None), "bar1.ts");
        assert_eq!(Label::new("src").with_icon("#").display(None), "# src");
    }

    #[test]
    fn given_deep_chain_when_counting_and_dropping_then_no_recursion() {
        let mut node = Node::new(0usize);
        for level in 1..100_000 {
            node = Node::new(level).with_child(node);
        }
        assert_eq!(node.node_count(), 100_000);
        assert_eq!(node.depth(), 100_000);
        drop(node);
    }

    #[test]
    fn given_push_when_appending_then_order_is_kept() {
        let mut root = Node::new(Label::new("root"));
        root.push(Node::new(Label::new("first")));
        root.push(Node::new(Label::new("second")));
        let names: Vec<_> = root.children.iter().map(|c| c.body.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
