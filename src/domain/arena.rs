use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use super::error::{DomainError, DomainResult};
use super::node::Node;

/// Node stored in the arena, linked by indices.
#[derive(Debug)]
pub struct ArenaNode<T> {
    pub body: T,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in display order
    pub children: Vec<Index>,
}

/// Index-linked tree for callers that assemble nodes incrementally.
///
/// Unlike [`Node`], links are plain indices, so a caller can create cycles,
/// shared children or dangling references. [`NodeArena::to_tree`] rejects
/// those shapes before anything is rendered.
#[derive(Debug)]
pub struct NodeArena<T> {
    arena: Arena<ArenaNode<T>>,
    root: Option<Index>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node; without a parent the node becomes the root.
    #[instrument(level = "trace", skip_all)]
    pub fn insert_node(&mut self, body: T, parent: Option<Index>) -> Index {
        let node = ArenaNode {
            body,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    /// Appends an existing node to `parent`'s children.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: Index, child: Index) -> DomainResult<()> {
        if !self.arena.contains(child) {
            return Err(DomainError::NodeNotFound);
        }
        let parent_node = self
            .arena
            .get_mut(parent)
            .ok_or(DomainError::NodeNotFound)?;
        parent_node.children.push(child);
        if let Some(child_node) = self.arena.get_mut(child) {
            child_node.parent = Some(parent);
        }
        Ok(())
    }

    pub fn set_root(&mut self, idx: Index) -> DomainResult<()> {
        if !self.arena.contains(idx) {
            return Err(DomainError::NodeNotFound);
        }
        self.root = Some(idx);
        Ok(())
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode<T>> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut ArenaNode<T>> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order walk from the root. Assumes a well-formed tree; validate with
    /// [`NodeArena::to_tree`] first when links come from untrusted input.
    pub fn iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self)
    }

    /// Converts to an owned [`Node`] tree, validating the shape on the way.
    #[instrument(level = "debug", skip(self))]
    pub fn to_tree(&self) -> DomainResult<Node<T>>
    where
        T: Clone,
    {
        let root = self
            .root
            .ok_or_else(|| DomainError::invalid_tree("tree has no root"))?;
        let mut on_path = HashSet::new();
        let mut seen = HashSet::new();
        let mut pending = vec![self.enter(root, &mut on_path, &mut seen)?];

        while let Some(frame) = pending.last_mut() {
            let node = self.arena.get(frame.idx).ok_or(DomainError::NodeNotFound)?;
            if let Some(&child) = node.children.get(frame.next_child) {
                frame.next_child += 1;
                let child_frame = self.enter(child, &mut on_path, &mut seen)?;
                pending.push(child_frame);
                continue;
            }

            // All children built: close this node and hand it to its parent
            let Some(done) = pending.pop() else { break };
            on_path.remove(&done.idx);
            let built = Node::with_children(node.body.clone(), done.children);
            match pending.last_mut() {
                Some(parent) => parent.children.push(built),
                None => {
                    debug!(nodes = seen.len(), "arena validated");
                    return Ok(built);
                }
            }
        }
        Err(DomainError::invalid_tree("tree has no root"))
    }

    /// Checks `idx` before descending into it.
    fn enter(
        &self,
        idx: Index,
        on_path: &mut HashSet<Index>,
        seen: &mut HashSet<Index>,
    ) -> DomainResult<Frame<T>> {
        if on_path.contains(&idx) {
            return Err(DomainError::invalid_tree(format!(
                "cycle detected at node {:?}",
                idx.into_raw_parts()
            )));
        }
        if !seen.insert(idx) {
            return Err(DomainError::invalid_tree(format!(
                "node {:?} has more than one parent",
                idx.into_raw_parts()
            )));
        }
        let node = self.arena.get(idx).ok_or_else(|| {
            DomainError::invalid_tree(format!(
                "dangling child index {:?}",
                idx.into_raw_parts()
            ))
        })?;
        on_path.insert(idx);
        Ok(Frame {
            idx,
            next_child: 0,
            children: Vec::with_capacity(node.children.len()),
        })
    }
}

/// Node under construction in [`NodeArena::to_tree`].
struct Frame<T> {
    idx: Index,
    next_child: usize,
    children: Vec<Node<T>>,
}

pub struct PreOrderIter<'a, T> {
    arena: &'a NodeArena<T>,
    stack: Vec<Index>,
}

impl<'a, T> PreOrderIter<'a, T> {
    fn new(arena: &'a NodeArena<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = (Index, &'a ArenaNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
