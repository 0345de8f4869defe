//! Recursive pretty-printer for labeled trees.
//!
//! ```
//! use treedraw::{render, Node, RenderRules};
//!
//! let tree = Node::new("foo")
//!     .with_child(Node::new("bar"))
//!     .with_child(Node::new("baz").with_child(Node::new("qux")));
//!
//! assert_eq!(
//!     render(&RenderRules::unicode(), &tree),
//!     "foo\n├──bar\n└──baz\n   └──qux"
//! );
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod sample;
pub mod util;

pub use domain::{Displayable, DomainError, IndentKind, Label, Node, NodeArena, RenderRules, RuleStyle};
pub use render::{render, render_arena, TreeRenderer};
