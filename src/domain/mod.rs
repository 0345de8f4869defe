//! Domain layer: tree model and drawing rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod node;
pub mod rules;

pub use arena::{ArenaNode, NodeArena};
pub use error::{DomainError, DomainResult};
pub use node::{Displayable, Label, Node};
pub use rules::{IndentKind, RenderRules, RuleStyle};
