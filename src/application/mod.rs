//! Application layer: tree files and rendering use cases
//!
//! Orchestrates domain logic with file loading and settings.

pub mod error;
pub mod error_ext;
pub mod tree_file;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use tree_file::{load_tree, parse_tree, render_file, render_sample, NodeSpec};
