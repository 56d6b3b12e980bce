//! codeskel: extract source file skeletons using tree-sitter queries.
//!
//! Removes function and method implementations while preserving
//! signatures, type definitions, and Python docstrings, and packs whole
//! directory trees into reviewable text with gitignore-aware discovery.

mod concat;
mod error;
mod extract;
mod lang;
mod tree;
mod util;
mod walk;

pub use crate::concat::{concatenate, ConcatOptions};
pub use crate::error::Error;
pub use crate::extract::{skeleton, skeleton_from_path, Extractor};
pub use crate::lang::Lang;
pub use crate::tree::render_tree;
pub use crate::walk::{find_files, WalkOptions, DEFAULT_IGNORE_PATTERNS};
