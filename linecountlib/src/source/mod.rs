//! Source discovery: find files to count.
//!
//! Three ways to produce candidate paths:
//!
//! - **Flat listing**: the immediate files of one directory ([`list_dir`])
//! - **Glob**: shell-style pattern expansion ([`expand_glob`])
//! - **Recursive walk**: every non-directory entry under a root, streamed to
//!   a visitor as it is found ([`walk_tree`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use linecountlib::source::{expand_glob, list_dir};
//!
//! let files = list_dir("logs")?;
//! let notes = expand_glob("notes/**/*.md")?;
//! ```

pub mod listing;
pub mod walk;

pub use listing::{expand_glob, list_dir};
pub use walk::{walk_tree, WalkEvent};
