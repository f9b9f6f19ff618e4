//! Filesystem-facing helpers.
//!
//! Provides the [`PathExt`](path_ext::PathExt) extension trait for
//! [`Path`](std::path::Path), expanding a leading `~` in place.

pub mod path_ext;

pub use path_ext::PathExt;
