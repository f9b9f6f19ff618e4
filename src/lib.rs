//! Hearth - home-directory resolution, caching and tilde expansion.
//!
//! No single OS API reports the invoking user's home directory identically
//! across platforms, so this crate resolves it from a fixed, ordered list of
//! environment sources per platform family (Unix-like, Plan 9, Windows) and
//! memoizes the result behind a toggleable process-wide cache.
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let home = hearth::dir()?;
//! let config = hearth::expand("~/.config/app.toml")?;
//! # Ok(())
//! # }
//! ```

pub mod dir;
pub mod fs;
pub mod os;

pub use dir::detect::{Platform, detect_home_dir};
pub use dir::{HomeDir, HomeDirError, cache_enabled, dir, expand, reset, set_cache_enable};
pub use fs::PathExt;
pub use os::env::Env;
