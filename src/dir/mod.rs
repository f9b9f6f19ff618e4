//! Cached home-directory accessor and tilde expansion.
//!
//! [`dir`] resolves the invoking user's home directory through a
//! process-wide, toggleable cache; [`expand`] substitutes a leading `~` in a
//! path with that directory. The cache is deliberately simple: disabling it
//! stops reads and writes of the stored value but does not clear it, and
//! [`reset`] is the one operation that does. Callers that toggle the cache
//! and need guaranteed freshness pair the toggle with a reset.
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let home = hearth::dir()?;
//! let config = hearth::expand("~/.config/app.toml")?;
//! assert!(config.starts_with(home));
//! # Ok(())
//! # }
//! ```

pub mod detect;

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::os::env::Env;
use detect::Platform;

/// Errors reported by home-directory resolution and expansion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomeDirError {
    /// No source for the platform family held a non-empty value. Carries
    /// the sources that were consulted, in order.
    #[error("home directory not found: nothing set in {0}")]
    NotFound(&'static str),

    /// A `~user/...` path was passed to expansion. Resolving another user's
    /// home directory is unsupported and never attempted.
    #[error("cannot expand user-specific home dir")]
    Unsupported,
}

#[derive(Debug)]
struct CacheState {
    enabled: bool,
    value: Option<PathBuf>,
}

/// Home-directory accessor with a toggleable memoization cache.
///
/// A process-wide instance backs the crate-root functions ([`dir`],
/// [`expand`], [`set_cache_enable`], [`cache_enabled`], [`reset`]); separate
/// instances can be constructed where isolated cache state is needed, e.g.
/// in tests.
///
/// The cache starts enabled and empty. A successful resolution populates it
/// while it is enabled; [`reset`](HomeDir::reset) empties it; toggling it
/// off leaves any stored value in place, merely unconsulted.
#[derive(Debug)]
pub struct HomeDir {
    state: Mutex<CacheState>,
}

impl HomeDir {
    /// New accessor with caching enabled and nothing stored.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(CacheState {
                enabled: true,
                value: None,
            }),
        }
    }

    /// The invoking user's home directory.
    ///
    /// Returns the cached value when caching is enabled and a prior call
    /// stored one, without touching the environment. Otherwise resolves via
    /// [`detect::detect_home_dir`] and, when caching is enabled, stores the
    /// result. Failed resolutions are never stored; the next call retries.
    pub fn dir(&self) -> Result<PathBuf, HomeDirError> {
        self.dir_via(detect::detect_home_dir)
    }

    /// [`dir`](HomeDir::dir) against an explicit platform family and
    /// environment snapshot. Cache semantics are identical.
    pub fn dir_in(&self, platform: Platform, env: &Env) -> Result<PathBuf, HomeDirError> {
        self.dir_via(|| detect::detect_home_dir_in(platform, env))
    }

    fn dir_via(
        &self,
        resolve: impl FnOnce() -> Result<PathBuf, HomeDirError>,
    ) -> Result<PathBuf, HomeDirError> {
        // Check-then-store stays under one lock so concurrent callers
        // cannot interleave between the miss and the store.
        let mut state = self.lock();
        if state.enabled {
            if let Some(cached) = &state.value {
                return Ok(cached.clone());
            }
        }
        let resolved = resolve()?;
        if state.enabled {
            state.value = Some(resolved.clone());
        }
        Ok(resolved)
    }

    /// Tilde-expand `path` through this accessor. See the crate-root
    /// [`expand`] for the expansion rules.
    pub fn expand(&self, path: &str) -> Result<PathBuf, HomeDirError> {
        expand_via(path, || self.dir())
    }

    /// [`expand`](HomeDir::expand) against an explicit platform family and
    /// environment snapshot.
    pub fn expand_in(
        &self,
        path: &str,
        platform: Platform,
        env: &Env,
    ) -> Result<PathBuf, HomeDirError> {
        expand_via(path, || self.dir_in(platform, env))
    }

    /// Toggle the cache.
    ///
    /// Disabling does not clear a stored value, it only stops reads and
    /// writes of it; re-enabling later without an intervening
    /// [`reset`](HomeDir::reset) makes the old value observable again.
    pub fn set_cache_enable(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    /// Current cache toggle state.
    pub fn cache_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Drop the stored value, regardless of the toggle. The next
    /// [`dir`](HomeDir::dir) call re-resolves.
    pub fn reset(&self) {
        self.lock().value = None;
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // The state is a bool and an Option; no update can leave it torn,
        // so a poisoned lock still holds a usable value.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HomeDir {
    fn default() -> Self {
        Self::new()
    }
}

fn expand_via(
    path: &str,
    home: impl FnOnce() -> Result<PathBuf, HomeDirError>,
) -> Result<PathBuf, HomeDirError> {
    if path.is_empty() {
        return Ok(PathBuf::new());
    }
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };
    // Anything between `~` and the first separator names another user.
    if rest.chars().next().is_some_and(|c| c != '/' && c != '\\') {
        return Err(HomeDirError::Unsupported);
    }
    let home = home()?;
    let rest = rest.trim_start_matches(std::path::is_separator);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

static HOME_DIR: HomeDir = HomeDir::new();

/// The invoking user's home directory, through the process-wide cache.
///
/// # Examples
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let home = hearth::dir()?;
/// # Ok(())
/// # }
/// ```
pub fn dir() -> Result<PathBuf, HomeDirError> {
    HOME_DIR.dir()
}

/// Expand a leading `~` in `path` with the invoking user's home directory.
///
/// - An empty `path` comes back empty.
/// - A `path` not starting with `~` comes back unchanged.
/// - `~` alone becomes the [`dir`] value.
/// - `~/rest` becomes the [`dir`] value joined with `rest`.
/// - `~user/rest` fails with [`HomeDirError::Unsupported`]; resolving
///   another user's home directory is never attempted.
///
/// Resolution errors propagate unchanged, and resolution honours the
/// process-wide cache.
///
/// # Examples
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = hearth::expand("~/.config/app.toml")?;
/// let as_given = hearth::expand("/etc/app.toml")?;
/// # Ok(())
/// # }
/// ```
pub fn expand(path: &str) -> Result<PathBuf, HomeDirError> {
    HOME_DIR.expand(path)
}

/// Toggle the process-wide cache. See [`HomeDir::set_cache_enable`] for the
/// staleness caveat.
pub fn set_cache_enable(enabled: bool) {
    HOME_DIR.set_cache_enable(enabled);
}

/// Current toggle state of the process-wide cache.
pub fn cache_enabled() -> bool {
    HOME_DIR.cache_enabled()
}

/// Clear the process-wide cache so the next [`dir`] call re-resolves.
pub fn reset() {
    HOME_DIR.reset();
}
