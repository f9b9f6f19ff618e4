//! Per-family home-directory detection.
//!
//! Each platform family has a fixed, ordered list of environment sources.
//! The first non-empty source wins and later sources are never consulted;
//! if every source is empty the detection fails. Values are taken as-is,
//! with no check against the filesystem.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::dir::HomeDirError;
use crate::os::env::Env;

/// Platform family, grouped by home-directory environment conventions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Platform {
    /// Linux, macOS, the BSDs and everything else exposing `$HOME`.
    UnixLike,
    /// Plan 9, which uses the lowercase `$home`.
    Plan9,
    /// Windows, with its `HOME`/`USERPROFILE`/`HOMEDRIVE`+`HOMEPATH` chain.
    Windows,
}

impl Platform {
    /// Family of the OS the process is running on, from
    /// [`std::env::consts::OS`]. Determined at call time, never stored.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "plan9" => Platform::Plan9,
            _ => Platform::UnixLike,
        }
    }
}

/// Detect the invoking user's home directory from the live environment.
///
/// This is the uncached resolution primitive behind the cached
/// [`dir()`](crate::dir()) accessor.
pub fn detect_home_dir() -> Result<PathBuf, HomeDirError> {
    detect_home_dir_in(Platform::current(), &Env::new())
}

/// Detect the home directory for an explicit family and environment
/// snapshot.
///
/// Pure with respect to process state, which makes every family's chain
/// testable on any host.
pub fn detect_home_dir_in(platform: Platform, env: &Env) -> Result<PathBuf, HomeDirError> {
    match platform {
        Platform::UnixLike => dir_unix(env),
        Platform::Plan9 => dir_plan9(env),
        Platform::Windows => dir_windows(env),
    }
}

fn dir_unix(env: &Env) -> Result<PathBuf, HomeDirError> {
    env.nonempty("HOME")
        .map(PathBuf::from)
        .ok_or(HomeDirError::NotFound("$HOME"))
}

// Case-sensitive on purpose: `$home`, not `$HOME`.
fn dir_plan9(env: &Env) -> Result<PathBuf, HomeDirError> {
    env.nonempty("home")
        .map(PathBuf::from)
        .ok_or(HomeDirError::NotFound("$home"))
}

fn dir_windows(env: &Env) -> Result<PathBuf, HomeDirError> {
    if let Some(home) = env.nonempty_fold("HOME") {
        return Ok(PathBuf::from(home));
    }
    if let Some(profile) = env.nonempty_fold("USERPROFILE") {
        return Ok(PathBuf::from(profile));
    }
    if let (Some(drive), Some(path)) = (
        env.nonempty_fold("HOMEDRIVE"),
        env.nonempty_fold("HOMEPATH"),
    ) {
        // `HOMEDRIVE` carries the trailing drive colon, so the two parts
        // are concatenated without inserting a separator.
        let mut home = OsString::from(drive);
        home.push(path);
        return Ok(PathBuf::from(home));
    }
    Err(HomeDirError::NotFound(
        "%HOME%, %USERPROFILE%, %HOMEDRIVE%%HOMEPATH%",
    ))
}
