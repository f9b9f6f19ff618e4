use std::path::{Path, PathBuf};

use crate::dir::{self, HomeDirError};

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with tilde expansion.
///
/// ```rust,no_run
/// # use hearth::fs::PathExt;
/// # use std::path::Path;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = Path::new("~/.cache/app").expand_user()?;
/// # Ok(())
/// # }
/// ```
pub trait PathExt: sealed::Sealed {
    /// Expand a leading `~` through the process-wide accessor.
    ///
    /// # Returns
    /// The expanded path; paths without a `~` prefix come back unchanged,
    /// as do paths that are not valid UTF-8 (a `~` prefix is a string
    /// convention). `~user/...` paths fail with
    /// [`HomeDirError::Unsupported`].
    fn expand_user(&self) -> Result<PathBuf, HomeDirError>;
}

impl PathExt for Path {
    fn expand_user(&self) -> Result<PathBuf, HomeDirError> {
        match self.to_str() {
            Some(path) => dir::expand(path),
            None => Ok(self.to_path_buf()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok};
    use serial_test::serial;

    #[test]
    fn plain_paths_pass_through() {
        // Non-tilde paths never reach resolution, so no cache interaction.
        let path = Path::new("/etc/app.toml");
        let expanded = assert_ok!(path.expand_user());
        assert_eq!(expanded, PathBuf::from("/etc/app.toml"));
    }

    #[test]
    fn other_users_are_rejected() {
        let err = assert_err!(Path::new("~root/notes").expand_user());
        assert_eq!(err, HomeDirError::Unsupported);
    }

    #[test]
    #[serial]
    fn tilde_expands_to_the_resolved_home() {
        let home = assert_ok!(dir::dir());
        let expanded = assert_ok!(Path::new("~/notes").expand_user());
        assert_eq!(expanded, home.join("notes"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_pass_through() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"~/\xff");
        let expanded = assert_ok!(Path::new(raw).expand_user());
        assert_eq!(expanded, PathBuf::from(raw));
    }
}
