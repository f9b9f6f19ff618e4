use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Immutable snapshot of the process environment.
///
/// Lookups come in two flavours. [`get`](Env::get) is exact and
/// case-sensitive, which matters because Plan 9's `$home` and Unix's `$HOME`
/// are distinct keys. [`get_fold`](Env::get_fold) is ASCII-case-insensitive
/// for the Windows family, whose environment keys are case-insensitive.
/// The caller picks folding per platform family at lookup time, so any
/// family's resolution chain can be exercised on any host.
#[derive(Debug, Clone)]
pub struct Env {
    vars: HashMap<OsString, OsString>,

    // Shadow map keyed by ASCII-uppercased names, for folded lookups.
    folded: HashMap<OsString, OsString>,
}

impl Env {
    /// Snapshot [`std::env::vars_os`].
    pub fn new() -> Self {
        Self::from_map(std::env::vars_os().collect())
    }

    /// Build a snapshot from a fabricated map.
    ///
    /// This is the deterministic-testing entry point: resolution over a
    /// fabricated snapshot never touches, and is never affected by, the real
    /// process environment.
    ///
    /// # Examples
    /// ```rust
    /// use std::ffi::OsString;
    /// use hearth::os::env::Env;
    ///
    /// let env = Env::from_map(
    ///     [(OsString::from("HOME"), OsString::from("/home/me"))].into(),
    /// );
    /// assert!(env.nonempty("HOME").is_some());
    /// ```
    pub fn from_map(vars: HashMap<OsString, OsString>) -> Self {
        let folded = vars
            .iter()
            .map(|(key, value)| (Env::fold_key(key), value.clone()))
            .collect();
        Self { vars, folded }
    }

    fn fold_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// ASCII-case-insensitive lookup.
    pub fn get_fold(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.folded
            .get(&Env::fold_key(key))
            .map(OsString::as_os_str)
    }

    /// [`get`](Env::get) filtered to non-empty values.
    ///
    /// Home-directory sources treat an unset variable and an empty one
    /// identically, so this is the accessor resolution code reaches for.
    pub fn nonempty(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// [`get_fold`](Env::get_fold) filtered to non-empty values.
    pub fn nonempty_fold(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.get_fold(key).filter(|value| !value.is_empty())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_some};

    fn env_of(vars: &[(&str, &str)]) -> Env {
        Env::from_map(
            vars.iter()
                .map(|(key, value)| (OsString::from(key), OsString::from(value)))
                .collect(),
        )
    }

    #[test]
    fn exact_lookup_is_case_sensitive() {
        let env = env_of(&[("home", "/plan9/home")]);
        assert_some!(env.get("home"));
        assert_none!(env.get("HOME"));
    }

    #[test]
    fn folded_lookup_ignores_ascii_case() {
        let env = env_of(&[("UserProfile", "C:\\Users\\me")]);
        let value = assert_some!(env.get_fold("USERPROFILE"));
        assert_eq!(value, "C:\\Users\\me");
        assert_none!(env.get("USERPROFILE"));
    }

    #[test]
    fn nonempty_filters_empty_values() {
        let env = env_of(&[("HOME", ""), ("USERPROFILE", "")]);
        assert_some!(env.get("HOME"));
        assert_none!(env.nonempty("HOME"));
        assert_none!(env.nonempty_fold("userprofile"));
    }

    #[test]
    fn live_snapshot_sees_the_process_environment() {
        // PATH is set in any environment these tests run in.
        let env = Env::new();
        assert_some!(env.get("PATH"));
    }
}
