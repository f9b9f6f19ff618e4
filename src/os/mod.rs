//! OS-level helpers.
//!
//! Every home-directory source is an environment variable, so the one
//! helper here is the [`Env`](env::Env) snapshot type.

pub mod env;
