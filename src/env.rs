//! Access to the process environment.
//!
//! Everything the resolver learns about the outside world (variables and the
//! working directory) comes through [`Environment`], so tests can inject a
//! fake home without touching the real process state.

use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

pub trait Environment: Send + Sync {
    /// Value of `key`, or `None` if it is missing. Values need not be
    /// valid unicode.
    fn var(&self, key: &str) -> Option<OsString>;

    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Like [`Environment::var`] but treats an empty value as missing.
    fn non_empty_var(&self, key: &str) -> Option<OsString> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The real environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// A fixed set of variables and an optional working directory.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, OsString>,
    current_dir: Option<PathBuf>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove_var(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.current_dir.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no working directory configured")
        })
    }
}
