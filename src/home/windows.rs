use super::HomeDirectoryLocator;
use crate::env::Environment;
use crate::error::{PathsError, Result};
use std::path::PathBuf;

/// `USERPROFILE`, falling back to `HOMEDRIVE` + `HOMEPATH`.
pub struct WindowsLocator;

impl HomeDirectoryLocator for WindowsLocator {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn find_home(&self, env: &dyn Environment) -> Result<PathBuf> {
        if let Some(profile) = env.non_empty_var("USERPROFILE") {
            return Ok(PathBuf::from(profile));
        }

        log::debug!("USERPROFILE is not set, trying HOMEDRIVE and HOMEPATH");
        let mut home = env.var("HOMEDRIVE").unwrap_or_default();
        if let Some(path) = env.var("HOMEPATH") {
            home.push(path);
        }

        if home.is_empty() {
            return Err(PathsError::HomeNotFound);
        }
        Ok(PathBuf::from(home))
    }
}
