use super::HomeDirectoryLocator;
use crate::env::Environment;
use crate::error::{PathsError, Result};
use std::path::PathBuf;

pub struct UnixLocator;

impl HomeDirectoryLocator for UnixLocator {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn find_home(&self, env: &dyn Environment) -> Result<PathBuf> {
        env.non_empty_var("HOME")
            .map(PathBuf::from)
            .ok_or(PathsError::HomeNotFound)
    }
}
