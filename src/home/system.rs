use super::HomeDirectoryLocator;
use crate::env::Environment;
use crate::error::{PathsError, Result};
use std::path::PathBuf;

/// Delegates to the operating system lookup of the `dirs` crate.
///
/// Unlike the other locators this consults the real process (and, on Unix,
/// the passwd database when `HOME` is unset), so the injected environment is
/// not used.
pub struct SystemLocator;

impl HomeDirectoryLocator for SystemLocator {
    fn name(&self) -> &'static str {
        "system"
    }

    fn find_home(&self, _env: &dyn Environment) -> Result<PathBuf> {
        dirs::home_dir()
            .filter(|home| !home.as_os_str().is_empty())
            .ok_or(PathsError::HomeNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnvironment;

    #[test]
    fn agrees_with_dirs() {
        let found = SystemLocator.find_home(&StaticEnvironment::new()).ok();
        assert_eq!(found, dirs::home_dir());
    }
}
