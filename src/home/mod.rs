mod system;
mod unix;
mod windows;

pub use system::SystemLocator;
pub use unix::UnixLocator;
pub use windows::WindowsLocator;

use crate::env::Environment;
use crate::error::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Strategy for finding the user's home directory.
pub trait HomeDirectoryLocator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns `PathsError::HomeNotFound` when no candidate yields a
    /// non-empty value.
    fn find_home(&self, env: &dyn Environment) -> Result<PathBuf>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Unix,
    Windows,
    System,
}

impl Platform {
    /// The environment-variable strategy of the compile target.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

pub fn create_locator(platform: Platform) -> Box<dyn HomeDirectoryLocator> {
    match platform {
        Platform::Unix => Box::new(UnixLocator),
        Platform::Windows => Box::new(WindowsLocator),
        Platform::System => Box::new(SystemLocator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_locator_matches_platform() {
        assert_eq!(create_locator(Platform::Unix).name(), "unix");
        assert_eq!(create_locator(Platform::Windows).name(), "windows");
        assert_eq!(create_locator(Platform::System).name(), "system");
    }

    #[test]
    fn default_platform_follows_target() {
        #[cfg(windows)]
        assert_eq!(Platform::default(), Platform::Windows);
        #[cfg(not(windows))]
        assert_eq!(Platform::default(), Platform::Unix);
    }
}
