//! Locates the exercism CLI's configuration file and exercises workspace.
//!
//! ```no_run
//! use exercism_paths::PathResolver;
//!
//! let paths = PathResolver::from_env()?;
//! let config = paths.config_path("")?;
//! let workspace = paths.exercises_path("~/code/exercism")?;
//! # Ok::<(), exercism_paths::PathsError>(())
//! ```

mod env;
mod error;
mod expand;
mod home;
mod resolver;
mod settings;

pub use env::{Environment, StaticEnvironment, SystemEnvironment};
pub use error::{PathsError, Result};
pub use expand::{clean, expand_home, expand_path, is_dir, make_absolute};
pub use home::{
    create_locator, HomeDirectoryLocator, Platform, SystemLocator, UnixLocator, WindowsLocator,
};
pub use resolver::PathResolver;
pub use settings::Settings;

/// Default name of the JSON file the CLI writes its configuration to.
pub const CONFIG_FILE: &str = ".exercism.json";

/// Default name of the directory exercises are downloaded into.
pub const EXERCISES_DIR: &str = "exercism";

/// Overrides the directory holding [`CONFIG_FILE`] when set.
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
