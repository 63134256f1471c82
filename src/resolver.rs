use crate::env::{Environment, SystemEnvironment};
use crate::error::{PathsError, Result};
use crate::expand;
use crate::home::{create_locator, HomeDirectoryLocator};
use crate::settings::Settings;
use crate::XDG_CONFIG_HOME;
use std::path::{Path, PathBuf};

/// Resolves the configuration file and exercises directory locations.
///
/// The home directory and `XDG_CONFIG_HOME` are captured when the resolver
/// is built. Call [`PathResolver::recalculate`] to pick up changes to the
/// XDG variable; the home directory is only looked up again after
/// [`PathResolver::clear_home`].
pub struct PathResolver {
    env: Box<dyn Environment>,
    locator: Box<dyn HomeDirectoryLocator>,
    settings: Settings,
    home: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(
        env: Box<dyn Environment>,
        locator: Box<dyn HomeDirectoryLocator>,
        settings: Settings,
    ) -> Result<Self> {
        let mut resolver = Self {
            env,
            locator,
            settings,
            home: None,
            xdg_config_home: None,
        };
        resolver.recalculate()?;
        Ok(resolver)
    }

    /// Resolver over the real process environment with default settings.
    pub fn from_env() -> Result<Self> {
        Self::with_settings(Settings::default())
    }

    /// Resolver over the real process environment, using the locator the
    /// settings name.
    pub fn with_settings(settings: Settings) -> Result<Self> {
        let locator = create_locator(settings.locator);
        Self::new(Box::new(SystemEnvironment), locator, settings)
    }

    /// Resolver with a known home directory. The locator named by the
    /// settings is only consulted after [`PathResolver::clear_home`], so this
    /// works in environments that have no home variable at all.
    pub fn new_with_home(
        env: Box<dyn Environment>,
        home: impl Into<PathBuf>,
        settings: Settings,
    ) -> Self {
        let mut resolver = Self {
            env,
            locator: create_locator(settings.locator),
            settings,
            home: Some(home.into()),
            xdg_config_home: None,
        };
        resolver.reload_xdg_config_home();
        resolver
    }

    pub fn home(&self) -> Result<&Path> {
        self.home.as_deref().ok_or(PathsError::HomeNotFound)
    }

    pub fn xdg_config_home(&self) -> Option<&Path> {
        self.xdg_config_home.as_deref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Forgets the home directory so the next [`PathResolver::recalculate`]
    /// looks it up again.
    pub fn clear_home(&mut self) {
        self.home = None;
    }

    pub fn recalculate(&mut self) -> Result<()> {
        if self.home.is_none() {
            let home = self.locator.find_home(&*self.env)?;
            log::debug!(
                "Located home directory with {} locator: {}",
                self.locator.name(),
                home.display()
            );
            self.home = Some(home);
        }

        self.reload_xdg_config_home();
        Ok(())
    }

    fn reload_xdg_config_home(&mut self) {
        self.xdg_config_home = self.env.non_empty_var(XDG_CONFIG_HOME).map(PathBuf::from);
        if let Some(xdg) = &self.xdg_config_home {
            if !xdg.is_absolute() {
                log::warn!("{} is not absolute: {}", XDG_CONFIG_HOME, xdg.display());
            }
        }
    }

    /// Location of the configuration file.
    ///
    /// Blank input gives the default location. Otherwise the input is
    /// expanded, and the config file name is appended only if the result is
    /// an existing directory.
    pub fn config_path(&self, path: &str) -> Result<PathBuf> {
        if path.is_empty() {
            let base = match &self.xdg_config_home {
                Some(xdg) => xdg.as_path(),
                None => self.home()?,
            };
            return Ok(expand::clean(&base.join(&self.settings.config_file)));
        }

        let expanded = self.expand(path)?;
        if expand::is_dir(&expanded) {
            log::debug!("{} is a directory, appending config file name", expanded.display());
            return Ok(expand::clean(&expanded.join(&self.settings.config_file)));
        }
        Ok(expanded)
    }

    /// Location of the exercises directory. Blank input gives the default.
    pub fn exercises_path(&self, path: &str) -> Result<PathBuf> {
        if path.is_empty() {
            let default = self.home()?.join(&self.settings.exercises_dir);
            return Ok(expand::clean(&default));
        }
        self.expand(path)
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf> {
        expand::expand_path(path, self.home()?, &*self.env)
    }
}

impl std::fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathResolver")
            .field("locator", &self.locator.name())
            .field("settings", &self.settings)
            .field("home", &self.home)
            .field("xdg_config_home", &self.xdg_config_home)
            .finish()
    }
}
