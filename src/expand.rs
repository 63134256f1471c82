use crate::env::Environment;
use crate::error::{PathsError, Result};
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Replaces a leading `~` with `home` when it is immediately followed by the
/// platform separator. `~`, `~user` and `~foo` are returned untouched.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    let mut chars = path.chars();
    if chars.next() != Some('~') || chars.next() != Some(MAIN_SEPARATOR) {
        return PathBuf::from(path);
    }

    match home.to_str() {
        Some(home) => {
            PathBuf::from(shellexpand::tilde_with_context(path, || Some(home)).into_owned())
        }
        None => {
            let mut expanded = home.as_os_str().to_owned();
            expanded.push(&path[1..]);
            PathBuf::from(expanded)
        }
    }
}

/// Lexically normalizes `path`: drops `.` segments, folds `name/..` pairs
/// and the trailing separator. `..` directly under the root is dropped.
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Absolute paths are returned as given; relative ones are joined onto the
/// working directory and cleaned.
pub fn make_absolute(path: PathBuf, env: &dyn Environment) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env
        .current_dir()
        .map_err(PathsError::WorkingDirectoryUnavailable)?;
    Ok(clean(&cwd.join(path)))
}

/// Trims, expands the home prefix and absolutizes `path`.
pub fn expand_path(path: &str, home: &Path, env: &dyn Environment) -> Result<PathBuf> {
    make_absolute(expand_home(path.trim(), home), env)
}

/// Whether `path` exists and is a directory. Any stat error counts as `false`.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
