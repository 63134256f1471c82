use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathsError {
    #[error("unable to locate home directory")]
    HomeNotFound,

    #[error("unable to determine current working directory: {0}")]
    WorkingDirectoryUnavailable(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, PathsError>;
