use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input `{}` does not exist", path.display())]
    MissingInput { path: PathBuf },
    #[error("could not decode `{}`: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("could not encode `{}`: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("io error on `{}`: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl Error {
    /// Whether a batch run can carry on with the next file after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Encode { .. })
    }
}
